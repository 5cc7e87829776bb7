use clap::{Parser, Subcommand};
use pagesynth::collect::PageSet;
use pagesynth::dictionary::SubstitutionTable;
use pagesynth::logger::StderrLogger;
use pagesynth::output::{self, RunReport};
use pagesynth::transform::{PageTransformer, TransformError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pagesynth")]
#[command(about = "Batch HTML page synthesizer")]
#[command(long_about = "\
Batch HTML page synthesizer

Rewrites HTML pages with per-folder dictionary substitutions and merges
companion chapter text into each page's <main> region. Every input gets a
derived sibling output; originals are never modified.

Folder layout:

  book/
  ├── dictionary.csv        # Optional substitution rules, one 'find,replace' per line
  ├── index.html            # Root document: substituted line by line → index_2.html
  ├── chapter1.html         # Page template with a <main> region
  ├── chapter1.txt          # Companion chapter text merged into <main>
  └── chapter1_2.html       # Derived output (never collected as input)

Dictionary rules apply longest find-text first; only the first comma on a
line separates find from replace, so replacement text may contain commas.
A replacement value of 'index.html' is rewritten to 'index_2.html' so
substituted links follow the derived outputs.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transform HTML files, or folders of HTML files
    Run {
        /// Files or folders to process
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Also write the run report as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// List what a run would process, without transforming
    Check {
        /// Files or folders to inspect
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the substitution table loaded for a folder
    Dict {
        /// Folder containing a dictionary.csv
        folder: PathBuf,
    },
}

fn main() -> ExitCode {
    let _ = StderrLogger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Run { paths, report } => run(&paths, report.as_deref()),
        Command::Check { paths } => check(&paths),
        Command::Dict { folder } => dict(&folder),
    }
}

/// Collect every argument, reporting bad ones and keeping the rest.
fn collect(paths: &[PathBuf]) -> PageSet {
    let mut pages = PageSet::new();
    for path in paths {
        if let Err(err) = pages.add(path) {
            log::warn!("skipping {}: {err}", path.display());
        }
    }
    pages
}

fn run(paths: &[PathBuf], report_path: Option<&Path>) -> ExitCode {
    let pages = collect(paths);
    if pages.is_empty() {
        log::warn!("no HTML files found to process");
        return ExitCode::SUCCESS;
    }

    let total = pages.len();
    let mut transformer = PageTransformer::new();
    let mut report = RunReport::default();

    for (i, path) in pages.iter().enumerate() {
        log::info!("processing {} ({}/{total})", path.display(), i + 1);
        match transformer.transform(path) {
            Ok(strategy) => report.record_success(path, strategy),
            Err(err) => {
                match &err {
                    TransformError::MissingCompanion(companion) => log::warn!(
                        "{}: companion text {} not found, skipping",
                        path.display(),
                        companion.display()
                    ),
                    other => {
                        log::error!("failed to transform {}: {other}", path.display())
                    }
                }
                report.record_failure(path, &err);
            }
        }
    }

    output::print_run_output(&report);

    if let Some(report_path) = report_path
        && let Err(err) = write_report(&report, report_path)
    {
        log::error!("failed to write report {}: {err}", report_path.display());
        return ExitCode::FAILURE;
    }

    if report.failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn write_report(report: &RunReport, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn check(paths: &[PathBuf]) -> ExitCode {
    let pages = collect(paths);
    output::print_check_output(&pages);
    ExitCode::SUCCESS
}

fn dict(folder: &Path) -> ExitCode {
    let table = SubstitutionTable::load(folder);
    output::print_dict_output(&table);
    ExitCode::SUCCESS
}
