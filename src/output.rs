//! CLI output formatting and the run report.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! The run display is one line per file in processing order:
//!
//! ```text
//! 001 index.html → index_2.html
//! 002 chapter1.html → chapter1_2.html
//! 003 chapter2.html
//!     Error: companion text not found: /books/chapter2.txt
//!
//! Processed 3 files: 2 succeeded, 1 failed
//! ```
//!
//! [`RunReport`] doubles as the machine-readable artifact: `run --report`
//! serializes it as JSON.

use crate::collect::PageSet;
use crate::dictionary::SubstitutionTable;
use crate::naming;
use crate::transform::{Strategy, TransformError};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of one file in a run.
#[derive(Debug, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<&'static str>,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregated result of a batch run.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub files: Vec<FileOutcome>,
}

impl RunReport {
    pub fn record_success(&mut self, path: &Path, strategy: Strategy) {
        self.total += 1;
        self.succeeded += 1;
        self.files.push(FileOutcome {
            path: path.to_path_buf(),
            strategy: Some(strategy.as_str()),
            ok: true,
            error: None,
        });
    }

    pub fn record_failure(&mut self, path: &Path, error: &TransformError) {
        self.total += 1;
        self.failed += 1;
        self.files.push(FileOutcome {
            path: path.to_path_buf(),
            strategy: None,
            ok: false,
            error: Some(error.to_string()),
        });
    }
}

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn format_run_output(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, file) in report.files.iter().enumerate() {
        let name = display_name(&file.path);
        if file.ok {
            let derived = match file.strategy {
                Some("root") => naming::ROOT_DERIVED_NAME.to_string(),
                _ => display_name(&naming::derived_path(&file.path)),
            };
            lines.push(format!("{} {} → {}", format_index(i + 1), name, derived));
        } else {
            lines.push(format!("{} {}", format_index(i + 1), name));
            if let Some(err) = &file.error {
                lines.push(format!("    Error: {err}"));
            }
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "Processed {} files: {} succeeded, {} failed",
        report.total, report.succeeded, report.failed
    ));
    lines
}

pub fn print_run_output(report: &RunReport) {
    for line in format_run_output(report) {
        println!("{line}");
    }
}

pub fn format_check_output(pages: &PageSet) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, path) in pages.iter().enumerate() {
        let strategy = if naming::is_root(path) {
            Strategy::Root
        } else {
            Strategy::ContentMerge
        };
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            path.display(),
            strategy.as_str()
        ));
    }
    lines.push(String::new());
    lines.push(format!("{} files to process", pages.len()));
    lines
}

pub fn print_check_output(pages: &PageSet) {
    for line in format_check_output(pages) {
        println!("{line}");
    }
}

pub fn format_dict_output(table: &SubstitutionTable) -> Vec<String> {
    if table.is_empty() {
        return vec!["(empty table)".to_string()];
    }
    let mut lines: Vec<String> = table
        .entries()
        .map(|(find, replace)| format!("{find} → {replace}"))
        .collect();
    lines.push(String::new());
    lines.push(format!("{} entries, applied top to bottom", table.len()));
    lines
}

pub fn print_dict_output(table: &SubstitutionTable) {
    for line in format_dict_output(table) {
        println!("{line}");
    }
}
