//! Per-file transformation: strategy dispatch and derived-output writing.
//!
//! One call to [`PageTransformer::transform`] turns one input HTML file into
//! one derived sibling output, routed through one of two strategies:
//!
//! - **Root** (`index.html`, case-insensitive): the document is substituted
//!   line by line and written to `index_2.html`. Lines are substituted
//!   independently, so a dictionary rule can never match across a line
//!   break.
//! - **Content merge** (everything else): the companion `.txt` is rendered
//!   into a chapter fragment, spliced into the document's `<main>` region,
//!   the whole result is substituted in one pass, and written to
//!   `<stem>_2.html`.
//!
//! Both strategies compute the full output in memory and write it with a
//! single `fs::write`, so a failed file never leaves a half-written output
//! behind and the input is never touched.
//!
//! The substitution table is scoped to the input's folder and cached in a
//! [`FolderTable`]: processing a batch of files from one folder loads
//! `dictionary.csv` once, and a file from a different folder triggers a
//! reload. The transformer holds per-run state only and is meant for
//! sequential use; calls must not be interleaved from multiple threads.

use crate::dictionary::SubstitutionTable;
use crate::fragment;
use crate::naming;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("companion text not found: {0}")]
    MissingCompanion(PathBuf),
}

/// Which transformation a file was routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Root,
    ContentMerge,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Root => "root",
            Strategy::ContentMerge => "content-merge",
        }
    }
}

/// Folder-scoped substitution-table cache.
///
/// The contract is "reload on folder change": only the most recently loaded
/// folder is remembered, so a batch interleaving folders A, B, A reloads on
/// every switch.
#[derive(Debug, Default)]
pub struct FolderTable {
    folder: Option<PathBuf>,
    table: SubstitutionTable,
}

impl FolderTable {
    /// Return the table for `folder`, reloading it if the folder differs
    /// from the one currently cached.
    pub fn ensure(&mut self, folder: &Path) -> &SubstitutionTable {
        if self.folder.as_deref() != Some(folder) {
            self.table = SubstitutionTable::load(folder);
            self.folder = Some(folder.to_path_buf());
        }
        &self.table
    }
}

/// Turns one input HTML file into one derived sibling output.
#[derive(Debug, Default)]
pub struct PageTransformer {
    dictionary: FolderTable,
}

impl PageTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform one file, routed by file name.
    ///
    /// On success the derived output exists next to the input and the
    /// strategy that produced it is returned. On error nothing was written.
    pub fn transform(&mut self, path: &Path) -> Result<Strategy, TransformError> {
        let folder = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();
        let table = self.dictionary.ensure(&folder);

        if naming::is_root(path) {
            process_root(path, table)?;
            Ok(Strategy::Root)
        } else {
            process_content_merge(path, table)?;
            Ok(Strategy::ContentMerge)
        }
    }
}

/// Root strategy: substitute each line independently, terminators
/// preserved, and write the result to `index_2.html`.
fn process_root(path: &Path, table: &SubstitutionTable) -> Result<(), TransformError> {
    let content = fs::read_to_string(path)?;
    let mut output = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        output.push_str(&table.apply(line));
    }
    fs::write(path.with_file_name(naming::ROOT_DERIVED_NAME), output)?;
    Ok(())
}

/// Content-merge strategy: render the companion text into a fragment,
/// splice it into the `<main>` region, substitute the whole document, and
/// write the result to `<stem>_2.html`.
fn process_content_merge(path: &Path, table: &SubstitutionTable) -> Result<(), TransformError> {
    let companion = naming::companion_path(path);
    if !companion.exists() {
        return Err(TransformError::MissingCompanion(companion));
    }

    let text = fs::read_to_string(&companion)?;
    let lines: Vec<&str> = text.lines().collect();
    let chapter = fragment::build_fragment(&lines);

    let document = fs::read_to_string(path)?;
    let merged = fragment::splice_into_document(&document, &chapter);
    let output = table.apply(&merged);

    fs::write(naming::derived_path(path), output)?;
    Ok(())
}
