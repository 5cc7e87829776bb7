//! Input collection: building the ordered set of pages to transform.
//!
//! The batch driver hands each user-supplied argument to [`PageSet::add`].
//! Single files must be existing, non-derived `.html` files; directories are
//! expanded one level deep (no recursion), keeping only non-derived `.html`
//! entries. Paths are canonicalized before insertion so the same file
//! reached through different spellings is collected once.
//!
//! Invalid single-file arguments are reported as typed errors rather than
//! silently dropped, so the caller can tell the user which argument was
//! wrong while continuing to collect the rest. Unsuitable entries found
//! while expanding a directory are skipped silently; a folder of mixed
//! content is normal, a bad explicit argument is not.

use crate::naming;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not an HTML file: {0}")]
    NotHtml(PathBuf),
    #[error("already a derived output: {0}")]
    AlreadyDerived(PathBuf),
    #[error("path does not exist: {0}")]
    Missing(PathBuf),
}

/// Ordered, deduplicated set of HTML files to process.
#[derive(Debug, Default)]
pub struct PageSet {
    files: Vec<PathBuf>,
}

impl PageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single HTML file, or expand a directory one level deep.
    ///
    /// Directory entries are sorted by name before insertion; `read_dir`
    /// order is platform-dependent and the batch must be reproducible.
    pub fn add(&mut self, path: &Path) -> Result<(), CollectError> {
        if path.is_file() {
            if !naming::is_html(path) {
                return Err(CollectError::NotHtml(path.to_path_buf()));
            }
            if naming::is_derived(path) {
                return Err(CollectError::AlreadyDerived(path.to_path_buf()));
            }
            self.push_unique(path)?;
            Ok(())
        } else if path.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file() && naming::is_html(p) && !naming::is_derived(p))
                .collect();
            entries.sort();
            for entry in entries {
                self.push_unique(&entry)?;
            }
            Ok(())
        } else {
            Err(CollectError::Missing(path.to_path_buf()))
        }
    }

    /// Canonicalize and insert, ignoring paths already present.
    fn push_unique(&mut self, path: &Path) -> Result<(), std::io::Error> {
        let canonical = std::fs::canonicalize(path)?;
        if !self.files.contains(&canonical) {
            self.files.push(canonical);
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
