//! Shared test utilities for the pagesynth test suite.
//!
//! Most tests need the same shape of fixture: a temp folder seeded with a
//! handful of small text files (pages, companions, a dictionary), then
//! assertions on the derived outputs the engine leaves behind.

use std::path::Path;
use tempfile::TempDir;

/// Create a temp folder containing the given (name, content) files.
pub fn folder_with_files(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, content) in files {
        std::fs::write(tmp.path().join(name), content).unwrap();
    }
    tmp
}

/// Read a file from a fixture folder, panicking with the path on failure.
pub fn read_output(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()))
}
