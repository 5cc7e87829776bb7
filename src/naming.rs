//! Centralized filename conventions for inputs and derived outputs.
//!
//! Every output pagesynth writes is a sibling of its input, distinguished by
//! the `_2` marker inserted before the extension:
//!
//! - `index.html` → `index_2.html`
//! - `chapter1.html` → `chapter1_2.html`
//!
//! The marker also guards collection: file names already carrying it are
//! never picked up as inputs, so running the tool twice over the same folder
//! does not cascade (`chapter1_2_2.html` can never appear).
//!
//! The root document `index.html` (matched case-insensitively) is special:
//! it is substituted line by line instead of merged with companion text, and
//! its output name is fixed regardless of the input's letter case.

use std::path::{Path, PathBuf};

/// Marker segment distinguishing generated files from originals.
pub const DERIVED_MARKER: &str = "_2";

/// Reserved root document name, matched case-insensitively on input.
pub const ROOT_NAME: &str = "index.html";

/// Derived counterpart of [`ROOT_NAME`].
pub const ROOT_DERIVED_NAME: &str = "index_2.html";

/// True if `path` names the reserved root document.
pub fn is_root(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.eq_ignore_ascii_case(ROOT_NAME))
}

/// True if the file name already carries the derived-output marker.
pub fn is_derived(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.contains(DERIVED_MARKER))
}

/// True if the path has an `.html` extension (case-insensitive).
pub fn is_html(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("html"))
}

/// Sibling output path for an input: stem, marker, original extension.
///
/// - `/books/chapter1.html` → `/books/chapter1_2.html`
pub fn derived_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("html");
    path.with_file_name(format!("{stem}{DERIVED_MARKER}.{ext}"))
}

/// Companion text resource for an HTML input: same stem, `.txt` extension.
///
/// - `/books/chapter1.html` → `/books/chapter1.txt`
pub fn companion_path(path: &Path) -> PathBuf {
    path.with_extension("txt")
}
