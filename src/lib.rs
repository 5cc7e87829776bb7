//! # pagesynth
//!
//! A batch HTML page synthesizer. Point it at HTML files (or folders of
//! them) and it produces rewritten sibling copies: every page gets a
//! per-folder dictionary substitution pass, and chapter pages additionally
//! have their `<main>` region rebuilt from a plain-text companion file.
//!
//! # Architecture: Collect, Then Transform
//!
//! ```text
//! 1. Collect    paths → PageSet          (validated, ordered, deduplicated)
//! 2. Transform  page  → <stem>_2.html    (one derived sibling per input)
//! ```
//!
//! The engine is deliberately synchronous and sequential: one file is fully
//! read, transformed, and written before the next begins. The only state
//! carried across files is the substitution table, cached per folder so a
//! batch from one folder loads `dictionary.csv` once.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`collect`] | Builds the ordered set of input pages from files and folders |
//! | [`dictionary`] | Loads per-folder `dictionary.csv` rules and applies them longest-key-first |
//! | [`transform`] | Routes each page to the root or content-merge strategy and writes the derived output |
//! | [`fragment`] | Renders companion text into the chapter fragment and splices it into `<main>` |
//! | [`naming`] | The `_2` derived-output filename convention used everywhere |
//! | [`output`] | CLI report formatting and the serializable run report |
//! | [`logger`] | Stderr logger behind the `log` facade, installed by the binary |
//!
//! # Design Decisions
//!
//! ## Derived Siblings, Never In-Place Edits
//!
//! Outputs are written next to their inputs with a `_2` marker in the name.
//! Originals are never modified, so a run can be repeated or its results
//! discarded by deleting the `_2` files. The marker also excludes derived
//! files from collection, which keeps repeated runs from feeding on their
//! own output.
//!
//! ## Maud Over String Templates
//!
//! The injected chapter fragment is rendered with
//! [Maud](https://maud.lambda.xyz/), a compile-time HTML macro: malformed
//! markup is a build error and companion text is escaped on interpolation.
//! The surrounding document, by contrast, is treated as opaque text; the
//! only structural operation on it is the single `<main>` region splice.
//!
//! ## Dictionaries Degrade, Pages Fail
//!
//! A missing or unreadable `dictionary.csv` yields an empty table and a
//! warning: pages still process, just without substitutions. A missing
//! companion text fails that one page. Per-file failures are reported and
//! counted but never stop the batch.

pub mod collect;
pub mod dictionary;
pub mod fragment;
pub mod logger;
pub mod naming;
pub mod output;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_helpers;
