//! Per-folder substitution tables loaded from `dictionary.csv`.
//!
//! Each folder of pages may carry a `dictionary.csv` next to them, one rule
//! per line:
//!
//! ```text
//! 舊站名,新站名
//! Foo,Bar
//! broken link,fixed, with commas
//! ```
//!
//! Only the first comma delimits, so replacement values may themselves
//! contain commas. Blank lines and lines without a comma are skipped, as are
//! rules with an empty find-text. The file is optional: a folder without one
//! simply gets an empty table and pages pass through unsubstituted.
//!
//! ## Ordering
//!
//! Rules are applied longest find-text first, so a short rule can never
//! clobber a longer rule it is a substring of (`"AB" → "1"` beats `"A" → "2"`
//! on the input `"AB"`). Rules of equal length keep their file order, which
//! keeps output reproducible across runs.
//!
//! ## Root remap
//!
//! A replacement value of exactly `index.html` is rewritten at load time to
//! `index_2.html`: substituted links must point at the derived output, not
//! at the original the batch is about to shadow.

use crate::naming::{ROOT_DERIVED_NAME, ROOT_NAME};
use std::cmp::Reverse;
use std::path::Path;

/// Name of the per-folder substitution rule file.
pub const DICTIONARY_FILE: &str = "dictionary.csv";

/// An ordered set of (find, replace) rules for one folder.
#[derive(Debug, Default)]
pub struct SubstitutionTable {
    entries: Vec<(String, String)>,
}

impl SubstitutionTable {
    /// Load the table for one folder.
    ///
    /// A missing `dictionary.csv` is not an error: the folder gets an empty
    /// table and a warning. Unreadable files degrade the same way, so a bad
    /// dictionary can never fail the pages that reference it.
    pub fn load(folder: &Path) -> Self {
        let path = folder.join(DICTIONARY_FILE);
        if !path.exists() {
            log::warn!(
                "{} not found in {}, no replacements will be applied",
                DICTIONARY_FILE,
                folder.display()
            );
            return Self::default();
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let table = Self::parse(&content);
                log::info!(
                    "loaded {} dictionary entries from {}",
                    table.len(),
                    path.display()
                );
                table
            }
            Err(err) => {
                log::error!("failed to read {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Parse `dictionary.csv` content into an ordered table.
    ///
    /// Later lines for the same find-text overwrite the value but keep the
    /// first line's position, like re-assigning a key in an insertion-order
    /// map. Entries end up sorted by descending find-text length (stable, so
    /// file order breaks ties).
    pub fn parse(content: &str) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            let Some((key, value)) = line.split_once(',') else {
                continue;
            };
            let key = key.trim();
            let mut value = value.trim();
            if key.is_empty() {
                continue;
            }
            if value == ROOT_NAME {
                value = ROOT_DERIVED_NAME;
            }
            match entries.iter_mut().find(|(k, _)| k == key) {
                Some((_, v)) => *v = value.to_string(),
                None => entries.push((key.to_string(), value.to_string())),
            }
        }
        entries.sort_by_key(|(key, _)| Reverse(key.chars().count()));
        Self { entries }
    }

    /// Apply every rule to `text`, in table order, as literal global
    /// replacements.
    ///
    /// One sequential pass over the rule list; the result of one rule is
    /// visible to the rules after it, but the pass is never restarted.
    pub fn apply(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (key, value)| acc.replace(key, value))
    }

    /// Rules in application order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a table directly from rules, bypassing the CSV format.
    /// Lets tests exercise rules a `dictionary.csv` line cannot express,
    /// such as a find-text containing a line break.
    #[cfg(test)]
    pub(crate) fn from_entries(mut entries: Vec<(String, String)>) -> Self {
        entries.sort_by_key(|(key, _)| Reverse(key.chars().count()));
        Self { entries }
    }
}
