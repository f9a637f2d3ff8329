use std::collections::{HashMap, HashSet};

/// Strings extracted from one source file, in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntries {
    pub relative_key: String,
    pub values: Vec<String>,
}

/// Extracted strings grouped by the file they were first seen in.
///
/// A value is stored at most once across all files. Files appear in the order
/// of their first recorded value, and a file with no recorded values never
/// appears.
#[derive(Debug, Default)]
pub struct TranslationIndex {
    files: Vec<FileEntries>,
    positions: HashMap<String, usize>,
    seen: HashSet<String>,
}

impl TranslationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `relative_key` unless it was already recorded
    /// under any key. Returns whether the value was added.
    pub fn record(&mut self, relative_key: &str, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_owned());

        let position = match self.positions.get(relative_key) {
            Some(&position) => position,
            None => {
                self.files.push(FileEntries {
                    relative_key: relative_key.to_owned(),
                    values: Vec::new(),
                });
                let position = self.files.len() - 1;
                self.positions.insert(relative_key.to_owned(), position);
                position
            }
        };
        self.files[position].values.push(value.to_owned());
        true
    }

    /// Values recorded for `relative_key`, if it owns any.
    pub fn get(&self, relative_key: &str) -> Option<&[String]> {
        self.positions
            .get(relative_key)
            .map(|&position| self.files[position].values.as_slice())
    }

    /// Files in first-seen order.
    pub fn files(&self) -> &[FileEntries] {
        &self.files
    }

    /// Total number of recorded values.
    pub fn entry_count(&self) -> usize {
        self.seen.len()
    }
}
