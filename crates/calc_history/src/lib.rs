//! Persisted command-history store.
//!
//! An append-only-by-convention log of executed command names, backed
//! by a flat tabular file (header row `command_name`, one name per
//! row). Reads and writes are whole-file replace operations; nothing
//! here persists implicitly — callers decide when `save` runs.
//!
//! The user-facing record number is always `position + 1`, matching the
//! numbered-menu convention. That conversion lives in exactly one
//! place, [`CommandHistory::to_position`], so load/save/delete cannot
//! drift apart by one.

mod error;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

pub use error::HistoryError;

/// Header row of the persisted history file.
const HEADER: &str = "command_name";

/// Outcome of a delete request. All three variants are expected,
/// non-fatal results the menu layer turns into plain messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Removed the record at the displayed number; carries the name.
    Deleted(String),
    /// Nothing to delete.
    Empty,
    /// Displayed number does not map to a record.
    OutOfRange,
}

/// In-memory ordered history with explicit load/save against one file.
pub struct CommandHistory {
    records: Vec<String>,
    path: PathBuf,
}

impl CommandHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            records: Vec::new(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record in memory. Not persisted until `save`.
    pub fn append(&mut self, command_name: impl Into<String>) {
        self.records.push(command_name.into());
    }

    pub fn get_history(&self) -> &[String] {
        &self.records
    }

    /// Empty the in-memory sequence. The caller decides whether a
    /// subsequent `save` should persist the empty state.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Replace the in-memory sequence with the persisted file.
    /// A missing file is a valid initial state and yields an empty
    /// sequence. Returns the number of records loaded.
    pub fn load(&mut self) -> Result<usize, HistoryError> {
        if !self.path.exists() {
            self.records.clear();
            debug!(path = %self.path.display(), "no history file, starting empty");
            return Ok(0);
        }

        let contents = fs::read_to_string(&self.path)?;
        let mut lines = contents.lines();
        match lines.next() {
            None | Some(HEADER) => {}
            Some(other) => {
                return Err(HistoryError::BadHeader {
                    path: self.path.clone(),
                    found: other.to_string(),
                });
            }
        }

        self.records = lines
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect();
        debug!(count = self.records.len(), "history loaded");
        Ok(self.records.len())
    }

    /// Write the in-memory sequence to the file, fully replacing prior
    /// contents. Returns the number of records written.
    pub fn save(&self) -> Result<usize, HistoryError> {
        let mut out = String::with_capacity(HEADER.len() + 1 + self.records.len() * 16);
        out.push_str(HEADER);
        out.push('\n');
        for record in &self.records {
            out.push_str(record);
            out.push('\n');
        }
        fs::write(&self.path, out)?;
        debug!(count = self.records.len(), path = %self.path.display(), "history saved");
        Ok(self.records.len())
    }

    /// Remove the record at a displayed (1-based) number and persist
    /// the result. Empty history and out-of-range numbers are reported
    /// through [`DeleteOutcome`], never as errors.
    pub fn delete(&mut self, displayed_index: usize) -> Result<DeleteOutcome, HistoryError> {
        if self.records.is_empty() {
            return Ok(DeleteOutcome::Empty);
        }
        let Some(position) = self.to_position(displayed_index) else {
            return Ok(DeleteOutcome::OutOfRange);
        };
        let removed = self.records.remove(position);
        self.save()?;
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// The single place displayed numbers become 0-based positions.
    fn to_position(&self, displayed_index: usize) -> Option<usize> {
        let position = displayed_index.checked_sub(1)?;
        (position < self.records.len()).then_some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_history() -> (tempfile::TempDir, CommandHistory) {
        let dir = tempfile::tempdir().unwrap();
        let history = CommandHistory::new(dir.path().join("command_history.csv"));
        (dir, history)
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let (_dir, mut history) = temp_history();
        assert_eq!(history.load().unwrap(), 0);
        assert!(history.get_history().is_empty());
    }

    #[test]
    fn save_then_fresh_load_round_trips() {
        let (_dir, mut history) = temp_history();
        history.append("greet");
        history.append("calculator");
        history.append("csv");
        history.save().unwrap();

        let mut fresh = CommandHistory::new(history.path());
        fresh.load().unwrap();
        assert_eq!(fresh.get_history(), history.get_history());
    }

    #[test]
    fn clear_empties_in_memory_only() {
        let (_dir, mut history) = temp_history();
        history.append("greet");
        history.save().unwrap();
        history.clear();
        assert!(history.get_history().is_empty());

        // The file still holds the record until an explicit save.
        let mut fresh = CommandHistory::new(history.path());
        fresh.load().unwrap();
        assert_eq!(fresh.get_history(), ["greet"]);
    }

    #[test]
    fn delete_removes_exactly_the_displayed_record() {
        let (_dir, mut history) = temp_history();
        for name in ["greet", "calculator", "history"] {
            history.append(name);
        }
        let outcome = history.delete(2).unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted("calculator".into()));
        assert_eq!(history.get_history(), ["greet", "history"]);

        // Delete persists; a fresh manager sees the shortened sequence.
        let mut fresh = CommandHistory::new(history.path());
        fresh.load().unwrap();
        assert_eq!(fresh.get_history(), ["greet", "history"]);
    }

    #[test]
    fn delete_on_empty_history_reports_empty() {
        let (_dir, mut history) = temp_history();
        assert_eq!(history.delete(1).unwrap(), DeleteOutcome::Empty);
    }

    #[test]
    fn delete_out_of_range_is_a_message_not_a_mutation() {
        let (_dir, mut history) = temp_history();
        history.append("greet");
        assert_eq!(history.delete(0).unwrap(), DeleteOutcome::OutOfRange);
        assert_eq!(history.delete(2).unwrap(), DeleteOutcome::OutOfRange);
        assert_eq!(history.get_history(), ["greet"]);
    }

    #[test]
    fn rejects_foreign_header() {
        let (_dir, mut history) = temp_history();
        fs::write(history.path(), "not_a_history_file\ngreet\n").unwrap();
        assert!(matches!(
            history.load(),
            Err(HistoryError::BadHeader { .. })
        ));
    }

    mod delete_law {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// delete(k) on a sequence of length L removes exactly the
            /// element at position k-1 when 1 <= k <= L, and leaves the
            /// sequence untouched otherwise.
            #[test]
            fn displayed_index_arithmetic(len in 0usize..8, k in 0usize..10) {
                let dir = tempfile::tempdir().unwrap();
                let mut history = CommandHistory::new(dir.path().join("h.csv"));
                let names: Vec<String> = (0..len).map(|i| format!("cmd{i}")).collect();
                for name in &names {
                    history.append(name.clone());
                }

                let outcome = history.delete(k).unwrap();
                if len == 0 {
                    prop_assert_eq!(outcome, DeleteOutcome::Empty);
                } else if (1..=len).contains(&k) {
                    let mut expected = names.clone();
                    let removed = expected.remove(k - 1);
                    prop_assert_eq!(outcome, DeleteOutcome::Deleted(removed));
                    prop_assert_eq!(history.get_history(), expected.as_slice());
                } else {
                    prop_assert_eq!(outcome, DeleteOutcome::OutOfRange);
                    prop_assert_eq!(history.get_history(), names.as_slice());
                }
            }
        }
    }
}
