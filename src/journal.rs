//! Journal of numbered entries
//!
//! A `Journal` only keeps its entries. Writing them anywhere is the job of
//! [`PersistenceManager`](crate::persist::PersistenceManager).
//!
//! # Example
//!
//! ```rust
//! use sift::Journal;
//!
//! let mut journal = Journal::new("Dear diary");
//! journal.add_entry("I ate a bug");
//! journal.add_entry("I cried today");
//!
//! assert_eq!(journal.entries(), ["1: I ate a bug", "2: I cried today"]);
//! ```

use std::fmt;

/// A titled list of entries, each prefixed with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Journal {
    title: String,
    entries: Vec<String>,
}

impl Journal {
    /// Create an empty journal. Numbering starts at 1.
    pub fn new(title: impl Into<String>) -> Self {
        Journal {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry as `"{n}: {text}"`.
    ///
    /// `n` is always one past the current entry count.
    pub fn add_entry(&mut self, text: impl AsRef<str>) {
        let number = self.next_number();
        self.entries.push(format!("{}: {}", number, text.as_ref()));
    }

    /// The number the next entry will receive.
    pub fn next_number(&self) -> usize {
        self.entries.len() + 1
    }

    /// The journal title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been added yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for entry in &self.entries {
            write!(f, "\n{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_journal_is_empty() {
        let journal = Journal::new("Dear diary");
        assert_eq!(journal.title(), "Dear diary");
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
    }

    #[test]
    fn test_entries_are_numbered_from_one() {
        let mut journal = Journal::new("Dear diary");
        journal.add_entry("I ate a bug");
        journal.add_entry(String::from("I cried today"));

        assert_eq!(journal.entries(), ["1: I ate a bug", "2: I cried today"]);
    }

    #[test]
    fn test_numbering_is_per_journal() {
        let mut first = Journal::new("first");
        let mut second = Journal::new("second");
        first.add_entry("a");
        first.add_entry("b");
        second.add_entry("c");

        assert_eq!(second.entries(), ["1: c"]);
        assert_eq!(first.entries()[1], "2: b");
    }

    #[test]
    fn test_next_number_tracks_entries() {
        let mut journal = Journal::new("Log");
        assert_eq!(journal.next_number(), 1);
        journal.add_entry("a");
        journal.add_entry("b");
        assert_eq!(journal.next_number(), 3);
    }

    #[test]
    fn test_display() {
        let mut journal = Journal::new("Log");
        journal.add_entry("started");
        assert_eq!(journal.to_string(), "Log\n1: started");
        assert_eq!(Journal::new("Empty").to_string(), "Empty");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_roundtrip_continues_numbering() {
        let mut journal = Journal::new("Dear diary");
        journal.add_entry("I ate a bug");

        let json = serde_json::to_string(&journal).unwrap();
        assert_eq!(json, r#"{"title":"Dear diary","entries":["1: I ate a bug"]}"#);

        let mut restored: Journal = serde_json::from_str(&json).unwrap();
        restored.add_entry("I cried today");
        assert_eq!(restored.entries()[1], "2: I cried today");
    }

    #[test]
    fn test_stored_counter_is_ignored() {
        let json = r#"{"title":"t","entries":[],"next_number":0}"#;
        let mut restored: Journal = serde_json::from_str(json).unwrap();
        restored.add_entry("x");
        assert_eq!(restored.entries()[0], "1: x");

        let json = r#"{"title":"t","entries":["1: a"],"next_number":18446744073709551615}"#;
        let mut restored: Journal = serde_json::from_str(json).unwrap();
        restored.add_entry("b");
        restored.add_entry("c");
        assert_eq!(restored.entries(), ["1: a", "2: b", "3: c"]);
    }
}
