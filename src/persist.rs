//! Writing lines to files
//!
//! Persistence lives apart from the data it stores: [`Journal`] keeps entries,
//! [`PersistenceManager`] writes them out.
//!
//! # Example
//!
//! ```rust
//! use sift::{Journal, PersistenceManager};
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("diary.txt");
//!
//! let mut journal = Journal::new("Dear diary");
//! journal.add_entry("I ate a bug");
//! PersistenceManager::save(&journal, &path)?;
//!
//! assert_eq!(std::fs::read_to_string(&path)?, "1: I ate a bug\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::journal::Journal;

/// Error returned when lines cannot be written to their destination.
#[derive(Debug)]
pub struct SaveError {
    path: PathBuf,
    source: io::Error,
}

impl SaveError {
    /// Create a new `SaveError` for `path`.
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SaveError {
            path: path.into(),
            source,
        }
    }

    /// The destination that could not be written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    /// Extract the underlying I/O error, discarding the path.
    pub fn into_inner(self) -> io::Error {
        self.source
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to save to {}: {}", self.path.display(), self.source)
    }
}

impl StdError for SaveError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

/// Write each line to `destination`, one per line, replacing any existing file.
///
/// # Example
///
/// ```rust
/// use sift::persist::save_lines;
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("out.txt");
/// save_lines(["alpha", "beta"], &path)?;
/// assert_eq!(std::fs::read_to_string(&path)?, "alpha\nbeta\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn save_lines<I, S>(lines: I, destination: impl AsRef<Path>) -> Result<(), SaveError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = destination.as_ref();
    match write_lines(lines, path) {
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        Ok(count) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %path.display(), lines = count, "saved lines");
            Ok(())
        }
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %path.display(), error = %err, "failed to save lines");
            Err(SaveError::new(path, err))
        }
    }
}

fn write_lines<I, S>(lines: I, path: &Path) -> io::Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = BufWriter::new(File::create(path)?);
    let mut count = 0;
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Saves journals to files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersistenceManager;

impl PersistenceManager {
    /// Write every entry of `journal` to `destination`, one per line.
    ///
    /// The title is not written.
    pub fn save(journal: &Journal, destination: impl AsRef<Path>) -> Result<(), SaveError> {
        save_lines(journal.entries(), destination)
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_save_logs_line_count() {
        let dir = tempfile::tempdir().unwrap();
        save_lines(["a", "b"], dir.path().join("out.txt")).unwrap();
        assert!(logs_contain("saved lines"));
        assert!(logs_contain("lines=2"));
    }

    #[test]
    #[traced_test]
    fn test_failed_save_logs_warning() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_lines(["a"], dir.path().join("missing").join("out.txt"));
        assert!(result.is_err());
        assert!(logs_contain("failed to save lines"));
    }
}
