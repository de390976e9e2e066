//! Word list loading utilities
//!
//! A [`WordSource`] supplies candidate words and can seed itself with a default
//! list. [`CsvWordFile`] is the on-disk implementation.

use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Error type for word list access
#[derive(Debug)]
pub enum WordListError {
    Io { path: PathBuf, source: io::Error },
    Empty { path: PathBuf },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot access word list {}: {source}", path.display())
            }
            Self::Empty { path } => {
                write!(f, "No playable words found in {}", path.display())
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Somewhere words can be loaded from
pub trait WordSource {
    /// Load every playable word
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or yields no playable words.
    fn load(&self) -> Result<Vec<Word>, WordListError>;

    /// Persist `words` if the source does not exist yet
    ///
    /// Returns `true` when the default list was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be written.
    fn persist_default_if_absent(&self, words: &[&str]) -> Result<bool, WordListError>;
}

/// Comma-separated word list file
///
/// The words are the fields of the first non-blank row; later rows are
/// ignored. Fields are trimmed and surrounding double quotes are stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvWordFile {
    path: PathBuf,
}

impl CsvWordFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> WordListError {
        WordListError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl WordSource for CsvWordFile {
    fn load(&self) -> Result<Vec<Word>, WordListError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let words = parse_csv_words(&content);

        if words.is_empty() {
            return Err(WordListError::Empty {
                path: self.path.clone(),
            });
        }

        info!(path = %self.path.display(), count = words.len(), "loaded word list");
        Ok(words)
    }

    fn persist_default_if_absent(&self, words: &[&str]) -> Result<bool, WordListError> {
        if self.path.exists() {
            return Ok(false);
        }

        let mut row = words.join(",");
        row.push('\n');
        fs::write(&self.path, row).map_err(|e| self.io_error(e))?;

        info!(path = %self.path.display(), count = words.len(), "wrote default word list");
        Ok(true)
    }
}

/// Parse the first non-blank CSV row into playable words, skipping anything unplayable
#[must_use]
pub fn parse_csv_words(content: &str) -> Vec<Word> {
    let Some(row) = content
        .lines()
        .find(|line| line.split(',').any(|field| !csv_field(field).is_empty()))
    else {
        return Vec::new();
    };

    row.split(',')
        .map(csv_field)
        .filter(|field| !field.is_empty())
        .filter_map(|field| match Word::new(field) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(field, error = %e, "skipping word list entry");
                None
            }
        })
        .collect()
}

fn csv_field(field: &str) -> &str {
    field.trim().trim_matches('"')
}
