//! Data directory layout
//!
//! Holds the default word list and the first-run marker.

use super::loader::{CsvWordFile, WordListError, WordSource};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const WORD_LIST_FILE: &str = "word.csv";
const MARKER_FILE: &str = "init";

/// Directory holding the game's persistent files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the directory if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn ensure(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the default word list
    #[must_use]
    pub fn word_list_path(&self) -> PathBuf {
        self.root.join(WORD_LIST_FILE)
    }

    #[must_use]
    pub fn marker_path(&self) -> PathBuf {
        self.root.join(MARKER_FILE)
    }

    /// True until [`DataDir::mark_initialized`] has run once
    #[must_use]
    pub fn is_first_run(&self) -> bool {
        !self.marker_path().exists()
    }

    /// Write the first-run marker
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the marker cannot be written.
    pub fn mark_initialized(&self) -> io::Result<()> {
        fs::write(self.marker_path(), b"\0")
    }

    /// Load the words for a game
    ///
    /// Creates the directory and seeds its word list with `defaults` if needed,
    /// even when `word_list` points somewhere else, then loads from `word_list`
    /// or the seeded list.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or default list cannot be written, or
    /// the chosen list is missing or has no playable words.
    pub fn load_words(
        &self,
        word_list: Option<&Path>,
        defaults: &[&str],
    ) -> Result<Vec<Word>, WordListError> {
        self.ensure().map_err(|source| WordListError::Io {
            path: self.root.clone(),
            source,
        })?;

        let seeded = CsvWordFile::new(self.word_list_path());
        seeded.persist_default_if_absent(defaults)?;

        match word_list {
            Some(path) => CsvWordFile::new(path).load(),
            None => seeded.load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::tests::scratch_dir;

    #[test]
    fn first_run_until_marked() {
        let data = DataDir::new(scratch_dir("marker"));
        assert!(data.is_first_run());

        data.mark_initialized().unwrap();
        assert!(!data.is_first_run());

        data.mark_initialized().unwrap();
        assert!(!data.is_first_run());
    }

    #[test]
    fn ensure_creates_nested_directory() {
        let root = scratch_dir("ensure").join("nested").join("data");
        let data = DataDir::new(&root);

        data.ensure().unwrap();
        assert!(root.is_dir());
        assert_eq!(data.word_list_path(), root.join("word.csv"));
        assert_eq!(data.marker_path(), root.join("init"));
    }

    #[test]
    fn load_words_seeds_default_list() {
        let data = DataDir::new(scratch_dir("load-default").join("data"));
        let words = data.load_words(None, &["Kiwi", "Mango"]).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["kiwi", "mango"]);
        assert!(data.word_list_path().is_file());
    }

    #[test]
    fn load_words_seeds_defaults_even_with_custom_list() {
        let dir = scratch_dir("load-custom");
        let custom = dir.join("custom.csv");
        fs::write(&custom, "lemon\n").unwrap();
        let data = DataDir::new(dir.join("data"));

        let words = data.load_words(Some(custom.as_path()), &["Kiwi"]).unwrap();

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "lemon");
        assert_eq!(fs::read_to_string(data.word_list_path()).unwrap(), "Kiwi\n");
    }

    #[test]
    fn load_words_missing_custom_list_fails() {
        let dir = scratch_dir("load-missing");
        let data = DataDir::new(dir.join("data"));

        let result = data.load_words(Some(dir.join("nope.csv").as_path()), &["Kiwi"]);
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }
}
