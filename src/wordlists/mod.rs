//! Word lists for Hangman
//!
//! The embedded default list plus the on-disk CSV source and data directory.

mod data_dir;
mod embedded;
pub mod loader;

pub use data_dir::DataDir;
pub use embedded::DEFAULT_WORDS;
pub use loader::{CsvWordFile, WordListError, WordSource};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn default_words_are_valid() {
        for &word in DEFAULT_WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not playable");
        }
    }

    #[test]
    fn default_words_have_no_separators() {
        for &word in DEFAULT_WORDS {
            assert!(
                !word.contains(',') && !word.contains('"'),
                "Word '{word}' would break the CSV row"
            );
        }
    }
}
