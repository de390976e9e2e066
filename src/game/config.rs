//! Immutable game settings
//!
//! Banners, hint thresholds and the default mistake budget.

use crate::wordlists::DEFAULT_WORDS;

/// Settings shared by every session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Mistakes allowed before the session is lost
    pub mistake_budget: u8,
    /// `(max word length, hint count)` pairs, checked in order
    pub hint_thresholds: [(usize, usize); 3],
    /// Hint count for words longer than every threshold
    pub default_hints: usize,
    /// Banner shown on every run after the first
    pub banner: &'static str,
    /// Banner shown on the first run only
    pub onetime_banner: &'static str,
    /// Words persisted when no word list exists yet
    pub default_words: &'static [&'static str],
}

impl GameConfig {
    /// Stock configuration
    pub const DEFAULT: Self = Self {
        mistake_budget: 3,
        hint_thresholds: [(3, 1), (7, 2), (15, 4)],
        default_hints: 4,
        banner: "Welcome to Hangman! (c) 2022 RimuEirnarn\n",
        onetime_banner: "Welcome to Hangman! (c) 2022 RimuEirnarn\n\
            A word has been picked and a few of its letters are already shown.\n\
            Type one letter and press Enter to guess it. Each correct guess\n\
            reveals one more occurrence of that letter.\n\
            \n\
            Blank input, punctuation and letters that are not in the word\n\
            each cost one mistake.\n",
        default_words: DEFAULT_WORDS,
    };

    /// Number of letters revealed before the first guess
    ///
    /// Never exceeds the word length.
    ///
    /// # Examples
    /// ```
    /// use hangman::game::GameConfig;
    ///
    /// let config = GameConfig::DEFAULT;
    /// assert_eq!(config.hint_count(3), 1);
    /// assert_eq!(config.hint_count(7), 2);
    /// assert_eq!(config.hint_count(15), 4);
    /// assert_eq!(config.hint_count(40), 4);
    /// ```
    #[must_use]
    pub fn hint_count(&self, word_len: usize) -> usize {
        let hints = self
            .hint_thresholds
            .iter()
            .find(|&&(max_len, _)| word_len <= max_len)
            .map_or(self.default_hints, |&(_, hints)| hints);

        hints.min(word_len)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
