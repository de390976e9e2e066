//! Guess input normalization
//!
//! Turns one raw console line into an explicit [`Guess`].

/// A single normalized guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    /// Blank or interrupted input
    Skip,
    /// A lowercase letter that may appear in a word
    Letter(char),
    /// Punctuation, whitespace or a control character
    Invalid(char),
}

/// Lowercase text one character at a time
///
/// Words and guesses both go through this, so a letter always lowercases to
/// the same characters wherever it appears (no context-dependent final sigma).
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Whether a character can be guessed (and therefore appear in a word)
#[inline]
#[must_use]
pub fn is_guessable(c: char) -> bool {
    !(c.is_whitespace() || c.is_ascii_punctuation() || c.is_control())
}

impl Guess {
    /// Parse a raw input line
    ///
    /// Only the first character counts; the rest of the line is ignored.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Guess;
    ///
    /// assert_eq!(Guess::parse("A"), Guess::Letter('a'));
    /// assert_eq!(Guess::parse(""), Guess::Skip);
    /// assert_eq!(Guess::parse("?"), Guess::Invalid('?'));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let line = normalize(raw.trim_end_matches(['\r', '\n']));
        let Some(first) = line.chars().next() else {
            return Self::Skip;
        };

        if is_guessable(first) {
            Self::Letter(first)
        } else {
            Self::Invalid(first)
        }
    }
}
