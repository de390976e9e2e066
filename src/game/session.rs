//! A single round of Hangman
//!
//! Owns the secret word, the reveal state and the mistake budget, and applies
//! guesses one line at a time.

use super::config::GameConfig;
use crate::core::{Guess, Word};
use rand::Rng;
use rand::seq::{IndexedRandom, index};
use std::fmt;
use tracing::debug;

/// Marks an occurrence that a correct guess has already consumed
const CONSUMED: char = '_';

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// What a submitted guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter was revealed at this position
    Revealed(usize),
    /// The letter is in the word but every occurrence has been matched already
    AlreadyMatched(char),
    /// The letter is not in the word
    Miss(char),
    /// Blank or interrupted input
    Skipped,
    /// Punctuation or whitespace
    Invalid(char),
    /// The session was already over
    Ignored,
}

/// Errors raised when starting a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    EmptyWordList,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Cannot start a game without any words"),
        }
    }
}

impl std::error::Error for GameError {}

/// Game state for one secret word
#[derive(Debug, Clone)]
pub struct GameSession {
    word: Word,
    reveal: Vec<Option<char>>,
    remaining: Vec<char>,
    mistakes_left: u8,
    misses: Vec<char>,
    outcome: Outcome,
}

impl GameSession {
    /// Pick a random word and reveal its hint letters
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyWordList`] if `words` is empty.
    pub fn start<R: Rng + ?Sized>(
        words: &[Word],
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let word = words.choose(rng).ok_or(GameError::EmptyWordList)?.clone();

        let hints = config.hint_count(word.len());
        let positions = index::sample(rng, word.len(), hints).into_vec();

        debug!(length = word.len(), hints, "selected word");

        Ok(Self::with_hints(word, &positions, config.mistake_budget))
    }

    /// Build a session with explicit hint positions
    ///
    /// Positions past the end of the word are ignored. A budget of zero gives
    /// a session that is already lost.
    #[must_use]
    pub fn with_hints(word: Word, hints: &[usize], mistake_budget: u8) -> Self {
        let mut reveal = vec![None; word.len()];
        for &i in hints {
            if let Some(slot) = reveal.get_mut(i) {
                *slot = word.letters().get(i).copied();
            }
        }

        let mut session = Self {
            remaining: word.letters().to_vec(),
            word,
            reveal,
            mistakes_left: mistake_budget,
            misses: Vec::new(),
            outcome: Outcome::InProgress,
        };
        if session.mistakes_left == 0 {
            session.outcome = Outcome::Lost;
        }
        session
    }

    /// Apply one raw input line
    ///
    /// Skips, invalid characters and letters absent from the word each cost one
    /// mistake. A correct letter reveals its first occurrence that no earlier
    /// guess has matched.
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        if self.outcome != Outcome::InProgress {
            return GuessOutcome::Ignored;
        }

        let result = match Guess::parse(raw) {
            Guess::Skip => {
                self.charge_mistake();
                GuessOutcome::Skipped
            }
            Guess::Invalid(c) => {
                self.charge_mistake();
                GuessOutcome::Invalid(c)
            }
            Guess::Letter(c) if !self.word.has_letter(c) => {
                self.charge_mistake();
                if !self.misses.contains(&c) {
                    self.misses.push(c);
                }
                GuessOutcome::Miss(c)
            }
            Guess::Letter(c) => match self.remaining.iter().position(|&r| r == c) {
                Some(i) => {
                    self.reveal[i] = Some(c);
                    self.remaining[i] = CONSUMED;
                    GuessOutcome::Revealed(i)
                }
                None => GuessOutcome::AlreadyMatched(c),
            },
        };

        self.settle();
        debug!(?result, mistakes_left = self.mistakes_left, "guess applied");
        result
    }

    fn charge_mistake(&mut self) {
        self.mistakes_left = self.mistakes_left.saturating_sub(1);
    }

    fn settle(&mut self) {
        if self.mistakes_left == 0 {
            self.outcome = Outcome::Lost;
        } else if self.is_fully_revealed() {
            self.outcome = Outcome::Won;
        }
    }

    /// Whether every slot matches the word
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.reveal
            .iter()
            .zip(self.word.letters())
            .all(|(slot, &letter)| *slot == Some(letter))
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn reveal(&self) -> &[Option<char>] {
        &self.reveal
    }

    #[must_use]
    pub const fn mistakes_left(&self) -> u8 {
        self.mistakes_left
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Wrong letters in the order they were first guessed
    #[must_use]
    pub fn misses(&self) -> &[char] {
        &self.misses
    }

    /// The reveal state with unset slots shown as underscores
    #[must_use]
    pub fn revealed_text(&self) -> String {
        self.reveal.iter().map(|slot| slot.unwrap_or('_')).collect()
    }
}
