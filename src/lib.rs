//! Hangman
//!
//! A terminal word-guessing game: a random word is partially revealed and the
//! player guesses letters until it is complete or the mistake budget runs out.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::Word;
//! use hangman::game::{GameSession, Outcome};
//!
//! let word = Word::new("cat").unwrap();
//! let mut session = GameSession::with_hints(word, &[0], 3);
//!
//! session.submit_guess("a");
//! session.submit_guess("t");
//! assert_eq!(session.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Game state and rules
pub mod game;

// Word lists and the data directory
pub mod wordlists;

// Console I/O
pub mod console;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
