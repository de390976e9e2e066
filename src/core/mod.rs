//! Core domain types for Hangman
//!
//! The word being guessed and the normalized form of a player's guess.
//! Nothing here touches the console or the filesystem.

mod guess;
mod word;

pub use guess::{Guess, is_guessable, normalize};
pub use word::{Word, WordError};
