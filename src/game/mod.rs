//! Game state and rules

mod config;
mod session;

pub use config::GameConfig;
pub use session::{GameError, GameSession, GuessOutcome, Outcome};
