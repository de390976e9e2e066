//! Command implementations

pub mod play;

pub use play::{PlayError, exit_code, run_play};
