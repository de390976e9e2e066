//! Interactive play loop
//!
//! Renders the board, reads one guess per turn and reports the verdict.

use crate::console::Console;
use crate::game::{GameConfig, GameSession, Outcome};
use crate::output::{print_banner, print_result, print_turn};
use crate::wordlists::DataDir;
use std::fmt;
use std::io;
use std::process::ExitCode;
use tracing::{debug, warn};

const PROMPT: &str = "Your input: ";

/// Errors that end the play loop early
#[derive(Debug)]
pub enum PlayError {
    /// Standard input was closed before the game ended
    InputClosed,
    Io(io::Error),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputClosed => write!(f, "Input stream closed"),
            Self::Io(e) => write!(f, "Console error: {e}"),
        }
    }
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputClosed => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PlayError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Run a session to completion
///
/// Shows the first-run banner when `data_dir` has no marker yet, then writes
/// the marker.
///
/// # Errors
///
/// Returns [`PlayError::InputClosed`] if input ends mid-game, or
/// [`PlayError::Io`] if the console or marker file cannot be written.
pub fn run_play<C: Console + ?Sized>(
    console: &mut C,
    mut session: GameSession,
    data_dir: &DataDir,
    config: &GameConfig,
) -> Result<Outcome, PlayError> {
    console.clear()?;
    print_banner(console, config, data_dir.is_first_run())?;
    data_dir.mark_initialized()?;

    let mut turns = 0_usize;
    loop {
        print_turn(console, &session)?;

        let line = match console.read_line(PROMPT) {
            Ok(Some(line)) => line,
            Ok(None) => return Err(PlayError::InputClosed),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                warn!("input interrupted, counting as a skip");
                String::new()
            }
            Err(e) => return Err(e.into()),
        };

        session.submit_guess(&line);
        turns += 1;

        if session.outcome() != Outcome::InProgress {
            break;
        }
        console.clear()?;
    }

    debug!(turns, outcome = ?session.outcome(), "game finished");

    console.clear()?;
    print_result(console, &session)?;
    Ok(session.outcome())
}

/// Map the result of a game to the process exit code
///
/// A finished game exits with success and closed input exits with failure.
///
/// # Errors
///
/// Passes through every other [`PlayError`].
pub fn exit_code(result: Result<Outcome, PlayError>) -> Result<ExitCode, PlayError> {
    match result {
        Ok(outcome) => {
            debug!(?outcome, "exiting");
            Ok(ExitCode::SUCCESS)
        }
        Err(PlayError::InputClosed) => {
            debug!("input closed, exiting");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e),
    }
}
