//! Display functions for the game screen

use super::formatters::{format_misses, format_reveal_row, format_ruler, mistakes_message};
use crate::console::Console;
use crate::game::{GameConfig, GameSession, Outcome};
use colored::Colorize;
use std::io;

/// Print the extended banner on the first run, the short one afterwards
///
/// # Errors
///
/// Returns an I/O error if the console cannot be written.
pub fn print_banner<C: Console + ?Sized>(
    console: &mut C,
    config: &GameConfig,
    first_run: bool,
) -> io::Result<()> {
    let banner = if first_run {
        config.onetime_banner
    } else {
        config.banner
    };
    console.write_line(&banner.bright_cyan().bold().to_string())
}

/// Print the reveal row and its index ruler
///
/// # Errors
///
/// Returns an I/O error if the console cannot be written.
pub fn print_board<C: Console + ?Sized>(console: &mut C, session: &GameSession) -> io::Result<()> {
    console.write_line(&format_reveal_row(session.reveal()))?;
    console.write_line(&format_ruler(session.reveal().len()).bright_black().to_string())
}

/// Print the board followed by the turn status
///
/// # Errors
///
/// Returns an I/O error if the console cannot be written.
pub fn print_turn<C: Console + ?Sized>(console: &mut C, session: &GameSession) -> io::Result<()> {
    print_board(console, session)?;
    if let Some(misses) = format_misses(session.misses()) {
        console.write_line(&misses.red().to_string())?;
    }
    console.write_line(&mistakes_message(session.mistakes_left()))?;
    console.write_line("")
}

/// Print the final board, the answer and the verdict
///
/// # Errors
///
/// Returns an I/O error if the console cannot be written.
pub fn print_result<C: Console + ?Sized>(console: &mut C, session: &GameSession) -> io::Result<()> {
    print_board(console, session)?;
    console.write_line(&format!(
        "Correct word: {}",
        session.word().text().bright_yellow().bold()
    ))?;
    console.write_line(&format!("Guessed totals: {}", session.revealed_text()))?;
    console.write_line("")?;

    if session.outcome() == Outcome::Won {
        console.write_line(&"You've won the game!".green().bold().to_string())
    } else {
        console.write_line(&format!("You lose, get better {} try!", "next".green()))
    }
}
