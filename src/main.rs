//! Hangman - CLI
//!
//! Guess the hidden word one letter at a time.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use hangman::{
    commands::{exit_code, run_play},
    console::TerminalConsole,
    game::{GameConfig, GameSession},
    wordlists::DataDir,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "A terminal word-guessing game",
    version,
    author
)]
struct Cli {
    /// Word list file to use (default: word.csv in the data directory)
    #[arg(short = 'w', long)]
    word_list: Option<PathBuf>,

    /// Directory holding the default word list and first-run marker
    #[arg(short = 'd', long, default_value = "data")]
    data_dir: PathBuf,

    /// Mistakes allowed before the game is lost
    #[arg(short, long, default_value_t = GameConfig::DEFAULT.mistake_budget,
          value_parser = clap::value_parser!(u8).range(1..))]
    mistakes: u8,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GameConfig {
        mistake_budget: cli.mistakes,
        ..GameConfig::DEFAULT
    };
    let data_dir = DataDir::new(&cli.data_dir);

    let words = data_dir
        .load_words(cli.word_list.as_deref(), config.default_words)
        .context("Failed to load word list")?;
    let session = GameSession::start(&words, &config, &mut rand::rng())?;

    let mut console = TerminalConsole::stdio().context("Failed to set up the terminal")?;
    let code = exit_code(run_play(&mut console, session, &data_dir, &config))?;
    Ok(code)
}
