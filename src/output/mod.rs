//! Terminal output formatting
//!
//! Pure formatters plus the printers the play loop drives.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_board, print_result, print_turn};
