//! Embedded word list
//!
//! Written to disk the first time the game runs without a word list.

/// Sample words persisted when no word list exists
pub const DEFAULT_WORDS: &[&str] = &[
    "Apple",
    "Determination",
    "Projectile",
    "Anime",
    "Mouse",
    "Cat",
    "Project",
];
