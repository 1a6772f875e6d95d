//! Error types.
//!
//! Generation and evaluation are total, so every error here comes from
//! building a game out of bad configuration or from driving a round out of
//! order.

use thiserror::Error;

/// A pattern string that does not describe a playable formula.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern {pattern:?} contains unknown marker {marker:?}")]
    UnknownMarker { pattern: String, marker: char },

    #[error("pattern {0:?} names neither a color nor a number predicate")]
    NoPredicate(String),

    #[error("pattern {0:?} must use an operand exactly when it names both predicates")]
    OperandMismatch(String),
}

/// Invalid game configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("palette lists {0} more than once")]
    DuplicateColor(String),

    #[error("max_value must be at least 1")]
    ZeroMaxValue,

    #[error("at least one level pattern is required")]
    NoPatterns,

    #[error("start level {level} is out of range for {count} patterns")]
    StartLevelOutOfRange { level: usize, count: usize },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// A round or session driven out of order.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    #[error("token index {index} is out of range for {count} tokens")]
    TokenOutOfRange { index: usize, count: usize },

    #[error("the round is already over")]
    AlreadyFinished,

    #[error("the round is still in progress")]
    NotFinished,
}
