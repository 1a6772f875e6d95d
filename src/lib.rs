//! # boolean-game
//!
//! Core of a boolean logic puzzle. The player sees a formula over a color
//! predicate and a number predicate, e.g. `pas ( #1b94d0 ) ou 2`, and must
//! click every token that satisfies it.
//!
//! ## Design Principles
//!
//! 1. **One core, many surfaces**: generation, matching and round flow
//!    live here; rendering is a pluggable `Presenter`.
//!
//! 2. **Owned round state**: each token's checked flag is a field of the
//!    round, written only by the round.
//!
//! 3. **Deterministic**: a seed fixes every challenge and every shuffle.
//!
//! ## Modules
//!
//! - `core`: Colors, tokens, RNG, configuration, errors
//! - `challenge`: Level patterns, challenge generation, matching
//! - `round`: Round state machine and the session controller
//! - `present`: Text renderings of challenges and tokens

pub mod core;
pub mod challenge;
pub mod round;
pub mod present;

// Re-export commonly used types
pub use crate::core::{
    Color, Token, DEFAULT_PALETTE,
    GameRng, GameRngState,
    GameConfig, LevelProgression,
    ConfigError, PatternError, RoundError,
};

pub use crate::challenge::{
    Challenge, Operand, Pattern, ChallengeGenerator, DEFAULT_PATTERNS,
    matches, answer, Answer,
};

pub use crate::round::{
    Round, RoundPhase, RoundToken, TokenView, ClickOutcome,
    Session, RoundSummary,
};

pub use crate::present::{Presenter, TextPresenter, AnsiPresenter};
