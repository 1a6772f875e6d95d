//! Core types: tokens, colors, RNG, configuration and errors.
//!
//! Everything here is independent of how a challenge is shaped; the
//! `challenge` and `round` modules build on it.

pub mod config;
pub mod error;
pub mod rng;
pub mod token;

pub use config::{GameConfig, LevelProgression};
pub use error::{ConfigError, PatternError, RoundError};
pub use rng::{GameRng, GameRngState};
pub use token::{Color, Token, DEFAULT_PALETTE};
