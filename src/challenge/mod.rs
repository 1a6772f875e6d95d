//! Boolean challenges: level patterns, generation and matching.
//!
//! A level's `Pattern` says which predicates a challenge may carry;
//! `ChallengeGenerator` draws a concrete `Challenge` from it, and
//! `matches` decides which tokens the player has to click.

pub mod descriptor;
pub mod evaluator;
pub mod generator;
pub mod pattern;

pub use descriptor::{Challenge, Operand};
pub use evaluator::{answer, matches, Answer};
pub use generator::ChallengeGenerator;
pub use pattern::{Pattern, DEFAULT_PATTERNS};
