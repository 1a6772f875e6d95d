//! Round flow.
//!
//! - `Round`: one challenge against the token set, with per-token
//!   checked flags and the `Presenting → Completed | Revealed` phases
//! - `Session`: owns the level and the RNG, starts each next round

pub mod session;
pub mod state;

pub use session::{RoundSummary, Session};
pub use state::{ClickOutcome, Round, RoundPhase, RoundToken, TokenView};
