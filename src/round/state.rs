//! State of a single round.
//!
//! A round presents one challenge against the token set. Each token keeps
//! its own `checked` flag; the round is the only writer.
//!
//! ```text
//!              click (last matching token)
//! Presenting ───────────────────────────────▶ Completed
//!     │
//!     │ reveal
//!     ▼
//! Revealed
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::challenge::{matches, Answer, Challenge};
use crate::core::{RoundError, Token};

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Challenge shown, tokens clickable.
    Presenting,
    /// Every matching token has been clicked.
    Completed,
    /// The player asked for the answer.
    Revealed,
}

impl RoundPhase {
    /// Has the round ended?
    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, RoundPhase::Presenting)
    }
}

/// What a token looks like to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenView {
    /// Not clicked yet.
    Pending,
    /// Clicked and satisfies the challenge.
    Correct,
    /// Clicked but does not satisfy the challenge.
    Incorrect,
}

/// A token as placed in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundToken {
    pub token: Token,
    /// Satisfies the round's challenge. Fixed for the round.
    pub matching: bool,
    /// Clicked or revealed. Never cleared within a round.
    pub checked: bool,
}

impl RoundToken {
    #[must_use]
    pub fn view(&self) -> TokenView {
        match (self.checked, self.matching) {
            (false, _) => TokenView::Pending,
            (true, true) => TokenView::Correct,
            (true, false) => TokenView::Incorrect,
        }
    }
}

/// Result of a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    /// The clicked token satisfies the challenge.
    pub correct: bool,
    /// The token was already checked before this click.
    pub repeated: bool,
    /// Phase after the click.
    pub phase: RoundPhase,
}

/// One round: a challenge, the tokens in display order, and their flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    challenge: Challenge,
    tokens: Vec<RoundToken>,
    phase: RoundPhase,
}

impl Round {
    /// Start a round. Tokens keep the given order.
    #[must_use]
    pub fn new(challenge: Challenge, tokens: &[Token]) -> Self {
        let tokens = tokens
            .iter()
            .map(|&token| RoundToken {
                token,
                matching: matches(&token, &challenge),
                checked: false,
            })
            .collect();

        Self {
            challenge,
            tokens,
            phase: RoundPhase::Presenting,
        }
    }

    #[must_use]
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    #[must_use]
    pub fn tokens(&self) -> &[RoundToken] {
        &self.tokens
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// View state of the token at `index`.
    #[must_use]
    pub fn token_view(&self, index: usize) -> Option<TokenView> {
        self.tokens.get(index).map(RoundToken::view)
    }

    /// Positions of the tokens the player has to click.
    #[must_use]
    pub fn answer(&self) -> Answer {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.matching)
            .map(|(i, _)| i)
            .collect()
    }

    /// Click the token at `index`.
    ///
    /// Checking is monotonic: clicking a checked token again changes
    /// nothing. The round completes once every matching token is checked.
    pub fn click(&mut self, index: usize) -> Result<ClickOutcome, RoundError> {
        if self.is_finished() {
            return Err(RoundError::AlreadyFinished);
        }

        let count = self.tokens.len();
        let slot = self
            .tokens
            .get_mut(index)
            .ok_or(RoundError::TokenOutOfRange { index, count })?;

        let repeated = slot.checked;
        slot.checked = true;
        let correct = slot.matching;

        if self.all_matching_checked() {
            self.phase = RoundPhase::Completed;
        }

        debug!(index, correct, repeated, phase = ?self.phase, "token clicked");

        Ok(ClickOutcome {
            correct,
            repeated,
            phase: self.phase,
        })
    }

    /// Show the answer: check every token and end the round.
    pub fn reveal(&mut self) -> Result<(), RoundError> {
        if self.is_finished() {
            return Err(RoundError::AlreadyFinished);
        }

        for token in &mut self.tokens {
            token.checked = true;
        }
        self.phase = RoundPhase::Revealed;

        debug!("answer revealed");
        Ok(())
    }

    /// Number of non-matching tokens the player has checked.
    #[must_use]
    pub fn mistakes(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.checked && !t.matching)
            .count()
    }

    /// Completed without a single wrong click.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.phase == RoundPhase::Completed && self.mistakes() == 0
    }

    fn all_matching_checked(&self) -> bool {
        self.tokens.iter().all(|t| t.checked || !t.matching)
    }
}
