//! Presentation strategies.
//!
//! The game core never formats anything for the player. A `Presenter`
//! turns a challenge and the token states of a round into output; hosts
//! pick the strategy that fits their surface.

mod ansi;
mod text;

pub use ansi::AnsiPresenter;
pub use text::TextPresenter;

use crate::challenge::Challenge;
use crate::core::{Color, Token};
use crate::round::{Round, TokenView};

/// Renders game state for the player.
pub trait Presenter {
    /// The prompt, e.g. `Clique si pas ( #1b94d0 ) et 2`.
    fn challenge(&self, challenge: &Challenge) -> String;

    /// A single token in its current view state.
    fn token(&self, token: &Token, view: TokenView) -> String;

    /// Every token of a round, in display order, separated by spaces.
    fn tokens(&self, round: &Round) -> String {
        round
            .tokens()
            .iter()
            .map(|t| self.token(&t.token, t.view()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Prompt followed by the token row.
    fn round(&self, round: &Round) -> String {
        format!("{}\n{}", self.challenge(round.challenge()), self.tokens(round))
    }
}

/// Shared layout of the prompt; `color` formats a color operand.
fn prompt(challenge: &Challenge, color: impl Fn(&Color) -> String) -> String {
    let mut parts: Vec<String> = vec!["Clique si".to_string()];

    if challenge.global_negation {
        parts.push("pas (".to_string());
    }

    if let Some(c) = &challenge.color {
        parts.push(negate(color(c), challenge.color_negation));
    }

    if let Some(operand) = challenge.operand {
        parts.push(operand.word().to_string());
    }

    if let Some(n) = challenge.number {
        parts.push(negate(n.to_string(), challenge.number_negation));
    }

    if challenge.global_negation {
        parts.push(")".to_string());
    }

    parts.join(" ")
}

fn negate(inner: String, negated: bool) -> String {
    if negated {
        format!("pas ( {inner} )")
    } else {
        inner
    }
}
