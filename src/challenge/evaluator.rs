//! Matching tokens against a challenge.

use smallvec::SmallVec;

use crate::core::Token;

use super::descriptor::Challenge;

/// Indices of matching tokens. The default board has nine tokens.
pub type Answer = SmallVec<[usize; 9]>;

/// Does `token` satisfy `challenge`?
///
/// An absent predicate is satisfied by every token. With no operand the
/// single present predicate decides; otherwise the operand joins both.
/// The global negation applies last.
///
/// # Panics
///
/// Panics if the challenge names neither a color nor a number. Generated
/// challenges never do.
#[must_use]
pub fn matches(token: &Token, challenge: &Challenge) -> bool {
    let color_match = challenge
        .color
        .is_none_or(|color| (token.color == color) != challenge.color_negation);

    let number_match = challenge
        .number
        .is_none_or(|number| (token.value == number) != challenge.number_negation);

    let combined = match (challenge.operand, challenge.color, challenge.number) {
        (Some(operand), _, _) => operand.apply(color_match, number_match),
        (None, Some(_), _) => color_match,
        (None, None, Some(_)) => number_match,
        (None, None, None) => unreachable!("challenge constrains neither color nor number"),
    };

    combined != challenge.global_negation
}

/// Positions of every token in `tokens` that satisfies `challenge`.
#[must_use]
pub fn answer(tokens: &[Token], challenge: &Challenge) -> Answer {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| matches(token, challenge))
        .map(|(i, _)| i)
        .collect()
}

impl Challenge {
    /// Shorthand for [`matches`].
    #[must_use]
    pub fn matches(&self, token: &Token) -> bool {
        matches(token, self)
    }
}
