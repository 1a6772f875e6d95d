//! Challenge descriptors.
//!
//! A challenge is one instance of a level pattern: the chosen color and
//! number, the operand joining them and the negation flags. An absent
//! predicate never constrains a match.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Boolean operand joining the color and number predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    And,
    Or,
}

impl Operand {
    pub const ALL: [Operand; 2] = [Operand::And, Operand::Or];

    /// Combine two predicate results.
    #[must_use]
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Operand::And => lhs && rhs,
            Operand::Or => lhs || rhs,
        }
    }

    /// French word shown to the player.
    #[must_use]
    pub fn word(self) -> &'static str {
        match self {
            Operand::And => "et",
            Operand::Or => "ou",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// A generated boolean challenge.
///
/// Fields mirror the formula `global!( color! (op) number! )`. Build
/// challenges with `ChallengeGenerator`, or by hand with the constructors
/// below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Challenge {
    /// Required color, if the color predicate is present.
    pub color: Option<Color>,
    /// Invert the color predicate.
    pub color_negation: bool,
    /// Required number, if the number predicate is present.
    pub number: Option<u8>,
    /// Invert the number predicate.
    pub number_negation: bool,
    /// Operand, present only when both predicates are.
    pub operand: Option<Operand>,
    /// Invert the whole formula.
    pub global_negation: bool,
}

impl Challenge {
    /// "Click if the token has this color."
    #[must_use]
    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// "Click if the token shows this number."
    #[must_use]
    pub fn number(number: u8) -> Self {
        Self {
            number: Some(number),
            ..Self::default()
        }
    }

    /// Join a color and a number predicate.
    #[must_use]
    pub fn both(color: Color, operand: Operand, number: u8) -> Self {
        Self {
            color: Some(color),
            number: Some(number),
            operand: Some(operand),
            ..Self::default()
        }
    }

    /// Negate the color predicate.
    #[must_use]
    pub fn not_color(mut self) -> Self {
        self.color_negation = true;
        self
    }

    /// Negate the number predicate.
    #[must_use]
    pub fn not_number(mut self) -> Self {
        self.number_negation = true;
        self
    }

    /// Negate the whole formula.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.global_negation = true;
        self
    }

    /// Does this challenge have the shape the generator produces?
    ///
    /// At least one predicate is present, the operand is set exactly when
    /// both are, and no negation flag refers to an absent predicate.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let has_color = self.color.is_some();
        let has_number = self.number.is_some();

        (has_color || has_number)
            && self.operand.is_some() == (has_color && has_number)
            && (has_color || !self.color_negation)
            && (has_number || !self.number_negation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_PALETTE;

    #[test]
    fn test_operand_apply() {
        assert!(Operand::And.apply(true, true));
        assert!(!Operand::And.apply(true, false));
        assert!(Operand::Or.apply(false, true));
        assert!(!Operand::Or.apply(false, false));
    }

    #[test]
    fn test_operand_words() {
        assert_eq!(Operand::And.to_string(), "et");
        assert_eq!(Operand::Or.to_string(), "ou");
    }

    #[test]
    fn test_constructors() {
        let c = Challenge::both(DEFAULT_PALETTE[1], Operand::And, 2)
            .not_number()
            .negated();

        assert_eq!(c.color, Some(DEFAULT_PALETTE[1]));
        assert_eq!(c.number, Some(2));
        assert_eq!(c.operand, Some(Operand::And));
        assert!(!c.color_negation);
        assert!(c.number_negation);
        assert!(c.global_negation);
    }

    #[test]
    fn test_well_formed() {
        assert!(Challenge::color(DEFAULT_PALETTE[0]).is_well_formed());
        assert!(Challenge::number(3).not_number().negated().is_well_formed());
        assert!(Challenge::both(DEFAULT_PALETTE[0], Operand::Or, 1).is_well_formed());

        assert!(!Challenge::default().is_well_formed());
        assert!(!Challenge::color(DEFAULT_PALETTE[0]).not_number().is_well_formed());

        let mut dangling = Challenge::number(1);
        dangling.operand = Some(Operand::And);
        assert!(!dangling.is_well_formed());
    }

    #[test]
    fn test_serialization() {
        let c = Challenge::both(DEFAULT_PALETTE[2], Operand::Or, 3).not_color();
        let json = serde_json::to_string(&c).unwrap();
        let back: Challenge = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
