//! Random challenge generation.

use tracing::debug;

use crate::core::{Color, GameRng, DEFAULT_PALETTE};

use super::descriptor::{Challenge, Operand};
use super::pattern::Pattern;

/// Draws challenges for a fixed palette and value range.
///
/// Each field present in the pattern is drawn uniformly: the color over
/// the palette, the number over `1..=max_value`, the operand over
/// `et`/`ou`, and each negation allowed by the pattern with probability
/// one half. Fields the pattern does not name stay empty, and their
/// negation flags stay false.
#[derive(Clone, Debug)]
pub struct ChallengeGenerator {
    palette: Vec<Color>,
    max_value: u8,
}

impl Default for ChallengeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.to_vec(), 3)
    }
}

impl ChallengeGenerator {
    /// Create a generator.
    ///
    /// # Panics
    ///
    /// Panics if the palette is empty or `max_value` is zero. `GameConfig`
    /// rejects both before a session builds its generator.
    #[must_use]
    pub fn new(palette: Vec<Color>, max_value: u8) -> Self {
        assert!(!palette.is_empty(), "palette must not be empty");
        assert!(max_value >= 1, "max_value must be at least 1");
        Self { palette, max_value }
    }

    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    #[must_use]
    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Draw a challenge for `pattern`.
    pub fn generate(&self, pattern: &Pattern, rng: &mut GameRng) -> Challenge {
        let global_negation = pattern.global_negation && rng.coin();
        let color_negation = pattern.color_negation && rng.coin();
        let color = if pattern.color {
            rng.choose(&self.palette).copied()
        } else {
            None
        };
        let operand = if pattern.operand {
            rng.choose(&Operand::ALL).copied()
        } else {
            None
        };
        let number_negation = pattern.number_negation && rng.coin();
        let number = if pattern.number {
            Some(rng.gen_range_u8(1..=self.max_value))
        } else {
            None
        };

        let challenge = Challenge {
            color,
            color_negation,
            number,
            number_negation,
            operand,
            global_negation,
        };

        debug!(pattern = %pattern, ?challenge, "generated challenge");
        challenge
    }
}
