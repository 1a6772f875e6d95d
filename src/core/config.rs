//! Game configuration.
//!
//! The defaults reproduce the original board: three colors, values 1 to 3,
//! seven levels from `C` to `!!Co!N`, capped at the last level.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::challenge::{Pattern, DEFAULT_PATTERNS};

use super::error::ConfigError;
use super::token::{Color, DEFAULT_PALETTE};

/// What happens after a perfect round on the last level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelProgression {
    /// Stay on the last level.
    #[default]
    Cap,
    /// Start over from level 0.
    Wrap,
}

impl LevelProgression {
    /// Level reached after a perfect round on `level` out of `count`.
    #[must_use]
    pub fn advance(self, level: usize, count: usize) -> usize {
        match self {
            Self::Cap => (level + 1).min(count.saturating_sub(1)),
            Self::Wrap => (level + 1) % count.max(1),
        }
    }
}

/// Game configuration.
///
/// `Default` uses a fixed seed, so two default sessions play the same
/// challenges in the same token order. Use `with_random_seed` for a fresh
/// game on every start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Token colors. Each color appears once.
    pub palette: Vec<Color>,

    /// Token values run from 1 to `max_value` inclusive.
    pub max_value: u8,

    /// Level patterns in order of difficulty. Index = level.
    pub patterns: Vec<String>,

    /// Behavior after a perfect round on the last level.
    pub progression: LevelProgression,

    /// Level of the first round.
    pub start_level: usize,

    /// Seed for challenge draws and token shuffles.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
            max_value: 3,
            patterns: DEFAULT_PATTERNS.iter().map(|p| (*p).to_string()).collect(),
            progression: LevelProgression::Cap,
            start_level: 0,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config seeded from OS entropy.
    #[must_use]
    pub fn with_random_seed(self) -> Self {
        self.with_seed(rand::random())
    }

    /// Create a new config with a custom palette.
    #[must_use]
    pub fn with_palette(mut self, palette: impl IntoIterator<Item = Color>) -> Self {
        self.palette = palette.into_iter().collect();
        self
    }

    /// Create a new config with custom level patterns.
    #[must_use]
    pub fn with_patterns<S: Into<String>>(mut self, patterns: impl IntoIterator<Item = S>) -> Self {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Create a new config with a custom maximum token value.
    #[must_use]
    pub fn with_max_value(mut self, max_value: u8) -> Self {
        self.max_value = max_value;
        self
    }

    /// Create a new config with a custom progression policy.
    #[must_use]
    pub fn with_progression(mut self, progression: LevelProgression) -> Self {
        self.progression = progression;
        self
    }

    /// Create a new config starting at a custom level.
    #[must_use]
    pub fn with_start_level(mut self, level: usize) -> Self {
        self.start_level = level;
        self
    }

    /// Check the configuration and parse its patterns.
    pub fn validate(&self) -> Result<Vec<Pattern>, ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        let mut seen = FxHashSet::default();
        for color in &self.palette {
            if !seen.insert(*color) {
                return Err(ConfigError::DuplicateColor(color.to_string()));
            }
        }

        if self.max_value == 0 {
            return Err(ConfigError::ZeroMaxValue);
        }

        if self.patterns.is_empty() {
            return Err(ConfigError::NoPatterns);
        }

        if self.start_level >= self.patterns.len() {
            return Err(ConfigError::StartLevelOutOfRange {
                level: self.start_level,
                count: self.patterns.len(),
            });
        }

        let patterns = self
            .patterns
            .iter()
            .map(|p| p.parse::<Pattern>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PatternError;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.palette.len(), 3);
        assert_eq!(config.max_value, 3);
        assert_eq!(config.patterns, ["C", "N", "CoN", "!CoN", "Co!N", "!Co!N", "!!Co!N"]);
        assert_eq!(config.progression, LevelProgression::Cap);

        let patterns = config.validate().unwrap();
        assert_eq!(patterns.len(), 7);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_max_value(5)
            .with_patterns(["C", "CoN"])
            .with_progression(LevelProgression::Wrap)
            .with_start_level(1);

        assert_eq!(config.seed, 123);
        assert_eq!(config.max_value, 5);
        assert_eq!(config.patterns, ["C", "CoN"]);
        assert_eq!(config.progression, LevelProgression::Wrap);
        assert_eq!(config.start_level, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_seed_is_fixed() {
        assert_eq!(GameConfig::default().seed, GameConfig::default().seed);
    }

    #[test]
    fn test_random_seed() {
        let a = GameConfig::default().with_random_seed();
        let b = GameConfig::default().with_random_seed();

        assert_ne!(a.seed, b.seed);
        assert_eq!(a.patterns, b.patterns);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let base = GameConfig::default();

        assert_eq!(
            base.clone().with_palette(Vec::<Color>::new()).validate(),
            Err(ConfigError::EmptyPalette)
        );
        assert_eq!(
            base.clone()
                .with_palette([DEFAULT_PALETTE[0], DEFAULT_PALETTE[0]])
                .validate(),
            Err(ConfigError::DuplicateColor("#1b94d0".to_string()))
        );
        assert_eq!(
            base.clone().with_max_value(0).validate(),
            Err(ConfigError::ZeroMaxValue)
        );
        assert_eq!(
            base.clone().with_patterns(Vec::<String>::new()).validate(),
            Err(ConfigError::NoPatterns)
        );
        assert_eq!(
            base.clone().with_start_level(7).validate(),
            Err(ConfigError::StartLevelOutOfRange { level: 7, count: 7 })
        );
        assert_eq!(
            base.with_patterns(["C", "o"]).validate(),
            Err(ConfigError::Pattern(PatternError::NoPredicate("o".to_string())))
        );
    }

    #[test]
    fn test_progression() {
        assert_eq!(LevelProgression::Cap.advance(0, 7), 1);
        assert_eq!(LevelProgression::Cap.advance(6, 7), 6);
        assert_eq!(LevelProgression::Wrap.advance(5, 7), 6);
        assert_eq!(LevelProgression::Wrap.advance(6, 7), 0);
        assert_eq!(LevelProgression::Cap.advance(0, 1), 0);
        assert_eq!(LevelProgression::Wrap.advance(0, 1), 0);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_progression(LevelProgression::Wrap);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"wrap\""));
        assert!(json.contains("\"#e43074\""));

        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.patterns.len(), 7);
    }
}
