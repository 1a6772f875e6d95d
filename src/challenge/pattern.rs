//! Level patterns.
//!
//! A pattern is a formula shape written with a handful of markers:
//!
//! | Marker | Meaning                                    |
//! |--------|--------------------------------------------|
//! | `C`    | color predicate present                    |
//! | `N`    | number predicate present                   |
//! | `o`    | the two predicates are joined by `et`/`ou` |
//! | `!C`   | the color predicate may be negated         |
//! | `!N`   | the number predicate may be negated        |
//! | `!!`   | the whole formula may be negated           |
//!
//! Markers are detected by substring containment, so `!!Co!N` carries
//! `!!`, `!C`, `C`, `o`, `!N` and `N`.
//!
//! ```
//! use boolean_game::challenge::Pattern;
//!
//! let pattern: Pattern = "!Co!N".parse().unwrap();
//! assert!(pattern.color && pattern.number && pattern.operand);
//! assert!(pattern.color_negation && pattern.number_negation);
//! assert!(!pattern.global_negation);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::PatternError;

/// Level patterns of the original game, easiest first.
pub const DEFAULT_PATTERNS: [&str; 7] = ["C", "N", "CoN", "!CoN", "Co!N", "!Co!N", "!!Co!N"];

/// A parsed level pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern {
    source: String,
    pub color: bool,
    pub number: bool,
    pub operand: bool,
    pub color_negation: bool,
    pub number_negation: bool,
    pub global_negation: bool,
}

impl Pattern {
    /// The pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parse the built-in level list.
    ///
    /// # Panics
    ///
    /// Panics if an entry of `DEFAULT_PATTERNS` does not parse.
    #[must_use]
    pub fn defaults() -> Vec<Pattern> {
        DEFAULT_PATTERNS
            .iter()
            .map(|p| p.parse::<Pattern>().expect("built-in pattern must parse"))
            .collect()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(marker) = s.chars().find(|c| !matches!(c, 'C' | 'N' | 'o' | '!')) {
            return Err(PatternError::UnknownMarker {
                pattern: s.to_string(),
                marker,
            });
        }

        let pattern = Self {
            source: s.to_string(),
            color: s.contains('C'),
            number: s.contains('N'),
            operand: s.contains('o'),
            color_negation: s.contains("!C"),
            number_negation: s.contains("!N"),
            global_negation: s.contains("!!"),
        };

        if !pattern.color && !pattern.number {
            return Err(PatternError::NoPredicate(pattern.source));
        }

        if pattern.operand != (pattern.color && pattern.number) {
            return Err(PatternError::OperandMismatch(pattern.source));
        }

        Ok(pattern)
    }
}

impl TryFrom<String> for Pattern {
    type Error = PatternError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
