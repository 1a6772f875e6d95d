//! Colors and the clickable tokens built from them.
//!
//! A token pairs a small value with a palette color. The playable set is
//! the cross product of `1..=max_value` and the palette.
//!
//! ```
//! use boolean_game::core::{Color, Token};
//!
//! let blue: Color = "#1b94d0".parse().unwrap();
//! let token = Token::new(2, blue);
//!
//! assert_eq!(token.color.to_string(), "#1b94d0");
//! assert_eq!(token.value, 2);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// An sRGB color, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// The three colors of the original board: blue, green and pink.
pub const DEFAULT_PALETTE: [Color; 3] = [
    Color::rgb(0x1b, 0x94, 0xd0),
    Color::rgb(0x79, 0x96, 0x00),
    Color::rgb(0xe4, 0x30, 0x74),
];

/// A clickable candidate: a value and a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub value: u8,
    pub color: Color,
}

impl Token {
    #[must_use]
    pub const fn new(value: u8, color: Color) -> Self {
        Self { value, color }
    }

    /// Build the full token set: every color paired with every value in
    /// `1..=max_value`, grouped by color.
    #[must_use]
    pub fn full_set(palette: &[Color], max_value: u8) -> Vec<Token> {
        palette
            .iter()
            .flat_map(|&color| (1..=max_value).map(move |value| Token::new(value, color)))
            .collect()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.color)
    }
}
