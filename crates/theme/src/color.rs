use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ThemeError;

/// An opaque RGB color.
///
/// Serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const BLACK: Self = Self::rgb(0, 0, 0);
	pub const WHITE: Self = Self::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}
}

impl FromStr for Color {
	type Err = ThemeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || ThemeError::InvalidColor(s.to_string());
		let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
		if hex.len() != 6 || !hex.is_ascii() {
			return Err(invalid());
		}
		let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
		Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
	}
}

impl TryFrom<String> for Color {
	type Error = ThemeError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Color> for String {
	fn from(color: Color) -> Self {
		color.to_string()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_with_mixed_case() {
		assert_eq!("#1E2a3F".parse::<Color>().unwrap(), Color::rgb(0x1e, 0x2a, 0x3f));
	}

	#[test]
	fn display_is_lowercase_hex() {
		assert_eq!(Color::rgb(255, 8, 171).to_string(), "#ff08ab");
	}

	#[test]
	fn rejects_malformed_values() {
		for bad in ["", "123456", "#12345", "#1234567", "#gg0000", "#ééé"] {
			assert!(bad.parse::<Color>().is_err(), "{bad:?} should not parse");
		}
	}
}
