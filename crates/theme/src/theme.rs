use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Color;

/// Lookup key for a registered theme.
///
/// Holders of a `ThemeId` resolve it through the registry on use rather than
/// keeping the theme alive themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
	pub fn new(name: impl Into<String>) -> Self {
		Self(name.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ThemeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ThemeId {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

/// Whether a theme is designed for dark or light backgrounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
	#[default]
	Dark,
	Light,
}

impl fmt::Display for ThemeVariant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Dark => "dark",
			Self::Light => "light",
		})
	}
}

/// Editor chrome colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiColors {
	pub bg: Color,
	pub fg: Color,
	pub cursor: Color,
	pub selection: Color,
	pub gutter: Color,
	pub tab_active: Color,
	pub tab_inactive: Color,
}

impl Default for UiColors {
	fn default() -> Self {
		Self {
			bg: Color::rgb(0x1c, 0x1c, 0x1c),
			fg: Color::rgb(0xd0, 0xd0, 0xd0),
			cursor: Color::WHITE,
			selection: Color::rgb(0x26, 0x4f, 0x78),
			gutter: Color::rgb(0x6c, 0x6c, 0x6c),
			tab_active: Color::rgb(0x30, 0x30, 0x30),
			tab_inactive: Color::rgb(0x12, 0x12, 0x12),
		}
	}
}

/// Font used by the text view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSpec {
	pub family: String,
	pub size: f32,
}

/// A visual style descriptor applied to editor sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
	pub name: String,
	#[serde(default)]
	pub variant: ThemeVariant,
	#[serde(default)]
	pub aliases: Vec<String>,
	#[serde(default)]
	pub ui: UiColors,
	#[serde(default)]
	pub font: Option<FontSpec>,
}

impl Theme {
	/// Creates a theme with default dark colors.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			variant: ThemeVariant::Dark,
			aliases: Vec::new(),
			ui: UiColors::default(),
			font: None,
		}
	}

	pub fn id(&self) -> ThemeId {
		ThemeId::new(self.name.clone())
	}

	/// Returns true if `name` is this theme's name or one of its aliases.
	pub fn answers_to(&self, name: &str) -> bool {
		self.name == name || self.aliases.iter().any(|a| a == name)
	}
}
