//! Error types for theme lookup and parsing.

use thiserror::Error;

/// Errors produced while resolving or constructing themes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
	/// No theme is registered under the requested name or alias.
	#[error("unknown theme: {0}")]
	UnknownTheme(String),

	/// A theme name was empty or whitespace.
	#[error("theme name must not be empty")]
	EmptyName,

	/// A color value could not be parsed.
	#[error("invalid color format: {0} (expected #rrggbb)")]
	InvalidColor(String),
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
