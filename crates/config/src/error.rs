//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading configuration or theme files.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A parsed theme failed validation.
	#[error("invalid theme: {0}")]
	Theme(#[from] quire_theme::ThemeError),

	/// A file failed to parse; wraps the inner error with its location.
	#[error("{path}: {error}")]
	InFile {
		/// Path to the offending file.
		path: PathBuf,
		/// The underlying error.
		error: Box<ConfigError>,
	},
}

impl ConfigError {
	pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
		Self::InFile {
			path: path.into(),
			error: Box::new(self),
		}
	}
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
