//! Configuration system for Quire.
//!
//! Configuration is a single TOML file:
//!
//! ```toml
//! # Theme activated at startup (name or alias)
//! theme = "paper"
//!
//! # Extra directories scanned for *.toml theme files
//! theme_dirs = ["/usr/share/quire/themes"]
//! ```
//!
//! Quire looks for it at `$XDG_CONFIG_HOME/quire/config.toml` (or the
//! platform equivalent) unless a path is given explicitly. Theme files are
//! read from `<config dir>/quire/themes` and from every `theme_dirs` entry.

pub mod error;
pub mod theme;

use std::path::{Path, PathBuf};

pub use error::{ConfigError, Result};
use quire_theme::ThemeRegistry;
use serde::Deserialize;
pub use theme::{load_theme_dir, load_theme_file, parse_theme};

/// Application directory name under the platform config directory.
pub const APP_DIR: &str = "quire";

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Theme to activate at startup.
	pub theme: Option<String>,
	/// Additional theme directories, scanned after the default one.
	pub theme_dirs: Vec<PathBuf>,
}

impl Config {
	/// Parses a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Loads configuration from a file. A missing file is an error.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&content).map_err(|e| e.in_file(path))
	}

	/// Loads the default config file, falling back to defaults if it is absent.
	pub fn load_default() -> Result<Self> {
		match default_config_path() {
			Some(path) if path.exists() => Self::load(path),
			_ => Ok(Self::default()),
		}
	}

	/// Theme directories in scan order.
	pub fn theme_search_dirs(&self) -> Vec<PathBuf> {
		config_dir()
			.map(|dir| dir.join("themes"))
			.into_iter()
			.chain(self.theme_dirs.iter().cloned())
			.collect()
	}

	/// Registers every theme found in [`Self::theme_search_dirs`] and applies
	/// the configured startup theme.
	///
	/// Individual theme files that fail to load are returned rather than
	/// aborting startup. An unknown configured theme is an error.
	pub fn apply(&self, registry: &ThemeRegistry) -> Result<Vec<(PathBuf, ConfigError)>> {
		let mut failures = Vec::new();
		for dir in self.theme_search_dirs() {
			let (themes, errors) = load_theme_dir(&dir);
			for theme in themes {
				registry.register(theme)?;
			}
			failures.extend(errors);
		}

		if let Some(name) = &self.theme {
			registry.set_active_by_name(name)?;
		}
		Ok(failures)
	}
}

/// Returns `<platform config dir>/quire`.
pub fn config_dir() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Returns the default config file path.
pub fn default_config_path() -> Option<PathBuf> {
	config_dir().map(|dir| dir.join("config.toml"))
}
