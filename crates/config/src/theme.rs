//! Theme file parsing.
//!
//! Theme files are standalone TOML documents:
//!
//! ```toml
//! name = "harbor"
//! variant = "dark"
//! aliases = ["sea"]
//!
//! [ui]
//! bg = "#102030"
//! fg = "#e0e0e0"
//!
//! [font]
//! family = "Iosevka"
//! size = 14.0
//! ```
//!
//! Omitted `[ui]` entries fall back to the default palette.

use std::path::{Path, PathBuf};

use quire_theme::{Theme, ThemeError};

use crate::error::{ConfigError, Result};

/// Theme file extension.
pub const THEME_EXTENSION: &str = "toml";

/// Parses a theme from TOML source.
pub fn parse_theme(input: &str) -> Result<Theme> {
	let theme: Theme = toml::from_str(input)?;
	if theme.name.trim().is_empty() {
		return Err(ThemeError::EmptyName.into());
	}
	Ok(theme)
}

/// Loads a single theme file.
pub fn load_theme_file(path: impl AsRef<Path>) -> Result<Theme> {
	let path = path.as_ref();
	let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	parse_theme(&content).map_err(|e| e.in_file(path))
}

/// Loads every `*.toml` theme in `dir`, sorted by file name.
///
/// A missing directory yields nothing. Files that fail to parse are returned
/// alongside the themes that loaded so the caller can report them.
pub fn load_theme_dir(dir: impl AsRef<Path>) -> (Vec<Theme>, Vec<(PathBuf, ConfigError)>) {
	let dir = dir.as_ref();
	let mut themes = Vec::new();
	let mut errors = Vec::new();

	let entries = match std::fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(error) if error.kind() == std::io::ErrorKind::NotFound => return (themes, errors),
		Err(error) => {
			errors.push((dir.to_path_buf(), ConfigError::Io {
				path: dir.to_path_buf(),
				error,
			}));
			return (themes, errors);
		}
	};

	let mut paths: Vec<PathBuf> = entries
		.flatten()
		.map(|entry| entry.path())
		.filter(|path| path.extension().is_some_and(|ext| ext == THEME_EXTENSION))
		.collect();
	paths.sort();

	for path in paths {
		match load_theme_file(&path) {
			Ok(theme) => {
				tracing::debug!(theme = %theme.name, path = %path.display(), "Loaded theme file");
				themes.push(theme);
			}
			Err(error) => errors.push((path, error)),
		}
	}

	(themes, errors)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quire_theme::{Color, ThemeVariant, UiColors};

	use super::*;

	#[test]
	fn parses_full_theme() {
		let theme = parse_theme(
			r##"
name = "harbor"
variant = "light"
aliases = ["sea"]

[ui]
bg = "#102030"

[font]
family = "Iosevka"
size = 14.0
"##,
		)
		.unwrap();

		assert_eq!(theme.name, "harbor");
		assert_eq!(theme.variant, ThemeVariant::Light);
		assert_eq!(theme.aliases, vec!["sea".to_string()]);
		assert_eq!(theme.ui.bg, Color::rgb(0x10, 0x20, 0x30));
		assert_eq!(theme.ui.fg, UiColors::default().fg);
		assert_eq!(theme.font.unwrap().family, "Iosevka");
	}

	#[test]
	fn rejects_bad_color_and_unknown_keys() {
		assert!(parse_theme("name = \"x\"\n[ui]\nbg = \"red\"\n").is_err());
		assert!(parse_theme("name = \"x\"\nshade = 3\n").is_err());
	}

	#[test]
	fn rejects_empty_name() {
		assert!(matches!(
			parse_theme("name = \"\""),
			Err(ConfigError::Theme(ThemeError::EmptyName))
		));
	}

	#[test]
	fn theme_dir_collects_themes_and_errors() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("b.toml"), "name = \"bravo\"\n").unwrap();
		std::fs::write(dir.path().join("a.toml"), "name = \"alpha\"\n").unwrap();
		std::fs::write(dir.path().join("broken.toml"), "name = [\n").unwrap();
		std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

		let (themes, errors) = load_theme_dir(dir.path());
		let names: Vec<_> = themes.iter().map(|t| t.name.as_str()).collect();
		assert_eq!(names, vec!["alpha", "bravo"]);
		assert_eq!(errors.len(), 1);
		assert!(errors[0].0.ends_with("broken.toml"));
		assert!(errors[0].1.to_string().contains("broken.toml"));
	}

	#[test]
	fn missing_theme_dir_is_empty() {
		let dir = tempfile::tempdir().unwrap();
		let (themes, errors) = load_theme_dir(dir.path().join("absent"));
		assert!(themes.is_empty());
		assert!(errors.is_empty());
	}
}
