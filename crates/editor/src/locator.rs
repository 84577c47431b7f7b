use std::fmt;
use std::path::{Path, PathBuf};

/// Source location of a document's content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locator(PathBuf);

impl Locator {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self(path.into())
	}

	pub fn path(&self) -> &Path {
		&self.0
	}

	/// Short display name: the final path component, or the whole path.
	pub fn title(&self) -> String {
		self.0
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| self.0.display().to_string())
	}
}

impl fmt::Display for Locator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.display())
	}
}

impl From<PathBuf> for Locator {
	fn from(path: PathBuf) -> Self {
		Self(path)
	}
}

impl From<&Path> for Locator {
	fn from(path: &Path) -> Self {
		Self(path.to_path_buf())
	}
}

impl From<&str> for Locator {
	fn from(path: &str) -> Self {
		Self(PathBuf::from(path))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn title_is_file_name() {
		assert_eq!(Locator::from("notes/a.txt").title(), "a.txt");
		assert_eq!(Locator::from("/").title(), "/");
	}
}
