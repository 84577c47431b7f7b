use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies an open document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "doc#{}", self.0)
	}
}

/// Identifies an editor session (tab). Unique across all documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "tab#{}", self.0)
	}
}

/// Shared generator for document and session IDs.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdGen {
	next: Arc<AtomicU64>,
}

impl IdGen {
	fn next(&self) -> u64 {
		self.next.fetch_add(1, Ordering::Relaxed) + 1
	}

	pub fn document(&self) -> DocumentId {
		DocumentId(self.next())
	}

	pub fn session(&self) -> SessionId {
		SessionId(self.next())
	}
}
