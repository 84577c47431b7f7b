//! Error taxonomy for document coordination.

use quire_theme::ThemeError;
use thiserror::Error;

use crate::{DocumentId, DocumentState, Locator, StorageError};

/// Errors surfaced by documents, tab collections and the workspace.
///
/// `InvalidArgument` and `InvalidState` are caller mistakes and propagate
/// immediately. `ContentLoadFailed` is recovered inside the document and only
/// reaches the shell as a report.
#[derive(Debug, Error)]
pub enum EditorError {
	/// An argument was rejected, such as an empty or unknown theme name.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// The requested tab or document does not exist.
	#[error("not found: {0}")]
	NotFound(String),

	/// The document no longer accepts operations.
	#[error("document {document} is {state}")]
	InvalidState {
		document: DocumentId,
		state: DocumentState,
	},

	/// The storage collaborator could not supply a tab's content.
	#[error("failed to load {locator}: {source}")]
	ContentLoadFailed {
		locator: Locator,
		#[source]
		source: StorageError,
	},
}

impl From<ThemeError> for EditorError {
	fn from(error: ThemeError) -> Self {
		Self::InvalidArgument(error.to_string())
	}
}

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
