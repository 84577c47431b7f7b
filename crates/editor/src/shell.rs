//! Shell (window) collaborator.

use crate::{DocumentId, EditorError, SessionId};

/// Presentation layer notified of document lifecycle events.
pub trait Shell: Send + Sync {
	/// A tab's content is bound and it can be presented.
	fn tab_ready(&self, _document: DocumentId, _session: SessionId) {}

	/// A document closed; its window should go away.
	fn document_closed(&self, document: DocumentId);

	/// A recoverable failure the user should see.
	fn report_error(&self, document: DocumentId, error: &EditorError);
}

/// Shell that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullShell;

impl Shell for NullShell {
	fn document_closed(&self, document: DocumentId) {
		tracing::debug!(%document, "Document closed");
	}

	fn report_error(&self, document: DocumentId, error: &EditorError) {
		tracing::warn!(%document, %error, "Unhandled document error");
	}
}
