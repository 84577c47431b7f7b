//! Shell collaborator that queues notices for the command loop to print.

use parking_lot::Mutex;
use quire_editor::{DocumentId, EditorError, SessionId, Shell};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
	Ready(DocumentId, SessionId),
	Closed(DocumentId),
	Error(DocumentId, String),
}

impl std::fmt::Display for Notice {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Ready(document, session) => write!(f, "{document}: {session} ready"),
			Self::Closed(document) => write!(f, "{document}: closed"),
			Self::Error(document, message) => write!(f, "{document}: error: {message}"),
		}
	}
}

#[derive(Debug, Default)]
pub struct TermShell {
	notices: Mutex<Vec<Notice>>,
}

impl TermShell {
	/// Takes every queued notice.
	pub fn take(&self) -> Vec<Notice> {
		std::mem::take(&mut *self.notices.lock())
	}
}

impl Shell for TermShell {
	fn tab_ready(&self, document: DocumentId, session: SessionId) {
		self.notices.lock().push(Notice::Ready(document, session));
	}

	fn document_closed(&self, document: DocumentId) {
		self.notices.lock().push(Notice::Closed(document));
	}

	fn report_error(&self, document: DocumentId, error: &EditorError) {
		tracing::warn!(%document, %error, "Document error");
		self.notices.lock().push(Notice::Error(document, error.to_string()));
	}
}
