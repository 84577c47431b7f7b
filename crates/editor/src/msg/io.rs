//! Content load messages.

use ropey::Rope;

use super::Dirty;
use crate::{DocumentId, Locator, SessionId, StorageError, Workspace};

/// Completion of a tab's content load.
///
/// `token` is the load generation issued when the tab was opened. A
/// completion whose session is gone or whose token no longer matches is
/// discarded.
#[derive(Debug)]
pub enum IoMsg {
	/// Content was read and decoded.
	ContentLoaded {
		document: DocumentId,
		session: SessionId,
		token: u64,
		rope: Rope,
	},
	/// The storage collaborator failed.
	LoadFailed {
		document: DocumentId,
		session: SessionId,
		token: u64,
		locator: Locator,
		error: StorageError,
	},
}

impl IoMsg {
	pub fn apply(self, workspace: &mut Workspace) -> Dirty {
		let document = match &self {
			Self::ContentLoaded { document, .. } | Self::LoadFailed { document, .. } => *document,
		};
		let Some(doc) = workspace.documents.get_mut(&document) else {
			tracing::debug!(%document, "Discarding load completion for a dropped document");
			return Dirty::NONE;
		};

		match self {
			Self::ContentLoaded { session, token, rope, .. } => doc.apply_loaded(session, token, rope),
			Self::LoadFailed {
				session,
				token,
				locator,
				error,
				..
			} => doc.apply_load_failed(session, token, locator, error),
		}
	}
}
