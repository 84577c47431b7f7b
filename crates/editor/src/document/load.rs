//! Deferred content materialization.
//!
//! A load task races the storage read against its session's cancellation
//! token and reports through [`IoMsg`]. The document applies the completion
//! only if the session still exists and is still waiting on that generation.

use quire_worker::{LoadToken, TaskClass};
use ropey::Rope;

use super::{Document, DocumentState};
use crate::msg::{Dirty, IoMsg, send};
use crate::storage::decode;
use crate::{EditorError, Locator, SessionId, StorageError};

impl Document {
	/// Spawns the storage read for `session`.
	pub(super) fn kick_content_load(&self, session: SessionId, locator: Locator, token: LoadToken) {
		let storage = self.services.storage.clone();
		let tx = self.services.msg_tx.clone();
		let document = self.id;

		quire_worker::spawn(TaskClass::ContentLoad, async move {
			let generation = token.generation();
			let result = tokio::select! {
				biased;
				_ = token.cancelled() => {
					tracing::debug!(%document, %session, %locator, "Content load cancelled");
					return;
				}
				result = storage.read(&locator) => result,
			};

			let msg = match result.and_then(decode) {
				Ok(rope) => IoMsg::ContentLoaded {
					document,
					session,
					token: generation,
					rope,
				},
				Err(error) => IoMsg::LoadFailed {
					document,
					session,
					token: generation,
					locator,
					error,
				},
			};
			send(&tx, msg);
		});
	}

	/// Binds loaded content to its session.
	pub(crate) fn apply_loaded(&mut self, session: SessionId, token: u64, rope: Rope) -> Dirty {
		if !self.accepts_completion(session, token) {
			return Dirty::NONE;
		}
		let Some(tab) = self.tabs.get_mut(session) else {
			return Dirty::NONE;
		};

		tab.bind_content(Some(rope));
		tracing::debug!(document = %self.id, %session, len = tab.content().len_bytes(), "Content loaded");
		self.forget_pending(session);
		if self.state == DocumentState::Loading {
			self.state = DocumentState::Active;
		}
		self.services.shell.tab_ready(self.id, session);
		Dirty::CONTENT | Dirty::TABS
	}

	/// Removes a tab whose content could not be read and reports the failure.
	pub(crate) fn apply_load_failed(&mut self, session: SessionId, token: u64, locator: Locator, error: StorageError) -> Dirty {
		if !self.accepts_completion(session, token) {
			return Dirty::NONE;
		}
		if let Ok(mut removed) = self.tabs.remove(session) {
			removed.cancel_load();
		}
		self.forget_pending(session);

		let error = EditorError::ContentLoadFailed { locator, source: error };
		tracing::warn!(document = %self.id, %session, %error, "Content load failed, removing tab");
		self.services.shell.report_error(self.id, &error);

		if self.tabs.is_empty() {
			self.close_internal();
		}
		Dirty::TABS
	}

	/// Returns true if a completion for `session` at `token` is still wanted.
	fn accepts_completion(&self, session: SessionId, token: u64) -> bool {
		if self.is_closed() {
			tracing::debug!(document = %self.id, %session, "Discarding completion for closed document");
			return false;
		}
		match self.tabs.get(session).and_then(|tab| tab.pending_load()) {
			Some(pending) if pending == token => true,
			Some(pending) => {
				tracing::debug!(document = %self.id, %session, token, pending, "Ignoring stale content load");
				false
			}
			None => {
				tracing::debug!(document = %self.id, %session, token, "Discarding completion for a tab that is gone or already bound");
				false
			}
		}
	}
}
