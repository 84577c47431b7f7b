//! Theme state of one document, shared with its registry subscription.
//!
//! The registry calls [`DocumentTheme::apply`] on whichever thread activates
//! a theme. Sessions are created under the same lock, so a session is either
//! created with the new theme or rethemed by the activation, never missed.

use std::sync::{Arc, Weak};

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use quire_theme::Theme;

use crate::{DocumentId, EditorSession, Locator, Renderer, SessionId};

pub(crate) struct DocumentTheme {
	document: DocumentId,
	state: Mutex<State>,
	renderer: Arc<dyn Renderer>,
}

struct State {
	theme: Arc<Theme>,
	/// Sessions in creation order, which is also display order.
	sessions: Vec<(SessionId, Weak<ArcSwap<Theme>>)>,
}

impl DocumentTheme {
	pub fn new(document: DocumentId, theme: Arc<Theme>, renderer: Arc<dyn Renderer>) -> Self {
		Self {
			document,
			state: Mutex::new(State {
				theme,
				sessions: Vec::new(),
			}),
			renderer,
		}
	}

	pub fn current(&self) -> Arc<Theme> {
		self.state.lock().theme.clone()
	}

	/// Creates a session on the document theme and tracks it.
	pub fn session(&self, id: SessionId, locator: Option<Locator>) -> EditorSession {
		let mut state = self.state.lock();
		let session = EditorSession::new(id, locator, state.theme.clone(), self.renderer.clone());
		state.sessions.push((id, session.theme_cell()));
		session
	}

	/// Makes `theme` the document theme and pushes it into every live session.
	/// Returns the number of sessions rethemed.
	pub fn apply(&self, theme: &Arc<Theme>) -> usize {
		let mut state = self.state.lock();
		state.theme = theme.clone();
		state.sessions.retain(|(_, cell)| cell.strong_count() > 0);

		let mut applied = 0;
		for (session, cell) in &state.sessions {
			let Some(cell) = cell.upgrade() else { continue };
			cell.store(theme.clone());
			self.renderer.theme_applied(*session, theme);
			applied += 1;
		}
		tracing::debug!(document = %self.document, theme = %theme.name, sessions = applied, "Applied theme");
		applied
	}
}
