//! A single tab: one content buffer rendered with one theme snapshot.

use std::sync::{Arc, Weak};

use arc_swap::ArcSwap;
use quire_theme::Theme;
use quire_worker::LoadToken;
use ropey::Rope;

use crate::{Locator, Renderer, SessionId};

/// Title shown for sessions without a locator.
pub const UNTITLED: &str = "Untitled";

/// One editable unit of a document.
///
/// A session opened from a locator starts in the loading sub-state with an
/// empty buffer and a pending [`LoadToken`]. Dropping the session cancels the
/// pending load.
pub struct EditorSession {
	id: SessionId,
	locator: Option<Locator>,
	content: Rope,
	/// Shared with the owning document's theme subscription.
	theme: Arc<ArcSwap<Theme>>,
	active: bool,
	pending: Option<LoadToken>,
	content_version: u64,
	renderer: Arc<dyn Renderer>,
}

impl std::fmt::Debug for EditorSession {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EditorSession")
			.field("id", &self.id)
			.field("locator", &self.locator)
			.field("len_chars", &self.content.len_chars())
			.field("theme", &self.theme.load().name)
			.field("active", &self.active)
			.field("loading", &self.is_loading())
			.field("content_version", &self.content_version)
			.finish()
	}
}

impl EditorSession {
	/// Creates an inactive session with an empty, unbound buffer.
	///
	/// The theme is applied immediately so the renderer never sees a session
	/// without one.
	pub fn new(id: SessionId, locator: Option<Locator>, theme: Arc<Theme>, renderer: Arc<dyn Renderer>) -> Self {
		renderer.theme_applied(id, &theme);
		Self {
			id,
			locator,
			content: Rope::new(),
			theme: Arc::new(ArcSwap::new(theme)),
			active: false,
			pending: None,
			content_version: 0,
			renderer,
		}
	}

	/// Puts the session in the loading sub-state.
	pub(crate) fn begin_load(&mut self, token: LoadToken) {
		if let Some(previous) = self.pending.replace(token) {
			previous.cancel();
		}
	}

	/// Attaches content to the buffer, replacing whatever was there.
	///
	/// `None` binds an empty buffer. Completes any pending load.
	pub fn bind_content(&mut self, content: Option<Rope>) {
		self.pending = None;
		self.content = content.unwrap_or_default();
		self.content_version += 1;
		tracing::trace!(session = %self.id, len = self.content.len_bytes(), version = self.content_version, "session.bind_content");
		self.renderer.content_replaced(self.id, &self.content);
	}

	/// Replaces the theme snapshot.
	pub fn apply_theme(&mut self, theme: Arc<Theme>) {
		self.theme.store(theme.clone());
		self.renderer.theme_applied(self.id, &theme);
	}

	/// Handle the owning document uses to retheme this session.
	pub(crate) fn theme_cell(&self) -> Weak<ArcSwap<Theme>> {
		Arc::downgrade(&self.theme)
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Sets the active flag. Exclusivity is enforced by the owning collection.
	pub fn set_active(&mut self, active: bool) {
		self.active = active;
	}

	/// Returns true while content is still being materialized.
	pub fn is_loading(&self) -> bool {
		self.pending.is_some()
	}

	/// Generation of the outstanding load, if any.
	pub fn pending_load(&self) -> Option<u64> {
		self.pending.as_ref().map(LoadToken::generation)
	}

	/// Cancels the outstanding load. Returns false if nothing was pending.
	pub fn cancel_load(&mut self) -> bool {
		match self.pending.take() {
			Some(token) => {
				token.cancel();
				true
			}
			None => false,
		}
	}

	pub fn id(&self) -> SessionId {
		self.id
	}

	pub fn locator(&self) -> Option<&Locator> {
		self.locator.as_ref()
	}

	pub fn title(&self) -> String {
		self.locator.as_ref().map_or_else(|| UNTITLED.to_string(), Locator::title)
	}

	pub fn content(&self) -> &Rope {
		&self.content
	}

	pub fn text(&self) -> String {
		self.content.to_string()
	}

	/// Current theme snapshot.
	pub fn theme(&self) -> Arc<Theme> {
		self.theme.load_full()
	}

	/// Number of times content has been bound.
	pub fn content_version(&self) -> u64 {
		self.content_version
	}
}

impl Drop for EditorSession {
	fn drop(&mut self) {
		if self.cancel_load() {
			tracing::debug!(session = %self.id, "Cancelled pending load of dropped session");
		}
		self.renderer.session_closed(self.id);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_helpers::{RecordingRenderer, RenderEvent};

	fn session(renderer: &Arc<RecordingRenderer>) -> EditorSession {
		EditorSession::new(SessionId(1), None, Arc::new(Theme::new("base")), renderer.clone())
	}

	#[test]
	fn theme_is_applied_before_content() {
		let renderer = Arc::new(RecordingRenderer::default());
		let mut s = session(&renderer);
		s.apply_theme(Arc::new(Theme::new("next")));
		s.bind_content(Some(Rope::from_str("x")));

		assert_eq!(
			renderer.events(),
			vec![
				RenderEvent::Theme(SessionId(1), "base".into()),
				RenderEvent::Theme(SessionId(1), "next".into()),
				RenderEvent::Content(SessionId(1), "x".into()),
			]
		);
	}

	#[test]
	fn rebinding_overwrites_and_signals_each_time() {
		let renderer = Arc::new(RecordingRenderer::default());
		let mut s = session(&renderer);
		s.bind_content(None);
		assert_eq!(s.text(), "");
		s.bind_content(Some(Rope::from_str("second")));

		assert_eq!(s.text(), "second");
		assert_eq!(s.content_version(), 2);
		assert_eq!(renderer.content_binds(SessionId(1)), 2);
	}

	#[test]
	fn binding_completes_pending_load() {
		let renderer = Arc::new(RecordingRenderer::default());
		let mut s = session(&renderer);
		let token = LoadToken::new(4);
		s.begin_load(token.clone());
		assert!(s.is_loading());
		assert_eq!(s.pending_load(), Some(4));

		s.bind_content(Some(Rope::from_str("done")));
		assert!(!s.is_loading());
		assert!(!token.is_cancelled());
	}

	#[test]
	fn dropping_a_loading_session_cancels_its_load() {
		let renderer = Arc::new(RecordingRenderer::default());
		let mut s = session(&renderer);
		let token = LoadToken::new(1);
		s.begin_load(token.clone());
		drop(s);

		assert!(token.is_cancelled());
		assert_eq!(renderer.events().last(), Some(&RenderEvent::Closed(SessionId(1))));
	}

	#[test]
	fn untitled_session_has_untitled_title() {
		let renderer = Arc::new(RecordingRenderer::default());
		assert_eq!(session(&renderer).title(), UNTITLED);
	}
}
