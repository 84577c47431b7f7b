//! Renderer collaborator.

use quire_theme::Theme;
use ropey::Rope;

use crate::SessionId;

/// Receives per-session redraw signals. The coordinator never renders itself.
pub trait Renderer: Send + Sync {
	/// A session's content buffer was (re)bound.
	fn content_replaced(&self, session: SessionId, content: &Rope);

	/// A session received a new theme snapshot.
	fn theme_applied(&self, session: SessionId, theme: &Theme);

	/// A session was destroyed.
	fn session_closed(&self, _session: SessionId) {}
}

/// Renderer that ignores every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
	fn content_replaced(&self, _session: SessionId, _content: &Rope) {}

	fn theme_applied(&self, _session: SessionId, _theme: &Theme) {}
}
