//! Document coordinator: owns a tab collection and drives its lifecycle.
//!
//! # State machine
//!
//! ```text
//! Uninitialized ──open_new_tab(locator)──► Loading ──content bound──► Active ──last tab closed──► Closed
//!       │                                     │                          ▲
//!       └──────────open_new_tab(None)─────────┴──────────────────────────┘
//! ```
//!
//! `Closed` is terminal: every operation afterwards fails with
//! [`EditorError::InvalidState`]. A document never stays visible without
//! tabs; closing or failing its last tab closes it.
//!
//! While open, a document is subscribed to the theme registry: an activation
//! reaches every session before `set_active` returns.

use std::fmt;
use std::sync::Arc;

use quire_theme::{SubscriptionId, Theme, ThemeId};
use quire_worker::{LoadClock, LoadToken};

use self::theme::DocumentTheme;
use crate::services::Services;
use crate::session::UNTITLED;
use crate::{DocumentId, EditorError, EditorSession, Locator, Result, SessionId, TabCollection};

mod load;
mod theme;

/// Lifecycle state of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentState {
	/// Created, no tab opened yet.
	Uninitialized,
	/// The first tab's content is still being read.
	Loading,
	/// At least one tab is materialized.
	Active,
	/// Terminal.
	Closed,
}

impl fmt::Display for DocumentState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Uninitialized => "uninitialized",
			Self::Loading => "loading",
			Self::Active => "active",
			Self::Closed => "closed",
		})
	}
}

/// Result of [`Document::close_current_tab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
	/// The tab closed and another tab is now active.
	TabClosed(SessionId),
	/// The tab was the last one; the document closed with it.
	DocumentClosed(SessionId),
}

/// The first load requested for a document, until it resolves.
#[derive(Debug)]
struct PendingContent {
	session: SessionId,
	locator: Locator,
}

/// One opened group of tabs.
pub struct Document {
	id: DocumentId,
	locator: Option<Locator>,
	pending: Option<PendingContent>,
	theme: Arc<DocumentTheme>,
	subscription: Option<SubscriptionId>,
	state: DocumentState,
	tabs: TabCollection,
	loads: LoadToken,
	load_clock: LoadClock,
	services: Services,
}

impl fmt::Debug for Document {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Document")
			.field("id", &self.id)
			.field("locator", &self.locator)
			.field("pending", &self.pending)
			.field("theme", &self.theme.current().name)
			.field("state", &self.state)
			.field("tabs", &self.tabs)
			.finish_non_exhaustive()
	}
}

impl Document {
	pub(crate) fn new(id: DocumentId, locator: Option<Locator>, services: Services) -> Self {
		let theme = Arc::new(DocumentTheme::new(id, services.registry.active(), services.renderer.clone()));
		let target = Arc::downgrade(&theme);
		let subscription = services.registry.subscribe_current(move |active| {
			if let Some(theme) = target.upgrade() {
				theme.apply(active);
			}
		});
		Self {
			id,
			locator,
			pending: None,
			theme,
			subscription: Some(subscription),
			state: DocumentState::Uninitialized,
			tabs: TabCollection::new(),
			loads: LoadToken::new(0),
			load_clock: LoadClock::new(),
			services,
		}
	}

	/// Opens a tab and makes it active.
	///
	/// Without a locator the tab is bound to an empty buffer immediately.
	/// With one, the tab is added in the loading sub-state and its content is
	/// bound once the storage read completes (see [`Workspace::drain_messages`]).
	///
	/// [`Workspace::drain_messages`]: crate::Workspace::drain_messages
	pub fn open_new_tab(&mut self, locator: Option<Locator>) -> Result<SessionId> {
		self.ensure_open()?;

		let id = self.services.ids.session();
		let mut session = self.theme.session(id, locator.clone());

		match locator {
			None => {
				session.bind_content(None);
				self.tabs.add_session(session);
				self.state = DocumentState::Active;
				tracing::debug!(document = %self.id, session = %id, "Opened untitled tab");
				self.services.shell.tab_ready(self.id, id);
			}
			Some(locator) => {
				let token = self.loads.child(self.load_clock.tick());
				session.begin_load(token.clone());
				self.tabs.add_session(session);
				if self.state == DocumentState::Uninitialized {
					self.state = DocumentState::Loading;
					self.pending = Some(PendingContent {
						session: id,
						locator: locator.clone(),
					});
				}
				tracing::debug!(document = %self.id, session = %id, %locator, generation = token.generation(), "Opened tab, loading content");
				self.kick_content_load(id, locator, token);
			}
		}
		Ok(id)
	}

	/// Closes the active tab, cancelling its load if it is still pending.
	///
	/// Closing the last tab closes the document.
	pub fn close_current_tab(&mut self) -> Result<CloseOutcome> {
		self.ensure_open()?;
		let removed = self.tabs.remove_active()?;
		let session = removed.id();
		self.forget_pending(session);
		if removed.is_loading() {
			tracing::debug!(document = %self.id, %session, "Closing tab before its content loaded");
		}
		drop(removed);

		if self.tabs.is_empty() {
			self.close_internal();
			return Ok(CloseOutcome::DocumentClosed(session));
		}
		tracing::debug!(document = %self.id, %session, active = ?self.tabs.active_id(), "Closed tab");
		Ok(CloseOutcome::TabClosed(session))
	}

	/// Closes the document and every tab in it.
	pub fn close(&mut self) -> Result<()> {
		self.ensure_open()?;
		self.close_internal();
		Ok(())
	}

	fn close_internal(&mut self) {
		self.state = DocumentState::Closed;
		self.pending = None;
		self.loads.cancel();
		self.unsubscribe();
		self.tabs.clear();
		tracing::debug!(document = %self.id, "Document closed");
		self.services.shell.document_closed(self.id);
	}

	/// Returns the active session, or `None` before the first tab exists.
	pub fn current_editor(&self) -> Result<Option<&EditorSession>> {
		self.ensure_open()?;
		Ok(self.tabs.active().ok())
	}

	pub fn current_editor_mut(&mut self) -> Result<Option<&mut EditorSession>> {
		self.ensure_open()?;
		Ok(self.tabs.active_mut().ok())
	}

	/// Applies `theme` to every tab in display order.
	///
	/// A document may run a theme other than the active one until the next
	/// registry activation.
	pub fn change_theme(&mut self, theme: Arc<Theme>) -> Result<()> {
		self.ensure_open()?;
		self.theme.apply(&theme);
		Ok(())
	}

	/// Resolves `name` through the registry and applies it.
	pub fn change_theme_named(&mut self, name: &str) -> Result<Arc<Theme>> {
		self.ensure_open()?;
		let theme = self.services.registry.resolve(name)?;
		self.change_theme(theme.clone())?;
		Ok(theme)
	}

	/// Activates the tab with `id`.
	pub fn select_tab(&mut self, id: SessionId) -> Result<()> {
		self.ensure_open()?;
		self.tabs.select(id).map(drop)
	}

	/// Activates the next tab, wrapping around.
	pub fn next_tab(&mut self) -> Result<Option<SessionId>> {
		self.ensure_open()?;
		Ok(self.tabs.select_next())
	}

	/// Activates the previous tab, wrapping around.
	pub fn previous_tab(&mut self) -> Result<Option<SessionId>> {
		self.ensure_open()?;
		Ok(self.tabs.select_previous())
	}

	pub fn id(&self) -> DocumentId {
		self.id
	}

	pub fn locator(&self) -> Option<&Locator> {
		self.locator.as_ref()
	}

	pub fn title(&self) -> String {
		self.locator.as_ref().map_or_else(|| UNTITLED.to_string(), Locator::title)
	}

	pub fn state(&self) -> DocumentState {
		self.state
	}

	pub fn is_closed(&self) -> bool {
		self.state == DocumentState::Closed
	}

	/// Locator of the first load, while it is outstanding.
	pub fn pending_content(&self) -> Option<&Locator> {
		self.pending.as_ref().map(|p| &p.locator)
	}

	/// The theme most recently applied to this document.
	pub fn theme(&self) -> Arc<Theme> {
		self.theme.current()
	}

	pub fn theme_id(&self) -> ThemeId {
		self.theme.current().id()
	}

	pub fn tabs(&self) -> &TabCollection {
		&self.tabs
	}

	pub fn tab(&self, id: SessionId) -> Option<&EditorSession> {
		self.tabs.get(id)
	}

	fn ensure_open(&self) -> Result<()> {
		if self.is_closed() {
			return Err(EditorError::InvalidState {
				document: self.id,
				state: self.state,
			});
		}
		Ok(())
	}

	fn unsubscribe(&mut self) {
		if let Some(subscription) = self.subscription.take() {
			self.services.registry.unsubscribe(subscription);
		}
	}

	fn forget_pending(&mut self, session: SessionId) {
		if self.pending.as_ref().is_some_and(|p| p.session == session) {
			self.pending = None;
		}
	}
}

impl Drop for Document {
	fn drop(&mut self) {
		self.unsubscribe();
	}
}
