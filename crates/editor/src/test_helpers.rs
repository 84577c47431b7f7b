//! Recording collaborators for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use quire_theme::Theme;
use ropey::Rope;
use tokio::sync::watch;

use crate::{DocumentId, EditorError, Locator, MemoryStorage, Renderer, SessionId, Shell, Storage, StorageError};

/// Signal observed by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
	Content(SessionId, String),
	Theme(SessionId, String),
	Closed(SessionId),
}

/// Renderer that records every signal in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
	events: Mutex<Vec<RenderEvent>>,
}

impl RecordingRenderer {
	pub fn events(&self) -> Vec<RenderEvent> {
		self.events.lock().clone()
	}

	/// Number of content binds delivered for `session`.
	pub fn content_binds(&self, session: SessionId) -> usize {
		self.events
			.lock()
			.iter()
			.filter(|e| matches!(e, RenderEvent::Content(s, _) if *s == session))
			.count()
	}
}

impl Renderer for RecordingRenderer {
	fn content_replaced(&self, session: SessionId, content: &Rope) {
		self.events.lock().push(RenderEvent::Content(session, content.to_string()));
	}

	fn theme_applied(&self, session: SessionId, theme: &Theme) {
		self.events.lock().push(RenderEvent::Theme(session, theme.name.clone()));
	}

	fn session_closed(&self, session: SessionId) {
		self.events.lock().push(RenderEvent::Closed(session));
	}
}

/// Notification observed by [`RecordingShell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
	TabReady(DocumentId, SessionId),
	DocumentClosed(DocumentId),
	Error(DocumentId, String),
}

/// Shell that records every notification in order.
#[derive(Debug, Default)]
pub struct RecordingShell {
	events: Mutex<Vec<ShellEvent>>,
}

impl RecordingShell {
	pub fn events(&self) -> Vec<ShellEvent> {
		self.events.lock().clone()
	}

	pub fn errors(&self) -> Vec<String> {
		self.events
			.lock()
			.iter()
			.filter_map(|e| match e {
				ShellEvent::Error(_, message) => Some(message.clone()),
				_ => None,
			})
			.collect()
	}

	pub fn closed(&self) -> Vec<DocumentId> {
		self.events
			.lock()
			.iter()
			.filter_map(|e| match e {
				ShellEvent::DocumentClosed(id) => Some(*id),
				_ => None,
			})
			.collect()
	}
}

impl Shell for RecordingShell {
	fn tab_ready(&self, document: DocumentId, session: SessionId) {
		self.events.lock().push(ShellEvent::TabReady(document, session));
	}

	fn document_closed(&self, document: DocumentId) {
		self.events.lock().push(ShellEvent::DocumentClosed(document));
	}

	fn report_error(&self, document: DocumentId, error: &EditorError) {
		self.events.lock().push(ShellEvent::Error(document, error.to_string()));
	}
}

/// Memory storage whose reads block until [`GatedStorage::release`].
#[derive(Debug)]
pub struct GatedStorage {
	inner: MemoryStorage,
	open: watch::Sender<bool>,
	started: AtomicUsize,
	completed: AtomicUsize,
}

impl Default for GatedStorage {
	fn default() -> Self {
		Self {
			inner: MemoryStorage::new(),
			open: watch::Sender::new(false),
			started: AtomicUsize::new(0),
			completed: AtomicUsize::new(0),
		}
	}
}

impl GatedStorage {
	pub fn insert(&self, locator: impl Into<Locator>, content: impl Into<Vec<u8>>) {
		self.inner.insert(locator, content);
	}

	/// Lets every pending and future read complete.
	pub fn release(&self) {
		self.open.send_replace(true);
	}

	pub fn started(&self) -> usize {
		self.started.load(Ordering::SeqCst)
	}

	pub fn completed(&self) -> usize {
		self.completed.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl Storage for GatedStorage {
	async fn read(&self, locator: &Locator) -> Result<Vec<u8>, StorageError> {
		self.started.fetch_add(1, Ordering::SeqCst);
		let mut open = self.open.subscribe();
		let released = open.wait_for(|open| *open).await.is_ok();
		if !released {
			return Err(StorageError::NotFound);
		}
		let result = self.inner.read(locator).await;
		self.completed.fetch_add(1, Ordering::SeqCst);
		result
	}
}
