//! Root object of the coordination thread.
//!
//! [`Workspace`] owns every open document, the collaborators they share and
//! the receiving end of the load message channel. Every open document is
//! subscribed to the theme registry, so an activation from
//! [`Workspace::select_theme`] or directly on the registry reaches every
//! session before it returns.

use std::sync::Arc;

use indexmap::IndexMap;
use quire_theme::{Theme, ThemeRegistry};

use crate::ids::IdGen;
use crate::msg::{self, Dirty, EditorMsg, MsgReceiver};
use crate::services::Services;
use crate::{
	CloseOutcome, Document, DocumentId, EditorError, Locator, NullRenderer, NullShell, Renderer, Result, SessionId, Shell,
	Storage,
};

/// Open documents plus their shared collaborators.
pub struct Workspace {
	pub(crate) services: Services,
	pub(crate) documents: IndexMap<DocumentId, Document>,
	msg_rx: MsgReceiver,
	/// Registry revision last reported as [`Dirty::THEME`].
	theme_revision: u64,
}

impl std::fmt::Debug for Workspace {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Workspace")
			.field("documents", &self.documents)
			.field("theme_revision", &self.theme_revision)
			.finish_non_exhaustive()
	}
}

impl Workspace {
	/// Creates an empty workspace with a logging shell and no renderer.
	pub fn new(registry: Arc<ThemeRegistry>, storage: Arc<dyn Storage>) -> Self {
		let (msg_tx, msg_rx) = msg::channel();
		let theme_revision = registry.revision();
		Self {
			services: Services {
				registry,
				storage,
				shell: Arc::new(NullShell),
				renderer: Arc::new(NullRenderer),
				msg_tx,
				ids: IdGen::default(),
			},
			documents: IndexMap::new(),
			msg_rx,
			theme_revision,
		}
	}

	/// Sets the shell collaborator. Applies to documents opened afterwards.
	pub fn with_shell(mut self, shell: Arc<dyn Shell>) -> Self {
		debug_assert!(self.documents.is_empty(), "collaborators must be set before opening documents");
		self.services.shell = shell;
		self
	}

	/// Sets the renderer collaborator. Applies to documents opened afterwards.
	pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
		debug_assert!(self.documents.is_empty(), "collaborators must be set before opening documents");
		self.services.renderer = renderer;
		self
	}

	pub fn registry(&self) -> &Arc<ThemeRegistry> {
		&self.services.registry
	}

	/// Creates a document and opens its first tab.
	///
	/// With a locator the document starts in `Loading`; without one it is
	/// immediately `Active` with an untitled tab.
	pub fn open_document(&mut self, locator: Option<Locator>) -> Result<DocumentId> {
		let id = self.services.ids.document();
		let mut document = Document::new(id, locator.clone(), self.services.clone());
		document.open_new_tab(locator)?;
		tracing::debug!(document = %id, title = %document.title(), "Opened document");
		self.documents.insert(id, document);
		Ok(id)
	}

	/// Opens a tab in an existing document.
	pub fn open_tab(&mut self, document: DocumentId, locator: Option<Locator>) -> Result<SessionId> {
		self.document_mut(document)?.open_new_tab(locator)
	}

	/// Closes the active tab of a document.
	pub fn close_current_tab(&mut self, document: DocumentId) -> Result<CloseOutcome> {
		self.document_mut(document)?.close_current_tab()
	}

	/// Closes a document with all of its tabs.
	pub fn close_document(&mut self, document: DocumentId) -> Result<()> {
		self.document_mut(document)?.close()
	}

	/// Looks up a document. Closed documents stay visible until pruned.
	pub fn document(&self, id: DocumentId) -> Result<&Document> {
		self.documents.get(&id).ok_or_else(|| not_found(id))
	}

	pub fn document_mut(&mut self, id: DocumentId) -> Result<&mut Document> {
		self.documents.get_mut(&id).ok_or_else(|| not_found(id))
	}

	/// Documents in open order.
	pub fn documents(&self) -> impl Iterator<Item = &Document> {
		self.documents.values()
	}

	/// IDs of documents that are not closed, in open order.
	pub fn open_documents(&self) -> Vec<DocumentId> {
		self.documents.values().filter(|d| !d.is_closed()).map(Document::id).collect()
	}

	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}

	/// Drops closed documents. Returns the IDs removed.
	pub fn prune_closed(&mut self) -> Vec<DocumentId> {
		let mut removed = Vec::new();
		self.documents.retain(|id, doc| {
			let keep = !doc.is_closed();
			if !keep {
				removed.push(*id);
			}
			keep
		});
		if !removed.is_empty() {
			tracing::trace!(?removed, "Pruned closed documents");
		}
		removed
	}

	/// Activates a registry theme. Every open document has it when this
	/// returns.
	pub fn select_theme(&mut self, name: &str) -> Result<Arc<Theme>> {
		let theme = self.services.registry.resolve(name)?;
		self.theme_revision = self.services.registry.set_active(theme.clone());
		tracing::debug!(theme = %theme.name, documents = self.open_documents().len(), "Selected theme");
		Ok(theme)
	}

	/// Reports an activation made directly on the registry since the last
	/// call. The documents already carry the theme.
	pub fn take_theme_change(&mut self) -> Dirty {
		let revision = self.services.registry.revision();
		if revision == self.theme_revision {
			return Dirty::NONE;
		}
		self.theme_revision = revision;
		Dirty::THEME
	}

	/// Applies every queued message without waiting.
	pub fn drain_messages(&mut self) -> Dirty {
		let mut dirty = self.take_theme_change();
		while let Ok(msg) = self.msg_rx.try_recv() {
			dirty |= self.apply(msg);
		}
		dirty
	}

	/// Waits for the next message and applies it.
	pub async fn next_message(&mut self) -> Dirty {
		match self.msg_rx.recv().await {
			Some(msg) => self.apply(msg),
			None => Dirty::NONE,
		}
	}

	/// Applies one message.
	pub fn apply(&mut self, msg: EditorMsg) -> Dirty {
		msg.apply(self)
	}
}

fn not_found(id: DocumentId) -> EditorError {
	EditorError::NotFound(format!("document {id}"))
}
