//! Ordered tab storage with a single active handle.
//!
//! # Invariants
//!
//! - Insertion order is display order.
//! - `active` is `Some(i)` with `i < len` whenever the collection is
//!   non-empty, and `None` when it is empty.
//! - Exactly the session at `active` has its active flag set.

use crate::{EditorError, EditorSession, Result, SessionId};

/// Sessions of one document, in display order.
#[derive(Debug, Default)]
pub struct TabCollection {
	sessions: Vec<EditorSession>,
	active: Option<usize>,
}

impl TabCollection {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `session` and makes it the active session. Returns its index.
	pub fn add_session(&mut self, mut session: EditorSession) -> usize {
		if let Some(previous) = self.active.and_then(|i| self.sessions.get_mut(i)) {
			previous.set_active(false);
		}
		session.set_active(true);
		self.sessions.push(session);

		let index = self.sessions.len() - 1;
		self.active = Some(index);
		debug_assert!(self.invariants_hold());
		index
	}

	/// Removes the active session.
	///
	/// Activation moves to the predecessor, or to the new first session when
	/// the removed one was first. An empty collection stays empty.
	pub fn remove_active(&mut self) -> Result<EditorSession> {
		let index = self.active.ok_or_else(|| EditorError::NotFound("active tab".into()))?;
		Ok(self.remove_at(index))
	}

	/// Removes a session by ID, keeping the active session when it is another.
	pub fn remove(&mut self, id: SessionId) -> Result<EditorSession> {
		let index = self.position(id).ok_or_else(|| not_found(id))?;
		Ok(self.remove_at(index))
	}

	fn remove_at(&mut self, index: usize) -> EditorSession {
		let mut removed = self.sessions.remove(index);
		removed.set_active(false);

		self.active = match self.active {
			_ if self.sessions.is_empty() => None,
			Some(active) if active == index => Some(index.saturating_sub(1)),
			Some(active) if active > index => Some(active - 1),
			other => other,
		};
		if let Some(active) = self.active {
			self.sessions[active].set_active(true);
		}

		debug_assert!(self.invariants_hold());
		removed
	}

	/// Drops every session.
	pub(crate) fn clear(&mut self) {
		self.active = None;
		self.sessions.clear();
	}

	/// Returns the active session, or `NotFound` when the collection is empty.
	pub fn active(&self) -> Result<&EditorSession> {
		self.active
			.map(|i| &self.sessions[i])
			.ok_or_else(|| EditorError::NotFound("active tab".into()))
	}

	pub fn active_mut(&mut self) -> Result<&mut EditorSession> {
		match self.active {
			Some(i) => Ok(&mut self.sessions[i]),
			None => Err(EditorError::NotFound("active tab".into())),
		}
	}

	pub fn active_index(&self) -> Option<usize> {
		self.active
	}

	pub fn active_id(&self) -> Option<SessionId> {
		self.active.map(|i| self.sessions[i].id())
	}

	/// Activates the session with `id`.
	pub fn select(&mut self, id: SessionId) -> Result<usize> {
		let index = self.position(id).ok_or_else(|| not_found(id))?;
		self.activate(index);
		Ok(index)
	}

	/// Activates the next session, wrapping around.
	pub fn select_next(&mut self) -> Option<SessionId> {
		let active = self.active?;
		self.activate((active + 1) % self.sessions.len());
		self.active_id()
	}

	/// Activates the previous session, wrapping around.
	pub fn select_previous(&mut self) -> Option<SessionId> {
		let active = self.active?;
		let len = self.sessions.len();
		self.activate((active + len - 1) % len);
		self.active_id()
	}

	fn activate(&mut self, index: usize) {
		if let Some(previous) = self.active.and_then(|i| self.sessions.get_mut(i)) {
			previous.set_active(false);
		}
		self.sessions[index].set_active(true);
		self.active = Some(index);
	}

	pub fn get(&self, id: SessionId) -> Option<&EditorSession> {
		self.sessions.iter().find(|s| s.id() == id)
	}

	pub fn get_mut(&mut self, id: SessionId) -> Option<&mut EditorSession> {
		self.sessions.iter_mut().find(|s| s.id() == id)
	}

	pub fn position(&self, id: SessionId) -> Option<usize> {
		self.sessions.iter().position(|s| s.id() == id)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, EditorSession> {
		self.sessions.iter()
	}

	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, EditorSession> {
		self.sessions.iter_mut()
	}

	pub fn ids(&self) -> Vec<SessionId> {
		self.sessions.iter().map(EditorSession::id).collect()
	}

	pub fn len(&self) -> usize {
		self.sessions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sessions.is_empty()
	}

	/// Checks the active-handle invariants listed in the module docs.
	pub fn invariants_hold(&self) -> bool {
		let flagged = self.sessions.iter().filter(|s| s.is_active()).count();
		match self.active {
			None => self.sessions.is_empty() && flagged == 0,
			Some(i) => i < self.sessions.len() && flagged == 1 && self.sessions[i].is_active(),
		}
	}
}

impl<'a> IntoIterator for &'a TabCollection {
	type Item = &'a EditorSession;
	type IntoIter = std::slice::Iter<'a, EditorSession>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

fn not_found(id: SessionId) -> EditorError {
	EditorError::NotFound(format!("tab {id}"))
}
