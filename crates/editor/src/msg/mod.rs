//! Message bus for background load completions.
//!
//! Load tasks send [`EditorMsg`] variants back to the coordination thread.
//! The shell loop drains messages and applies them to the [`Workspace`],
//! aggregating [`Dirty`] flags to decide what to redraw.
//!
//! ```text
//! Load task ─┐
//!            ├──► EditorMsg ──► Workspace::drain_messages() ──► Document state update
//! Load task ─┘
//! ```
//!
//! [`Workspace`]: crate::Workspace

mod dirty;
mod io;

pub use dirty::Dirty;
pub use io::IoMsg;
use tokio::sync::mpsc;

use crate::Workspace;

/// Channel sender for background tasks.
pub type MsgSender = mpsc::UnboundedSender<EditorMsg>;

/// Channel receiver for the coordination thread.
pub type MsgReceiver = mpsc::UnboundedReceiver<EditorMsg>;

/// Creates a new message channel pair.
pub fn channel() -> (MsgSender, MsgReceiver) {
	mpsc::unbounded_channel()
}

/// Top-level message enum dispatched to workspace state.
#[derive(Debug)]
pub enum EditorMsg {
	Io(IoMsg),
}

impl EditorMsg {
	/// Applies this message to the workspace, returning dirty flags.
	pub fn apply(self, workspace: &mut Workspace) -> Dirty {
		match self {
			Self::Io(msg) => msg.apply(workspace),
		}
	}
}

impl From<IoMsg> for EditorMsg {
	fn from(msg: IoMsg) -> Self {
		Self::Io(msg)
	}
}

/// Sends a message, ignoring a closed receiver.
pub(crate) fn send(tx: &MsgSender, msg: impl Into<EditorMsg>) {
	if tx.send(msg.into()).is_err() {
		tracing::trace!("message receiver dropped");
	}
}
