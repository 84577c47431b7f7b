//! Document coordination for a multi-tab editor.
//!
//! A [`Workspace`] owns every open [`Document`]. Each document owns a
//! [`TabCollection`] of [`EditorSession`]s with exactly one active session,
//! keeps them on a shared theme, and materializes file content through the
//! [`Storage`] collaborator without blocking the coordination thread.
//!
//! # Architecture
//!
//! ```text
//! Shell command ──► Workspace ──► Document ──► TabCollection ──► EditorSession
//!                                    │                                ▲
//!                                    └─ kick load ─► Storage::read    │
//!                                                      │              │
//!                        drain_messages() ◄── IoMsg ◄──┘      bind_content
//! ```
//!
//! Loads are cancelled when their session or document goes away, and
//! completions that arrive afterwards are discarded by token.

mod document;
mod error;
mod ids;
mod locator;
pub mod msg;
mod render;
mod services;
mod session;
mod shell;
mod storage;
mod tabs;
#[doc(hidden)]
pub mod test_helpers;
mod workspace;

pub use document::{CloseOutcome, Document, DocumentState};
pub use error::{EditorError, Result};
pub use ids::{DocumentId, SessionId};
pub use locator::Locator;
pub use render::{NullRenderer, Renderer};
pub use session::EditorSession;
pub use shell::{NullShell, Shell};
pub use storage::{FsStorage, MemoryStorage, Storage, StorageError};
pub use tabs::TabCollection;
pub use workspace::Workspace;
