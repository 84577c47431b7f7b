//! Common utilities for editor integration tests.

use std::sync::Arc;
use std::time::Duration;

use quire_editor::msg::Dirty;
use quire_editor::test_helpers::{RecordingRenderer, RecordingShell};
use quire_editor::{Storage, Workspace};
use quire_theme::ThemeRegistry;

/// Workspace wired to recording collaborators.
pub struct TestWorkspace {
	pub ws: Workspace,
	pub registry: Arc<ThemeRegistry>,
	pub shell: Arc<RecordingShell>,
	pub renderer: Arc<RecordingRenderer>,
}

pub fn workspace(storage: Arc<dyn Storage>) -> TestWorkspace {
	let _ = tracing_subscriber::fmt::try_init();
	let registry = Arc::new(ThemeRegistry::new());
	let shell = Arc::new(RecordingShell::default());
	let renderer = Arc::new(RecordingRenderer::default());
	let ws = Workspace::new(registry.clone(), storage)
		.with_shell(shell.clone())
		.with_renderer(renderer.clone());
	TestWorkspace {
		ws,
		registry,
		shell,
		renderer,
	}
}

/// Waits for one load completion and applies it.
pub async fn settle_one(ws: &mut Workspace) -> Dirty {
	tokio::time::timeout(Duration::from_secs(5), ws.next_message())
		.await
		.expect("timed out waiting for load completion")
}
