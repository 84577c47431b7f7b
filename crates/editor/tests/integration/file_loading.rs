use std::sync::Arc;

use pretty_assertions::assert_eq;
use quire_editor::test_helpers::ShellEvent;
use quire_editor::{DocumentState, EditorError, FsStorage, Locator, MemoryStorage};

use crate::common::{settle_one, workspace};

#[tokio::test(flavor = "current_thread")]
async fn loads_files_from_disk() {
	let dir = tempfile::tempdir().unwrap();
	let unix = dir.path().join("unix.txt");
	let dos = dir.path().join("dos.txt");
	std::fs::write(&unix, "one\ntwo\n").unwrap();
	std::fs::write(&dos, "one\r\ntwo\r\n").unwrap();

	let mut t = workspace(Arc::new(FsStorage));
	let id = t.ws.open_document(Some(Locator::new(&unix))).unwrap();
	let second = t.ws.open_tab(id, Some(Locator::new(&dos))).unwrap();
	settle_one(&mut t.ws).await;
	settle_one(&mut t.ws).await;

	let doc = t.ws.document(id).unwrap();
	assert_eq!(doc.state(), DocumentState::Active);
	assert_eq!(doc.title(), "unix.txt");
	assert!(doc.tabs().iter().all(|tab| tab.text() == "one\ntwo\n"));
	assert_eq!(doc.current_editor().unwrap().unwrap().id(), second);
}

#[tokio::test(flavor = "current_thread")]
async fn missing_file_closes_its_document() {
	let dir = tempfile::tempdir().unwrap();
	let mut t = workspace(Arc::new(FsStorage));
	let id = t.ws.open_document(Some(Locator::new(dir.path().join("absent.txt")))).unwrap();
	settle_one(&mut t.ws).await;

	assert!(t.ws.document(id).unwrap().is_closed());
	assert_eq!(t.shell.errors().len(), 1);
	assert!(t.shell.errors()[0].contains("no such file"));
	assert!(matches!(t.ws.open_tab(id, None), Err(EditorError::InvalidState { .. })));

	assert_eq!(t.ws.prune_closed(), vec![id]);
	assert!(t.ws.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn documents_load_independently() {
	let storage = Arc::new(MemoryStorage::new());
	storage.insert("a.txt", "a");
	storage.insert("b.txt", "b");
	let mut t = workspace(storage);

	let a = t.ws.open_document(Some(Locator::from("a.txt"))).unwrap();
	let b = t.ws.open_document(Some(Locator::from("b.txt"))).unwrap();
	t.ws.close_document(a).unwrap();
	settle_one(&mut t.ws).await;
	t.ws.drain_messages();

	assert!(t.ws.document(a).unwrap().is_closed());
	let doc = t.ws.document(b).unwrap();
	assert_eq!(doc.state(), DocumentState::Active);
	assert_eq!(doc.current_editor().unwrap().unwrap().text(), "b");
	assert_eq!(t.ws.open_documents(), vec![b]);
}

#[tokio::test(flavor = "current_thread")]
async fn tab_closed_while_loading_is_never_presented() {
	let storage = Arc::new(MemoryStorage::new());
	storage.insert("a.txt", "a");
	let mut t = workspace(storage);

	let id = t.ws.open_document(None).unwrap();
	let untitled = t.ws.document(id).unwrap().tabs().active_id().unwrap();
	let loaded = t.ws.open_tab(id, Some(Locator::from("a.txt"))).unwrap();
	t.ws.close_current_tab(id).unwrap();
	t.ws.close_current_tab(id).unwrap();

	t.ws.drain_messages();
	assert_eq!(
		t.shell.events(),
		vec![ShellEvent::TabReady(id, untitled), ShellEvent::DocumentClosed(id)]
	);
	assert_eq!(t.renderer.content_binds(loaded), 0);
}
