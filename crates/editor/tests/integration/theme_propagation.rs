use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use quire_editor::msg::Dirty;
use quire_editor::test_helpers::{GatedStorage, RenderEvent};
use quire_editor::{EditorError, Locator, MemoryStorage};
use quire_theme::Theme;

use crate::common::workspace;

#[tokio::test(flavor = "current_thread")]
async fn select_theme_reaches_every_open_document() {
	let mut t = workspace(Arc::new(GatedStorage::default()));
	let first = t.ws.open_document(None).unwrap();
	t.ws.open_tab(first, Some(Locator::from("pending.txt"))).unwrap();
	let second = t.ws.open_document(None).unwrap();

	let theme = t.ws.select_theme("paper").unwrap();
	assert_eq!(t.registry.active_id().as_str(), "paper");

	for id in [first, second] {
		let doc = t.ws.document(id).unwrap();
		assert_eq!(doc.theme_id().as_str(), "paper");
		assert!(doc.tabs().iter().all(|tab| Arc::ptr_eq(&tab.theme(), &theme)));
	}
}

#[tokio::test(flavor = "current_thread")]
async fn select_theme_accepts_aliases_and_rejects_unknown() {
	let mut t = workspace(Arc::new(MemoryStorage::new()));
	t.ws.open_document(None).unwrap();

	assert_eq!(t.ws.select_theme("light").unwrap().name, "paper");
	assert!(matches!(t.ws.select_theme("nope"), Err(EditorError::InvalidArgument(_))));
	assert!(matches!(t.ws.select_theme("  "), Err(EditorError::InvalidArgument(_))));
	assert_eq!(t.registry.active_id().as_str(), "paper");
}

#[tokio::test(flavor = "current_thread")]
async fn direct_registry_activation_reaches_sessions_immediately() {
	let storage = Arc::new(MemoryStorage::new());
	storage.insert("a.txt", "a");
	let mut t = workspace(storage);
	let id = t.ws.open_document(None).unwrap();
	t.ws.open_tab(id, Some(Locator::from("a.txt"))).unwrap();

	t.registry.set_active_by_name("ember").unwrap();

	let doc = t.ws.document(id).unwrap();
	assert_eq!(doc.theme_id().as_str(), "ember");
	assert!(doc.tabs().iter().all(|tab| tab.theme().name == "ember"));
	assert_eq!(doc.current_editor().unwrap().unwrap().theme().name, "ember");

	assert_eq!(t.ws.drain_messages(), Dirty::THEME);
	assert_eq!(t.ws.drain_messages(), Dirty::NONE);
}

#[tokio::test(flavor = "current_thread")]
async fn reregistering_active_theme_rethemes_sessions() {
	let mut t = workspace(Arc::new(MemoryStorage::new()));
	let id = t.ws.open_document(None).unwrap();
	t.ws.select_theme("paper").unwrap();

	let mut replacement = Theme::new("paper");
	replacement.ui.bg = quire_theme::Color::rgb(9, 9, 9);
	t.registry.register(replacement).unwrap();

	let session = t.ws.document(id).unwrap().current_editor().unwrap().unwrap();
	assert_eq!(session.theme().ui.bg, quire_theme::Color::rgb(9, 9, 9));
}

#[tokio::test(flavor = "current_thread")]
async fn activation_from_another_thread_is_visible_on_return() {
	let mut t = workspace(Arc::new(MemoryStorage::new()));
	let id = t.ws.open_document(None).unwrap();

	let registry = t.registry.clone();
	std::thread::spawn(move || registry.set_active_by_name("paper").map(|theme| theme.name.clone()))
		.join()
		.unwrap()
		.unwrap();

	let session = t.ws.document(id).unwrap().current_editor().unwrap().unwrap();
	assert_eq!(session.theme().name, "paper");
}

#[tokio::test(flavor = "current_thread")]
async fn documents_unsubscribe_when_closed_or_dropped() {
	let mut t = workspace(Arc::new(MemoryStorage::new()));
	let closed = t.ws.open_document(None).unwrap();
	t.ws.open_document(None).unwrap();
	assert_eq!(t.registry.subscriber_count(), 2);

	t.ws.close_document(closed).unwrap();
	assert_eq!(t.registry.subscriber_count(), 1);

	drop(t.ws);
	assert_eq!(t.registry.subscriber_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn registry_change_overrides_document_theme() {
	let mut t = workspace(Arc::new(MemoryStorage::new()));
	let id = t.ws.open_document(None).unwrap();
	t.ws.document_mut(id).unwrap().change_theme(Arc::new(Theme::new("local"))).unwrap();

	t.ws.select_theme("ember").unwrap();
	let session = t.ws.document(id).unwrap().current_editor().unwrap().unwrap();
	assert_eq!(session.theme().name, "ember");
}

#[tokio::test(flavor = "current_thread")]
async fn closed_documents_keep_their_last_theme() {
	let mut t = workspace(Arc::new(MemoryStorage::new()));
	let closed = t.ws.open_document(None).unwrap();
	t.ws.close_document(closed).unwrap();

	t.ws.select_theme("paper").unwrap();
	assert_eq!(t.ws.document(closed).unwrap().theme_id().as_str(), "default");
	assert!(t.ws.open_documents().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn renderer_sees_theme_for_each_tab_in_order() {
	let mut t = workspace(Arc::new(MemoryStorage::new()));
	let id = t.ws.open_document(None).unwrap();
	let a = t.ws.document(id).unwrap().tabs().active_id().unwrap();
	let b = t.ws.open_tab(id, None).unwrap();

	t.ws.select_theme("paper").unwrap();
	let themed: Vec<RenderEvent> = t
		.renderer
		.events()
		.into_iter()
		.filter(|e| matches!(e, RenderEvent::Theme(_, name) if name == "paper"))
		.collect();
	assert_eq!(
		themed,
		vec![RenderEvent::Theme(a, "paper".into()), RenderEvent::Theme(b, "paper".into())]
	);
}

#[tokio::test(flavor = "current_thread")]
async fn subscribers_observe_workspace_selection() {
	let t = workspace(Arc::new(MemoryStorage::new()));
	let mut ws = t.ws;
	let seen = Arc::new(AtomicUsize::new(0));
	let counter = seen.clone();
	let id = t.registry.subscribe(move |_| {
		counter.fetch_add(1, Ordering::SeqCst);
	});

	ws.select_theme("paper").unwrap();
	ws.select_theme("ember").unwrap();
	assert_eq!(seen.load(Ordering::SeqCst), 2);

	assert!(t.registry.unsubscribe(id));
	ws.select_theme("default").unwrap();
	assert_eq!(seen.load(Ordering::SeqCst), 2);
}
