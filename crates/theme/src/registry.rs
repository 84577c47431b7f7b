//! Process-wide registry of themes with an atomically published active theme.
//!
//! # Invariants
//!
//! - An active theme is always present; [`ThemeRegistry::new`] installs the
//!   default theme before the registry is reachable.
//! - Activations are serialized. The last write wins and every subscriber has
//!   observed it before [`ThemeRegistry::set_active`] returns.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;
use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};

use crate::{Result, Theme, ThemeError, ThemeId, builtin_themes, default_theme};

type Subscriber = Arc<dyn Fn(&Arc<Theme>) + Send + Sync>;

/// Handle returned by [`ThemeRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Known themes plus the currently active one.
pub struct ThemeRegistry {
	themes: RwLock<IndexMap<String, Arc<Theme>>>,
	active: ArcSwap<Theme>,
	revision: AtomicU64,
	subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
	next_subscription: AtomicU64,
	/// Serializes activations so notifications are delivered in write order.
	update: Mutex<()>,
}

impl Default for ThemeRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for ThemeRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ThemeRegistry")
			.field("themes", &self.names())
			.field("active", &self.active.load().name)
			.field("revision", &self.revision())
			.finish()
	}
}

impl ThemeRegistry {
	/// Creates a registry holding the built-in themes, with the default active.
	pub fn new() -> Self {
		let mut themes = builtin_themes().into_iter();
		let registry = Self::with_default(themes.next().unwrap_or_else(default_theme));
		for theme in themes {
			registry.insert(Arc::new(theme));
		}
		registry
	}

	/// Creates a registry containing only `theme`, which becomes active.
	pub fn with_default(theme: Theme) -> Self {
		let theme = Arc::new(theme);
		let mut themes = IndexMap::new();
		themes.insert(theme.name.clone(), theme.clone());
		Self {
			themes: RwLock::new(themes),
			active: ArcSwap::new(theme),
			revision: AtomicU64::new(0),
			subscribers: Mutex::new(Vec::new()),
			next_subscription: AtomicU64::new(1),
			update: Mutex::new(()),
		}
	}

	/// Registers a theme, replacing any previous theme with the same name.
	///
	/// Replacing the active theme re-activates the new definition so
	/// subscribers never keep rendering the stale one.
	pub fn register(&self, theme: Theme) -> Result<Arc<Theme>> {
		if theme.name.trim().is_empty() {
			return Err(ThemeError::EmptyName);
		}
		let theme = Arc::new(theme);
		let replaced_active = self.insert(theme.clone()) && self.active.load().name == theme.name;
		if replaced_active {
			self.set_active(theme.clone());
		}
		Ok(theme)
	}

	/// Inserts without notification. Returns true if a theme was replaced.
	fn insert(&self, theme: Arc<Theme>) -> bool {
		let previous = self.themes.write().insert(theme.name.clone(), theme);
		previous.is_some()
	}

	/// Looks a theme up by name, then by alias.
	pub fn get(&self, name: &str) -> Option<Arc<Theme>> {
		let themes = self.themes.read();
		if let Some(theme) = themes.get(name) {
			return Some(theme.clone());
		}
		themes.values().find(|t| t.answers_to(name)).cloned()
	}

	/// Resolves a user-supplied theme name.
	pub fn resolve(&self, name: &str) -> Result<Arc<Theme>> {
		let name = name.trim();
		if name.is_empty() {
			return Err(ThemeError::EmptyName);
		}
		self.get(name).ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))
	}

	/// Resolves a theme by key, if it is still registered.
	pub fn lookup(&self, id: &ThemeId) -> Option<Arc<Theme>> {
		self.get(id.as_str())
	}

	/// Registered theme names in registration order.
	pub fn names(&self) -> Vec<String> {
		self.themes.read().keys().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.themes.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.themes.read().is_empty()
	}

	/// Returns the active theme.
	pub fn active(&self) -> Arc<Theme> {
		self.active.load_full()
	}

	/// Returns the key of the active theme.
	pub fn active_id(&self) -> ThemeId {
		self.active.load().id()
	}

	/// Number of activations performed since construction.
	pub fn revision(&self) -> u64 {
		self.revision.load(Ordering::Acquire)
	}

	/// Makes `theme` the active theme and notifies every subscriber.
	///
	/// Themes not yet registered are registered first. Subscribers run on the
	/// calling thread and must not call `set_active` themselves.
	pub fn set_active(&self, theme: Arc<Theme>) -> u64 {
		let _guard = self.update.lock();

		if self.lookup(&theme.id()).is_none_or(|known| !Arc::ptr_eq(&known, &theme)) {
			self.insert(theme.clone());
		}
		self.active.store(theme.clone());
		let revision = self.revision.fetch_add(1, Ordering::AcqRel) + 1;

		let subscribers: Vec<Subscriber> = self.subscribers.lock().iter().map(|(_, f)| f.clone()).collect();
		tracing::debug!(theme = %theme.name, revision, subscribers = subscribers.len(), "theme.activate");
		for subscriber in subscribers {
			subscriber(&theme);
		}
		revision
	}

	/// Resolves `name` and activates it.
	pub fn set_active_by_name(&self, name: &str) -> Result<Arc<Theme>> {
		let theme = self.resolve(name)?;
		self.set_active(theme.clone());
		Ok(theme)
	}

	/// Registers a callback invoked on every activation.
	pub fn subscribe<F>(&self, f: F) -> SubscriptionId
	where
		F: Fn(&Arc<Theme>) + Send + Sync + 'static,
	{
		let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
		self.subscribers.lock().push((id, Arc::new(f)));
		id
	}

	/// Registers a callback and immediately calls it with the active theme.
	///
	/// Runs under the activation lock, so the subscriber sees every
	/// activation after the initial call and none before it.
	pub fn subscribe_current<F>(&self, f: F) -> SubscriptionId
	where
		F: Fn(&Arc<Theme>) + Send + Sync + 'static,
	{
		let _guard = self.update.lock();
		f(&self.active.load_full());
		self.subscribe(f)
	}

	/// Number of live subscriptions.
	pub fn subscriber_count(&self) -> usize {
		self.subscribers.lock().len()
	}

	/// Removes a subscription. Returns false if it was already removed.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		let mut subscribers = self.subscribers.lock();
		let before = subscribers.len();
		subscribers.retain(|(sid, _)| *sid != id);
		subscribers.len() != before
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::{DEFAULT_THEME_ID, ThemeVariant};

	#[test]
	fn new_registry_has_default_active() {
		let registry = ThemeRegistry::new();
		assert_eq!(registry.active().name, DEFAULT_THEME_ID);
		assert_eq!(registry.revision(), 0);
		assert_eq!(registry.names(), vec!["default", "paper", "ember"]);
	}

	#[test]
	fn resolves_aliases_and_rejects_unknown_names() {
		let registry = ThemeRegistry::new();
		assert_eq!(registry.resolve("light").unwrap().name, "paper");
		assert_eq!(registry.resolve("  ").unwrap_err(), ThemeError::EmptyName);
		assert_eq!(
			registry.resolve("nope").unwrap_err(),
			ThemeError::UnknownTheme("nope".into())
		);
	}

	#[test]
	fn set_active_notifies_subscribers_before_returning() {
		let registry = ThemeRegistry::new();
		let seen = Arc::new(Mutex::new(Vec::new()));
		let sink = seen.clone();
		registry.subscribe(move |theme| sink.lock().push(theme.name.clone()));

		registry.set_active_by_name("paper").unwrap();
		registry.set_active_by_name("ember").unwrap();

		assert_eq!(*seen.lock(), vec!["paper".to_string(), "ember".to_string()]);
		assert_eq!(registry.active().name, "ember");
		assert_eq!(registry.revision(), 2);
	}

	#[test]
	fn unsubscribed_callbacks_are_not_invoked() {
		let registry = ThemeRegistry::new();
		let count = Arc::new(AtomicU64::new(0));
		let counter = count.clone();
		let id = registry.subscribe(move |_| {
			counter.fetch_add(1, Ordering::Relaxed);
		});

		registry.set_active_by_name("paper").unwrap();
		assert!(registry.unsubscribe(id));
		assert!(!registry.unsubscribe(id));
		registry.set_active_by_name("ember").unwrap();

		assert_eq!(count.load(Ordering::Relaxed), 1);
	}

	#[test]
	fn subscribe_current_delivers_active_theme_first() {
		let registry = ThemeRegistry::new();
		registry.set_active_by_name("ember").unwrap();
		let seen = Arc::new(Mutex::new(Vec::new()));
		let sink = seen.clone();
		let id = registry.subscribe_current(move |theme| sink.lock().push(theme.name.clone()));
		registry.set_active_by_name("paper").unwrap();

		assert_eq!(*seen.lock(), vec!["ember".to_string(), "paper".to_string()]);
		assert_eq!(registry.subscriber_count(), 1);
		registry.unsubscribe(id);
		assert_eq!(registry.subscriber_count(), 0);
	}

	#[test]
	fn registering_over_active_theme_reactivates_it() {
		let registry = ThemeRegistry::new();
		registry.set_active_by_name("paper").unwrap();

		let mut replacement = Theme::new("paper");
		replacement.variant = ThemeVariant::Light;
		replacement.ui.bg = crate::Color::rgb(1, 2, 3);
		registry.register(replacement).unwrap();

		assert_eq!(registry.active().ui.bg, crate::Color::rgb(1, 2, 3));
		assert_eq!(registry.revision(), 2);
	}

	#[test]
	fn setting_unregistered_theme_registers_it() {
		let registry = ThemeRegistry::new();
		registry.set_active(Arc::new(Theme::new("custom")));
		assert!(registry.get("custom").is_some());
		assert_eq!(registry.active_id(), ThemeId::new("custom"));
	}

	#[test]
	fn register_rejects_empty_name() {
		let registry = ThemeRegistry::new();
		assert_eq!(registry.register(Theme::new(" ")).unwrap_err(), ThemeError::EmptyName);
	}
}
