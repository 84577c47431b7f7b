//! Theme definitions and the active theme registry.
//!
//! A [`Theme`] is an immutable style descriptor shared behind an [`Arc`].
//! The [`ThemeRegistry`] holds every known theme plus the one currently
//! active, and notifies subscribers synchronously when it changes.
//!
//! [`Arc`]: std::sync::Arc

mod builtin;
mod color;
mod error;
mod registry;
mod theme;

pub use builtin::{DEFAULT_THEME_ID, builtin_themes, default_theme};
pub use color::Color;
pub use error::{Result, ThemeError};
pub use registry::{SubscriptionId, ThemeRegistry};
pub use theme::{FontSpec, Theme, ThemeId, ThemeVariant, UiColors};
