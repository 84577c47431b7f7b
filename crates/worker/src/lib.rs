//! Worker runtime primitives shared by the editor crates.
//!
//! Every background task goes through [`spawn`] so it is classified and lands
//! on the active tokio runtime. Long-running loads carry a [`LoadToken`] that
//! ties their lifetime to the owner that requested them.

mod class;
mod spawn;
mod token;

pub use class::TaskClass;
pub use spawn::spawn;
pub use token::{LoadClock, LoadToken};
