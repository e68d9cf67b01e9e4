//! View module - Reactive safe-area container logic
//!
//! Provides:
//! - The host boundary (window geometry and measurement)
//! - Orientation change tracking
//! - The controller that measures, resolves and publishes padding

mod controller;
mod host;
mod watcher;

pub use controller::*;
pub use host::*;
pub use watcher::*;
