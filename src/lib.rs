//! SafeArea - Safe-area insets for notched mobile screens
//!
//! Classifies the device, detects which edges of a view touch the screen
//! boundary and resolves the padding needed to keep content clear of the
//! notch, status bar and home indicator.

pub mod config;
pub mod model;
pub mod resolver;
pub mod screen;
pub mod view;

pub use config::{Config, InsetOverride, InsetOverrideConfig};
pub use model::{
    DeviceClass, Edge, EdgeTouchFlags, InsetKey, MeasuredRect, Orientation, Platform,
    ResolvedPadding, ScreenDimensions,
};
pub use resolver::resolve;
pub use screen::{classify, detect_touches, inset_for};
pub use view::{Host, LayoutEvent, SafeAreaEvent, SafeAreaView};
