//! Geometry model shared by every safe-area component
//!
//! All types here are small value objects recomputed per layout event.

mod types;

pub use types::*;

/// Width of the reference notched phone in portrait (logical pixels)
pub const NOTCHED_PHONE_WIDTH: f64 = 375.0;

/// Height of the reference notched phone in portrait (logical pixels)
pub const NOTCHED_PHONE_HEIGHT: f64 = 812.0;

/// Short edge of the smallest reference tablet (logical pixels)
pub const TABLET_SHORT_EDGE: f64 = 768.0;

/// The reference notched-phone screen span for an orientation
pub fn reference_span(orientation: Orientation) -> ScreenDimensions {
    match orientation {
        Orientation::Portrait => ScreenDimensions::new(NOTCHED_PHONE_WIDTH, NOTCHED_PHONE_HEIGHT),
        Orientation::Landscape => ScreenDimensions::new(NOTCHED_PHONE_HEIGHT, NOTCHED_PHONE_WIDTH),
    }
}
