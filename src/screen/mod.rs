//! Screen classification module
//!
//! Handles:
//! - Device form factor classification
//! - Per-edge inset lookup
//! - Detection of view edges touching the screen boundary

mod boundary;
mod insets;

pub use boundary::{detect_touches, normalize, BoundaryDetector};
pub use insets::inset_for;

use crate::model::{
    DeviceClass, Platform, ScreenDimensions, NOTCHED_PHONE_HEIGHT, NOTCHED_PHONE_WIDTH,
    TABLET_SHORT_EDGE,
};

/// Classify the device from its window dimensions.
///
/// Only the iOS family is ever classified as anything but `Standard`.
pub fn classify(dims: ScreenDimensions, platform: Platform) -> DeviceClass {
    if !platform.has_safe_area_insets() {
        return DeviceClass::Standard;
    }

    if is_notched_phone_size(dims) {
        return DeviceClass::NotchedPhone;
    }

    // Portrait compares the width, landscape the height: either way the short edge
    if dims.width >= TABLET_SHORT_EDGE && dims.height >= TABLET_SHORT_EDGE {
        DeviceClass::Tablet
    } else {
        DeviceClass::Standard
    }
}

/// Whether the device has a notch and home indicator
pub fn has_notch(dims: ScreenDimensions, platform: Platform) -> bool {
    classify(dims, platform) == DeviceClass::NotchedPhone
}

fn is_notched_phone_size(dims: ScreenDimensions) -> bool {
    (dims.width == NOTCHED_PHONE_WIDTH && dims.height == NOTCHED_PHONE_HEIGHT)
        || (dims.width == NOTCHED_PHONE_HEIGHT && dims.height == NOTCHED_PHONE_WIDTH)
}
