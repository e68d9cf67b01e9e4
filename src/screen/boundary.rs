//! Screen boundary detection
//!
//! Determines which edges of a measured view abut the physical screen edge.
//! Views nested in scroll or transform contexts may report offsets outside
//! the screen, so positions are first folded back into a single screen span.

use crate::model::{
    reference_span, EdgeTouchFlags, MeasuredRect, Orientation, ScreenDimensions,
    NOTCHED_PHONE_HEIGHT, NOTCHED_PHONE_WIDTH,
};

/// Detects boundary contact against a portrait screen span
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryDetector {
    /// Screen span in portrait; swapped for landscape
    span: ScreenDimensions,
}

impl Default for BoundaryDetector {
    fn default() -> Self {
        Self::new(ScreenDimensions::new(NOTCHED_PHONE_WIDTH, NOTCHED_PHONE_HEIGHT))
    }
}

impl BoundaryDetector {
    /// Create a detector for a portrait screen span
    pub fn new(span: ScreenDimensions) -> Self {
        Self { span }
    }

    /// Screen span for an orientation
    pub fn span_for(&self, orientation: Orientation) -> ScreenDimensions {
        match orientation {
            Orientation::Portrait => self.span,
            Orientation::Landscape => self.span.rotated(),
        }
    }

    /// Check which edges of `measured` touch the screen boundary
    pub fn detect(&self, measured: MeasuredRect, orientation: Orientation) -> EdgeTouchFlags {
        let span = self.span_for(orientation);
        let x = normalize(measured.x, span.width);
        let y = normalize(measured.y, span.height);

        EdgeTouchFlags {
            top: y == 0.0,
            bottom: y + measured.height >= span.height,
            left: x == 0.0,
            right: x + measured.width >= span.width,
        }
    }
}

/// Fold a coordinate into `[0, span)` with floored modular arithmetic
pub fn normalize(value: f64, span: f64) -> f64 {
    value.rem_euclid(span)
}

/// Detect boundary contact against the reference notched-phone screen
pub fn detect_touches(measured: MeasuredRect, orientation: Orientation) -> EdgeTouchFlags {
    BoundaryDetector::new(reference_span(Orientation::Portrait)).detect(measured, orientation)
}
