//! Host environment boundary
//!
//! The UI framework supplies window geometry and the measurement primitive.

use async_trait::async_trait;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use thiserror::Error;

use crate::model::{MeasuredRect, Platform, ScreenDimensions};

/// Opaque handle to a host view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewHandle(pub u64);

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Errors from the host measurement primitive
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("View {0} is no longer attached to a window")]
    Detached(ViewHandle),

    #[error("Host error: {0}")]
    Host(String),
}

pub type MeasureResult<T> = Result<T, MeasureError>;

/// Environment a safe-area view lives in
#[async_trait]
pub trait Host: Send + Sync {
    /// Current window size; changes on rotation
    fn window_dimensions(&self) -> ScreenDimensions;

    /// Platform family, fixed for the process lifetime
    fn platform(&self) -> Platform;

    /// Measure a view's frame in window coordinates
    async fn measure_in_window(&self, view: ViewHandle) -> MeasureResult<MeasuredRect>;
}

/// In-process host with settable geometry
#[derive(Debug)]
pub struct SimulatedHost {
    platform: Platform,
    dimensions: RwLock<ScreenDimensions>,
    /// Frame reported for measured views; `None` means full screen
    frame: RwLock<Option<MeasuredRect>>,
    detached: RwLock<bool>,
    measure_count: AtomicUsize,
}

impl SimulatedHost {
    pub fn new(platform: Platform, dimensions: ScreenDimensions) -> Self {
        Self {
            platform,
            dimensions: RwLock::new(dimensions),
            frame: RwLock::new(None),
            detached: RwLock::new(false),
            measure_count: AtomicUsize::new(0),
        }
    }

    pub fn set_dimensions(&self, dimensions: ScreenDimensions) {
        *self.dimensions.write().unwrap_or_else(|e| e.into_inner()) = dimensions;
    }

    /// Swap width and height
    pub fn rotate(&self) {
        let rotated = self.window_dimensions().rotated();
        self.set_dimensions(rotated);
    }

    pub fn set_frame(&self, frame: Option<MeasuredRect>) {
        *self.frame.write().unwrap_or_else(|e| e.into_inner()) = frame;
    }

    /// Make every measurement fail as if the view left the window
    pub fn set_detached(&self, detached: bool) {
        *self.detached.write().unwrap_or_else(|e| e.into_inner()) = detached;
    }

    /// Number of measurements requested so far
    pub fn measure_count(&self) -> usize {
        self.measure_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Host for SimulatedHost {
    fn window_dimensions(&self) -> ScreenDimensions {
        *self.dimensions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    async fn measure_in_window(&self, view: ViewHandle) -> MeasureResult<MeasuredRect> {
        self.measure_count.fetch_add(1, Ordering::SeqCst);

        if *self.detached.read().unwrap_or_else(|e| e.into_inner()) {
            return Err(MeasureError::Detached(view));
        }

        let frame = *self.frame.read().unwrap_or_else(|e| e.into_inner());
        Ok(frame.unwrap_or_else(|| MeasuredRect::full_screen(self.window_dimensions())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_host_full_screen() {
        let host = SimulatedHost::new(Platform::Ios, ScreenDimensions::new(375.0, 812.0));
        let rect = host.measure_in_window(ViewHandle(1)).await.unwrap();
        assert_eq!(rect, MeasuredRect::new(0.0, 0.0, 375.0, 812.0));
        assert_eq!(host.measure_count(), 1);
    }

    #[tokio::test]
    async fn test_simulated_host_rotation_and_frame() {
        let host = SimulatedHost::new(Platform::Ios, ScreenDimensions::new(375.0, 812.0));
        host.rotate();
        assert_eq!(host.window_dimensions(), ScreenDimensions::new(812.0, 375.0));

        let frame = MeasuredRect::new(10.0, 10.0, 100.0, 100.0);
        host.set_frame(Some(frame));
        assert_eq!(host.measure_in_window(ViewHandle(1)).await, Ok(frame));
    }

    #[tokio::test]
    async fn test_simulated_host_detached() {
        let host = SimulatedHost::new(Platform::Ios, ScreenDimensions::new(375.0, 812.0));
        host.set_detached(true);
        assert_eq!(
            host.measure_in_window(ViewHandle(7)).await,
            Err(MeasureError::Detached(ViewHandle(7)))
        );
    }
}
