//! Safe-area view controller
//!
//! Reacts to host layout notifications, measures the view when the
//! orientation changes and publishes the resolved padding.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use super::host::{Host, MeasureResult, ViewHandle};
use super::watcher::OrientationWatcher;
use crate::config::InsetOverrideConfig;
use crate::model::{EdgeTouchFlags, MeasuredRect, Orientation, ResolvedPadding};
use crate::resolver::resolve;
use crate::screen::{classify, BoundaryDetector};

/// Notifications from the host view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    /// First paint finished; geometry is now valid
    Ready,
    /// The host ran a layout pass
    LayoutChanged,
    /// The parent re-rendered the view with new properties
    PropsChanged,
}

/// Events emitted to the render target
#[derive(Debug, Clone, PartialEq)]
pub enum SafeAreaEvent {
    /// New padding to apply to the container
    PaddingChanged {
        padding: ResolvedPadding,
        orientation: Orientation,
    },
    /// A measurement failed; previous padding stays in effect
    MeasurementFailed {
        message: String,
    },
}

/// A completed measurement, tagged with the generation it was issued under
#[derive(Debug)]
struct Measurement {
    generation: u64,
    orientation: Orientation,
    result: MeasureResult<MeasuredRect>,
}

/// Reactive safe-area container state
pub struct SafeAreaView<H: Host + 'static> {
    /// Host environment
    host: Arc<H>,
    /// Handle of the measured view, once mounted
    view: Option<ViewHandle>,
    /// Caller overrides
    overrides: InsetOverrideConfig,
    detector: BoundaryDetector,
    watcher: OrientationWatcher,
    /// Touch flags from the latest applied measurement
    touches: EdgeTouchFlags,
    /// Generation of the most recently issued measurement
    generation: u64,
    /// Orientation of the in-flight measurement, if any
    pending: Option<Orientation>,
    measure_tx: mpsc::Sender<Measurement>,
    measure_rx: Option<mpsc::Receiver<Measurement>>,
    /// Event sender
    event_tx: mpsc::Sender<SafeAreaEvent>,
    /// Event receiver (for consumers)
    event_rx: Option<mpsc::Receiver<SafeAreaEvent>>,
}

impl<H: Host + 'static> SafeAreaView<H> {
    /// Create a new view controller
    pub fn new(host: Arc<H>, overrides: InsetOverrideConfig) -> Self {
        let (measure_tx, measure_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = mpsc::channel(256);

        Self {
            host,
            view: None,
            overrides,
            detector: BoundaryDetector::default(),
            watcher: OrientationWatcher::new(),
            touches: EdgeTouchFlags::default(),
            generation: 0,
            pending: None,
            measure_tx,
            measure_rx: Some(measure_rx),
            event_tx,
            event_rx: Some(event_rx),
        }
    }

    /// Use a different boundary span than the reference notched phone
    pub fn with_detector(mut self, detector: BoundaryDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Take the event receiver (can only be called once)
    pub fn take_event_receiver(&mut self) -> Option<mpsc::Receiver<SafeAreaEvent>> {
        self.event_rx.take()
    }

    /// Bind the controller to a mounted host view
    pub fn attach(&mut self, view: ViewHandle) {
        self.view = Some(view);
    }

    /// Unbind from the host view; later layout passes are ignored
    pub fn detach(&mut self) {
        self.view = None;
    }

    pub fn overrides(&self) -> &InsetOverrideConfig {
        &self.overrides
    }

    pub fn touches(&self) -> EdgeTouchFlags {
        self.touches
    }

    /// Orientation of the last applied measurement
    pub fn orientation(&self) -> Option<Orientation> {
        self.watcher.orientation()
    }

    /// Whether a measurement is in flight
    pub fn is_measuring(&self) -> bool {
        self.pending.is_some()
    }

    /// Padding for the current state.
    ///
    /// Before the first measurement the view is assumed to touch every edge
    /// in the live orientation.
    pub fn padding(&self) -> ResolvedPadding {
        let platform = self.host.platform();
        if !platform.has_safe_area_insets() {
            return ResolvedPadding::ZERO;
        }

        let dims = self.host.window_dimensions();
        let class = classify(dims, platform);
        let orientation = self
            .watcher
            .orientation()
            .unwrap_or_else(|| dims.orientation());

        resolve(self.touches, class, orientation, Some(&self.overrides))
    }

    /// Replace the override table and republish padding
    pub fn set_overrides(&mut self, overrides: InsetOverrideConfig) {
        self.overrides = overrides;
        let orientation = self
            .watcher
            .orientation()
            .unwrap_or_else(|| self.host.window_dimensions().orientation());
        self.publish(SafeAreaEvent::PaddingChanged {
            padding: self.padding(),
            orientation,
        });
    }

    /// React to a host notification. Returns true if a measurement was issued.
    ///
    /// Measurements run as spawned tasks, so this must be called from within
    /// a tokio runtime.
    pub fn handle_event(&mut self, event: LayoutEvent) -> bool {
        if !self.host.platform().has_safe_area_insets() {
            return false;
        }

        let Some(view) = self.view else {
            tracing::debug!("{:?} before a view was attached, ignoring", event);
            return false;
        };

        let current = self.host.window_dimensions().orientation();
        // An in-flight measurement for another orientation is superseded
        let up_to_date = match self.pending {
            Some(pending) => pending == current,
            None => !self.watcher.needs_measure(current),
        };
        if up_to_date {
            tracing::debug!("{:?} in unchanged orientation {}, skipping", event, current);
            return false;
        }

        self.generation += 1;
        self.pending = Some(current);

        let generation = self.generation;
        let host = Arc::clone(&self.host);
        let tx = self.measure_tx.clone();

        tracing::debug!(
            "Measuring {} for {} (generation {})",
            view,
            current,
            generation
        );

        tokio::spawn(async move {
            let result = host.measure_in_window(view).await;
            let _ = tx
                .send(Measurement {
                    generation,
                    orientation: current,
                    result,
                })
                .await;
        });

        true
    }

    /// Wait for the next measurement to complete and apply it.
    ///
    /// Returns true if it changed the view state.
    pub async fn settle(&mut self) -> bool {
        let measurement = match self.measure_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        };

        match measurement {
            Some(measurement) => self.apply_measurement(measurement),
            None => false,
        }
    }

    /// Drive the controller from host notifications until the channel closes
    pub async fn run(&mut self, mut events: mpsc::Receiver<LayoutEvent>) {
        let Some(mut measurements) = self.measure_rx.take() else {
            tracing::warn!("Safe-area view is already running");
            return;
        };

        loop {
            tokio::select! {
                event = events.recv() => {
                    match event {
                        Some(event) => {
                            self.handle_event(event);
                        }
                        None => break,
                    }
                }
                Some(measurement) = measurements.recv() => {
                    self.apply_measurement(measurement);
                }
            }
        }

        self.measure_rx = Some(measurements);
    }

    fn apply_measurement(&mut self, measurement: Measurement) -> bool {
        if measurement.generation != self.generation {
            tracing::debug!(
                "Discarding stale measurement (generation {}, latest {})",
                measurement.generation,
                self.generation
            );
            return false;
        }

        self.pending = None;

        let rect = match measurement.result {
            Ok(rect) => rect,
            Err(e) => {
                tracing::warn!("Measurement failed: {}", e);
                self.publish(SafeAreaEvent::MeasurementFailed {
                    message: e.to_string(),
                });
                return false;
            }
        };

        self.touches = self.detector.detect(rect, measurement.orientation);
        self.watcher.commit(measurement.orientation);

        let padding = self.padding();
        tracing::info!(
            "Safe area for {}: {} (touches {:?})",
            measurement.orientation,
            padding,
            self.touches
        );

        self.publish(SafeAreaEvent::PaddingChanged {
            padding,
            orientation: measurement.orientation,
        });

        true
    }

    /// Never waits on the render target; the state is already stored
    fn publish(&self, event: SafeAreaEvent) {
        match self.event_tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::debug!("Render target is not draining events, dropping {:?}", event);
            }
            Err(TrySendError::Closed(_)) => {
                tracing::debug!("No render target listening for safe-area events");
            }
        }
    }
}
