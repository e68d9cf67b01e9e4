//! Orientation change tracking

use crate::model::Orientation;

/// Last orientation a view was measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatcherState {
    /// Never measured; differs from every orientation
    #[default]
    Uninitialized,
    Portrait,
    Landscape,
}

impl From<Orientation> for WatcherState {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => WatcherState::Portrait,
            Orientation::Landscape => WatcherState::Landscape,
        }
    }
}

/// Gates re-measurement on orientation changes
#[derive(Debug, Clone, Default)]
pub struct OrientationWatcher {
    state: WatcherState,
}

impl OrientationWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WatcherState {
        self.state
    }

    /// The stored orientation, if any measurement has completed
    pub fn orientation(&self) -> Option<Orientation> {
        match self.state {
            WatcherState::Uninitialized => None,
            WatcherState::Portrait => Some(Orientation::Portrait),
            WatcherState::Landscape => Some(Orientation::Landscape),
        }
    }

    /// Whether a layout pass in `current` orientation needs a fresh measurement
    pub fn needs_measure(&self, current: Orientation) -> bool {
        self.state != WatcherState::from(current)
    }

    /// Record the orientation of a completed measurement
    pub fn commit(&mut self, orientation: Orientation) {
        self.state = orientation.into();
    }

    /// Check and record in one step. Returns true on a change.
    pub fn observe(&mut self, current: Orientation) -> bool {
        if self.needs_measure(current) {
            self.commit(current);
            true
        } else {
            false
        }
    }
}
