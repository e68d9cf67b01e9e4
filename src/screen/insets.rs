//! Fixed inset policy table

use crate::model::{DeviceClass, InsetKey, Orientation};

/// Status bar height on a notched phone held upright
const STATUS_BAR_HEIGHT: f64 = 24.0;

/// Home indicator clearance in portrait
const HOME_INDICATOR_PORTRAIT: f64 = 34.0;

/// Home indicator clearance in landscape
const HOME_INDICATOR_LANDSCAPE: f64 = 24.0;

/// Sensor housing clearance on the sides in landscape
const SIDE_INSET_LANDSCAPE: f64 = 44.0;

/// Inset in logical pixels for a key on a device in an orientation.
///
/// `Horizontal` shares the left/right value and `Vertical` the top value.
/// Tablets and standard devices never get an inset.
pub fn inset_for(key: InsetKey, class: DeviceClass, orientation: Orientation) -> f64 {
    if class != DeviceClass::NotchedPhone {
        return 0.0;
    }

    let landscape = orientation.is_landscape();
    match key {
        InsetKey::Top | InsetKey::Vertical => {
            if landscape {
                0.0
            } else {
                STATUS_BAR_HEIGHT
            }
        }
        InsetKey::Bottom => {
            if landscape {
                HOME_INDICATOR_LANDSCAPE
            } else {
                HOME_INDICATOR_PORTRAIT
            }
        }
        InsetKey::Left | InsetKey::Right | InsetKey::Horizontal => {
            if landscape {
                SIDE_INSET_LANDSCAPE
            } else {
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notched_phone_portrait() {
        let o = Orientation::Portrait;
        let c = DeviceClass::NotchedPhone;
        assert_eq!(inset_for(InsetKey::Top, c, o), 24.0);
        assert_eq!(inset_for(InsetKey::Bottom, c, o), 34.0);
        assert_eq!(inset_for(InsetKey::Left, c, o), 0.0);
        assert_eq!(inset_for(InsetKey::Right, c, o), 0.0);
        assert_eq!(inset_for(InsetKey::Horizontal, c, o), 0.0);
        assert_eq!(inset_for(InsetKey::Vertical, c, o), 24.0);
    }

    #[test]
    fn test_notched_phone_landscape() {
        let o = Orientation::Landscape;
        let c = DeviceClass::NotchedPhone;
        assert_eq!(inset_for(InsetKey::Top, c, o), 0.0);
        assert_eq!(inset_for(InsetKey::Bottom, c, o), 24.0);
        assert_eq!(inset_for(InsetKey::Left, c, o), 44.0);
        assert_eq!(inset_for(InsetKey::Right, c, o), 44.0);
        assert_eq!(inset_for(InsetKey::Horizontal, c, o), 44.0);
        assert_eq!(inset_for(InsetKey::Vertical, c, o), 0.0);
    }

    #[test]
    fn test_other_classes_are_zero() {
        for class in [DeviceClass::Standard, DeviceClass::Tablet] {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                for key in InsetKey::ALL {
                    assert_eq!(inset_for(key, class, orientation), 0.0);
                }
            }
        }
    }
}
