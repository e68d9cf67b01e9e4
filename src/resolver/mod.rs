//! Safe-area resolution
//!
//! Combines boundary contact, the inset table and caller overrides into the
//! final padding for a view.

use crate::config::{InsetOverride, InsetOverrideConfig};
use crate::model::{DeviceClass, Edge, EdgeTouchFlags, InsetKey, Orientation, ResolvedPadding};
use crate::screen::inset_for;

/// Axis keys first, then single edges, so an explicit edge always wins
const OVERRIDE_ORDER: [InsetKey; 6] = [
    InsetKey::Horizontal,
    InsetKey::Vertical,
    InsetKey::Top,
    InsetKey::Bottom,
    InsetKey::Left,
    InsetKey::Right,
];

/// Resolve the padding for a view.
///
/// Edges that touch the screen boundary get their table inset, every other
/// edge gets zero. Overrides are then applied on top.
pub fn resolve(
    touches: EdgeTouchFlags,
    class: DeviceClass,
    orientation: Orientation,
    overrides: Option<&InsetOverrideConfig>,
) -> ResolvedPadding {
    let mut padding = ResolvedPadding::ZERO;

    for edge in Edge::ALL {
        if touches.touches(edge) {
            padding.set(edge, inset_for(edge.into(), class, orientation));
        }
    }

    if let Some(overrides) = overrides {
        for key in OVERRIDE_ORDER {
            let Some(value) = overrides.get(key) else {
                continue;
            };

            let inset = match value {
                InsetOverride::Always => inset_for(key, class, orientation),
                InsetOverride::Never => 0.0,
                InsetOverride::Value(n) => n,
            };

            for edge in key.edges() {
                padding.set(*edge, inset);
            }
        }
    }

    padding
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSES: [DeviceClass; 3] = [
        DeviceClass::Standard,
        DeviceClass::NotchedPhone,
        DeviceClass::Tablet,
    ];

    #[test]
    fn test_no_touches_no_padding() {
        for class in CLASSES {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                let padding = resolve(EdgeTouchFlags::NONE, class, orientation, None);
                assert_eq!(padding, ResolvedPadding::ZERO);
            }
        }
    }

    #[test]
    fn test_top_only_portrait() {
        let touches = EdgeTouchFlags {
            top: true,
            ..EdgeTouchFlags::NONE
        };
        let padding = resolve(touches, DeviceClass::NotchedPhone, Orientation::Portrait, None);
        assert_eq!(padding, ResolvedPadding::new(24.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_full_screen_landscape() {
        let padding = resolve(
            EdgeTouchFlags::ALL,
            DeviceClass::NotchedPhone,
            Orientation::Landscape,
            None,
        );
        assert_eq!(padding, ResolvedPadding::new(0.0, 24.0, 44.0, 44.0));
    }

    #[test]
    fn test_full_screen_portrait() {
        let padding = resolve(
            EdgeTouchFlags::ALL,
            DeviceClass::NotchedPhone,
            Orientation::Portrait,
            None,
        );
        assert_eq!(padding, ResolvedPadding::new(24.0, 34.0, 0.0, 0.0));
    }

    #[test]
    fn test_never_suppresses_touched_edge() {
        let overrides = InsetOverrideConfig::new().with(InsetKey::Bottom, InsetOverride::Never);
        let padding = resolve(
            EdgeTouchFlags::ALL,
            DeviceClass::NotchedPhone,
            Orientation::Portrait,
            Some(&overrides),
        );
        assert_eq!(padding.bottom, 0.0);
        assert_eq!(padding.top, 24.0);
    }

    #[test]
    fn test_always_on_standard_is_zero() {
        let overrides = InsetOverrideConfig::new().with(InsetKey::Vertical, InsetOverride::Always);
        for orientation in [Orientation::Portrait, Orientation::Landscape] {
            let padding = resolve(
                EdgeTouchFlags::NONE,
                DeviceClass::Standard,
                orientation,
                Some(&overrides),
            );
            assert_eq!(padding.top, 0.0);
        }
    }

    #[test]
    fn test_always_forces_lookup_without_touch() {
        let overrides = InsetOverrideConfig::new().with(InsetKey::Top, InsetOverride::Always);
        let padding = resolve(
            EdgeTouchFlags::NONE,
            DeviceClass::NotchedPhone,
            Orientation::Portrait,
            Some(&overrides),
        );
        assert_eq!(padding, ResolvedPadding::new(24.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_axis_always_uses_axis_value_for_both_edges() {
        // Vertical shares the top value, so bottom gets 24 rather than 34
        let overrides = InsetOverrideConfig::new().with(InsetKey::Vertical, InsetOverride::Always);
        let padding = resolve(
            EdgeTouchFlags::NONE,
            DeviceClass::NotchedPhone,
            Orientation::Portrait,
            Some(&overrides),
        );
        assert_eq!(padding, ResolvedPadding::new(24.0, 24.0, 0.0, 0.0));

        let overrides =
            InsetOverrideConfig::new().with(InsetKey::Horizontal, InsetOverride::Always);
        let padding = resolve(
            EdgeTouchFlags::NONE,
            DeviceClass::NotchedPhone,
            Orientation::Landscape,
            Some(&overrides),
        );
        assert_eq!(padding, ResolvedPadding::new(0.0, 0.0, 44.0, 44.0));
    }

    #[test]
    fn test_edge_beats_axis() {
        let overrides = InsetOverrideConfig::new()
            .with(InsetKey::Left, InsetOverride::Value(5.0))
            .with(InsetKey::Horizontal, InsetOverride::Never);
        let padding = resolve(
            EdgeTouchFlags::ALL,
            DeviceClass::NotchedPhone,
            Orientation::Landscape,
            Some(&overrides),
        );
        assert_eq!(padding.left, 5.0);
        assert_eq!(padding.right, 0.0);
    }

    #[test]
    fn test_edge_beats_axis_regardless_of_file_order() {
        let edge_first: InsetOverrideConfig = toml::from_str(
            r#"
            top = 3
            vertical = "never"
            "#,
        )
        .unwrap();
        let axis_first: InsetOverrideConfig = toml::from_str(
            r#"
            vertical = "never"
            top = 3
            "#,
        )
        .unwrap();

        for overrides in [edge_first, axis_first] {
            let padding = resolve(
                EdgeTouchFlags::ALL,
                DeviceClass::NotchedPhone,
                Orientation::Portrait,
                Some(&overrides),
            );
            assert_eq!(padding.top, 3.0);
            assert_eq!(padding.bottom, 0.0);
        }
    }

    #[test]
    fn test_explicit_value_on_any_device() {
        let overrides = InsetOverrideConfig::new().with(InsetKey::Vertical, InsetOverride::Value(16.0));
        let padding = resolve(
            EdgeTouchFlags::NONE,
            DeviceClass::Tablet,
            Orientation::Landscape,
            Some(&overrides),
        );
        assert_eq!(padding, ResolvedPadding::new(16.0, 16.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_overrides_match_none() {
        let empty = InsetOverrideConfig::new();
        for class in CLASSES {
            assert_eq!(
                resolve(EdgeTouchFlags::ALL, class, Orientation::Portrait, Some(&empty)),
                resolve(EdgeTouchFlags::ALL, class, Orientation::Portrait, None)
            );
        }
    }
}
