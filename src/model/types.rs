//! Value types for screens, views and padding

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Window dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenDimensions {
    pub width: f64,
    pub height: f64,
}

impl ScreenDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Orientation implied by these dimensions
    pub fn orientation(&self) -> Orientation {
        Orientation::from_dimensions(*self)
    }

    /// The same screen rotated by 90 degrees
    pub fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Host platform family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Other,
}

impl Platform {
    /// Only the iOS family has notches and home indicators to avoid
    pub fn has_safe_area_insets(&self) -> bool {
        matches!(self, Platform::Ios)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "other" => Ok(Platform::Other),
            other => Err(format!("unknown platform: {}", other)),
        }
    }
}

/// Device form factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Standard,
    NotchedPhone,
    Tablet,
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceClass::Standard => "standard",
            DeviceClass::NotchedPhone => "notched phone",
            DeviceClass::Tablet => "tablet",
        };
        f.write_str(name)
    }
}

/// Screen orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape only when strictly wider than tall
    pub fn from_dimensions(dims: ScreenDimensions) -> Self {
        if dims.width > dims.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn is_landscape(&self) -> bool {
        matches!(self, Orientation::Landscape)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

/// A view's frame in window-absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasuredRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl MeasuredRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect covering the whole of the given screen
    pub fn full_screen(dims: ScreenDimensions) -> Self {
        Self::new(0.0, 0.0, dims.width, dims.height)
    }
}

/// One side of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// Key of an inset lookup or override: a single edge or a whole axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsetKey {
    Top,
    Bottom,
    Left,
    Right,
    Horizontal,
    Vertical,
}

impl InsetKey {
    pub const ALL: [InsetKey; 6] = [
        InsetKey::Top,
        InsetKey::Bottom,
        InsetKey::Left,
        InsetKey::Right,
        InsetKey::Horizontal,
        InsetKey::Vertical,
    ];

    /// Parse a key name; unknown names yield `None`
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "top" => Some(InsetKey::Top),
            "bottom" => Some(InsetKey::Bottom),
            "left" => Some(InsetKey::Left),
            "right" => Some(InsetKey::Right),
            "horizontal" => Some(InsetKey::Horizontal),
            "vertical" => Some(InsetKey::Vertical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InsetKey::Top => "top",
            InsetKey::Bottom => "bottom",
            InsetKey::Left => "left",
            InsetKey::Right => "right",
            InsetKey::Horizontal => "horizontal",
            InsetKey::Vertical => "vertical",
        }
    }

    pub fn is_axis(&self) -> bool {
        matches!(self, InsetKey::Horizontal | InsetKey::Vertical)
    }

    /// The edges this key applies to
    pub fn edges(&self) -> &'static [Edge] {
        match self {
            InsetKey::Top => &[Edge::Top],
            InsetKey::Bottom => &[Edge::Bottom],
            InsetKey::Left => &[Edge::Left],
            InsetKey::Right => &[Edge::Right],
            InsetKey::Horizontal => &[Edge::Left, Edge::Right],
            InsetKey::Vertical => &[Edge::Top, Edge::Bottom],
        }
    }
}

impl From<Edge> for InsetKey {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Top => InsetKey::Top,
            Edge::Bottom => InsetKey::Bottom,
            Edge::Left => InsetKey::Left,
            Edge::Right => InsetKey::Right,
        }
    }
}

impl fmt::Display for InsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which edges of a measured view coincide with the screen boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeTouchFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeTouchFlags {
    pub const ALL: EdgeTouchFlags = EdgeTouchFlags {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };

    pub const NONE: EdgeTouchFlags = EdgeTouchFlags {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    pub fn touches(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }
}

/// Until a view has been measured it is assumed to fill the screen
impl Default for EdgeTouchFlags {
    fn default() -> Self {
        Self::ALL
    }
}

/// Final per-edge padding handed to the render target
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPadding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ResolvedPadding {
    pub const ZERO: ResolvedPadding = ResolvedPadding {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    pub fn set(&mut self, edge: Edge, value: f64) {
        match edge {
            Edge::Top => self.top = value,
            Edge::Bottom => self.bottom = value,
            Edge::Left => self.left = value,
            Edge::Right => self.right = value,
        }
    }
}

impl fmt::Display for ResolvedPadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top={} bottom={} left={} right={}",
            self.top, self.bottom, self.left, self.right
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_dimensions() {
        assert_eq!(
            ScreenDimensions::new(375.0, 812.0).orientation(),
            Orientation::Portrait
        );
        assert_eq!(
            ScreenDimensions::new(812.0, 375.0).orientation(),
            Orientation::Landscape
        );
        // Square screens count as portrait
        assert_eq!(
            ScreenDimensions::new(500.0, 500.0).orientation(),
            Orientation::Portrait
        );
    }

    #[test]
    fn test_inset_key_parse() {
        for key in InsetKey::ALL {
            assert_eq!(InsetKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(InsetKey::parse("diagonal"), None);
        assert_eq!(InsetKey::parse("Top"), None);
    }

    #[test]
    fn test_axis_keys_expand_to_edges() {
        assert_eq!(InsetKey::Horizontal.edges(), &[Edge::Left, Edge::Right]);
        assert_eq!(InsetKey::Vertical.edges(), &[Edge::Top, Edge::Bottom]);
        assert!(InsetKey::Vertical.is_axis());
        assert!(!InsetKey::Top.is_axis());
    }

    #[test]
    fn test_default_touch_flags_cover_every_edge() {
        let flags = EdgeTouchFlags::default();
        assert!(Edge::ALL.iter().all(|edge| flags.touches(*edge)));
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("iOS".parse::<Platform>(), Ok(Platform::Ios));
        assert_eq!("android".parse::<Platform>(), Ok(Platform::Android));
        assert!("symbian".parse::<Platform>().is_err());
        assert!(Platform::Ios.has_safe_area_insets());
        assert!(!Platform::Android.has_safe_area_insets());
    }

    #[test]
    fn test_padding_set_and_get() {
        let mut padding = ResolvedPadding::ZERO;
        padding.set(Edge::Left, 44.0);
        assert_eq!(padding.get(Edge::Left), 44.0);
        assert_eq!(padding.get(Edge::Right), 0.0);
    }
}
