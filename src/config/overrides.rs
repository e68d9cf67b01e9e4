//! Inset override configuration
//!
//! Values are written as `"always"`, `"never"` or a number of logical pixels.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::InsetKey;

/// Forced behavior for one inset key
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsetOverride {
    /// Apply the table inset even if the edge does not touch the screen
    Always,
    /// Never pad this edge
    Never,
    /// Pad by an explicit amount
    Value(f64),
}

impl fmt::Display for InsetOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsetOverride::Always => f.write_str("always"),
            InsetOverride::Never => f.write_str("never"),
            InsetOverride::Value(value) => write!(f, "{}", value),
        }
    }
}

impl FromStr for InsetOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "always" => Ok(InsetOverride::Always),
            "never" => Ok(InsetOverride::Never),
            other => other
                .parse::<f64>()
                .map(InsetOverride::Value)
                .map_err(|_| format!("expected \"always\", \"never\" or a number, got {:?}", other)),
        }
    }
}

impl Serialize for InsetOverride {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InsetOverride::Always => serializer.serialize_str("always"),
            InsetOverride::Never => serializer.serialize_str("never"),
            InsetOverride::Value(value) => serializer.serialize_f64(*value),
        }
    }
}

struct InsetOverrideVisitor;

impl<'de> Visitor<'de> for InsetOverrideVisitor {
    type Value = InsetOverride;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"always\", \"never\" or a number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<InsetOverride, E> {
        match value {
            "always" => Ok(InsetOverride::Always),
            "never" => Ok(InsetOverride::Never),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<InsetOverride, E> {
        Ok(InsetOverride::Value(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<InsetOverride, E> {
        Ok(InsetOverride::Value(value as f64))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<InsetOverride, E> {
        Ok(InsetOverride::Value(value))
    }
}

impl<'de> Deserialize<'de> for InsetOverride {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(InsetOverrideVisitor)
    }
}

/// Per-view override table.
///
/// Unknown keys in a config file are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsetOverrideConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<InsetOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<InsetOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<InsetOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<InsetOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<InsetOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<InsetOverride>,
}

impl InsetOverrideConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: InsetKey, value: InsetOverride) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: InsetKey) -> Option<InsetOverride> {
        match key {
            InsetKey::Top => self.top,
            InsetKey::Bottom => self.bottom,
            InsetKey::Left => self.left,
            InsetKey::Right => self.right,
            InsetKey::Horizontal => self.horizontal,
            InsetKey::Vertical => self.vertical,
        }
    }

    pub fn set(&mut self, key: InsetKey, value: InsetOverride) {
        let slot = match key {
            InsetKey::Top => &mut self.top,
            InsetKey::Bottom => &mut self.bottom,
            InsetKey::Left => &mut self.left,
            InsetKey::Right => &mut self.right,
            InsetKey::Horizontal => &mut self.horizontal,
            InsetKey::Vertical => &mut self.vertical,
        };
        *slot = Some(value);
    }

    /// Set an override by key name. Returns false for an unknown key,
    /// which leaves the table untouched.
    pub fn set_named(&mut self, name: &str, value: InsetOverride) -> bool {
        match InsetKey::parse(name) {
            Some(key) => {
                self.set(key, value);
                true
            }
            None => false,
        }
    }

    /// All configured overrides in key order
    pub fn iter(&self) -> impl Iterator<Item = (InsetKey, InsetOverride)> + '_ {
        InsetKey::ALL
            .into_iter()
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
