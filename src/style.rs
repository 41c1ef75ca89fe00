//! Style bundles produced by utility transforms.
//!
//! A [`StyleBundle`] is an ordered mapping from a CSS property name (or a
//! nested at-rule / `&`-selector key) to a [`StyleValue`]. Setting a key that
//! already exists replaces the value but keeps its original position, the same
//! way an object spread behaves.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A single value inside a [`StyleBundle`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A literal CSS value (e.g. `"1s"`, `"both"`, `"1ms !important"`)
    Text(String),
    /// A bare number (e.g. `opacity: 0`)
    Number(f64),
    /// A nested block keyed by an at-rule or selector
    Nested(StyleBundle),
}

impl StyleValue {
    /// Returns the text if this is a [`StyleValue::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a [`StyleValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the nested bundle if this is a [`StyleValue::Nested`].
    pub fn as_bundle(&self) -> Option<&StyleBundle> {
        match self {
            StyleValue::Nested(b) => Some(b),
            _ => None,
        }
    }

    /// Check if this value is a nested block.
    pub fn is_nested(&self) -> bool {
        matches!(self, StyleValue::Nested(_))
    }
}

impl fmt::Display for StyleValue {
    /// Formats scalar values as they appear in a CSS declaration.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Nested(_) => f.write_str("{...}"),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<StyleBundle> for StyleValue {
    fn from(b: StyleBundle) -> Self {
        StyleValue::Nested(b)
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Text(s) => serializer.serialize_str(s),
            // Whole numbers go out as integers so `opacity: 0` stays `0`
            StyleValue::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            StyleValue::Number(n) => serializer.serialize_f64(*n),
            StyleValue::Nested(b) => b.serialize(serializer),
        }
    }
}

/// Ordered mapping from CSS property (or nested rule key) to value.
///
/// # Example
///
/// ```
/// use animate_preset::style::{StyleBundle, StyleValue};
///
/// let mut bundle = StyleBundle::new();
/// bundle.set("animation-name", "fadeIn");
/// bundle.set("opacity", 0.0);
/// bundle.set("animation-name", "fadeOut");
///
/// assert_eq!(bundle.len(), 2);
/// assert_eq!(bundle.text("animation-name"), Some("fadeOut"));
/// assert_eq!(bundle.get("opacity"), Some(&StyleValue::Number(0.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleBundle {
    entries: Vec<(String, StyleValue)>,
}

impl StyleBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert or replace a value. Replacing keeps the key's original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Spread every entry of `other` into this bundle, in order.
    pub fn extend(&mut self, other: &StyleBundle) {
        for (key, value) in &other.entries {
            self.set(key.clone(), value.clone());
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up a text value by key.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_str)
    }

    /// Look up a nested bundle by key.
    pub fn nested(&self, key: &str) -> Option<&StyleBundle> {
        self.get(key).and_then(StyleValue::as_bundle)
    }

    /// Check whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collect every text value stored under `key`, at any nesting depth.
    pub fn find_all(&self, key: &str) -> Vec<&str> {
        let mut found = Vec::new();
        self.collect_into(key, &mut found);
        found
    }

    fn collect_into<'a>(&'a self, key: &str, found: &mut Vec<&'a str>) {
        for (k, v) in &self.entries {
            match v {
                StyleValue::Nested(inner) => inner.collect_into(key, found),
                StyleValue::Text(s) if k == key => found.push(s),
                _ => {}
            }
        }
    }
}

impl Serialize for StyleBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
