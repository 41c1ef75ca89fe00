//! The assembled Animate.css preset.
//!
//! Bundles the keyframes table (the theme extension) with the full utility
//! set, and exports a host-neutral JSON description of both.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::keyframes::{KeyframesTable, KEYFRAMES};
use crate::utilities::{Utility, UtilityDescriptor, DESCRIPTORS};

/// Name the preset is registered under.
pub const PRESET_NAME: &str = "@slurpyb/preset-animate-css";

/// A preset ready for registration with a CSS-generation host.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// Registration name
    pub name: &'static str,
    /// `theme.extend.keyframes`
    pub keyframes: &'static KeyframesTable,
    /// `utilities.extend`, in registration order
    pub utilities: &'static [UtilityDescriptor],
}

/// The preset with every built-in utility and keyframes rule.
///
/// # Example
///
/// ```
/// use animate_preset::preset::{preset, PRESET_NAME};
///
/// let preset = preset();
/// assert_eq!(preset.name, PRESET_NAME);
/// assert!(preset.utility("animateIn").is_some());
/// ```
pub fn preset() -> Preset {
    Preset { name: PRESET_NAME, keyframes: &KEYFRAMES, utilities: &DESCRIPTORS }
}

impl Preset {
    /// Look up a utility descriptor by registration key or class name.
    pub fn utility(&self, name: &str) -> Option<&'static UtilityDescriptor> {
        self.utilities.iter().find(|d| d.key == name || d.class_name == name)
    }

    /// Utilities as their enum handles.
    pub fn utility_handles(&self) -> impl Iterator<Item = Utility> + '_ {
        self.utilities.iter().filter_map(|d| d.key.parse().ok())
    }

    /// Pretty JSON export.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Single-line JSON export.
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

struct Extend<T>(T);

impl<T: Serialize> Serialize for Extend<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("extend", &self.0)?;
        map.end()
    }
}

struct Theme(&'static KeyframesTable);

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("keyframes", self.0)?;
        map.end()
    }
}

struct UtilityMap(&'static [UtilityDescriptor]);

impl Serialize for UtilityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for descriptor in self.0 {
            map.serialize_entry(descriptor.key, descriptor)?;
        }
        map.end()
    }
}

impl Serialize for Preset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("name", self.name)?;
        map.serialize_entry("theme", &Extend(Theme(self.keyframes)))?;
        map.serialize_entry("utilities", &Extend(UtilityMap(self.utilities)))?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_has_all_utilities() {
        let preset = preset();
        assert_eq!(preset.utilities.len(), Utility::ALL.len());
        let handles: Vec<Utility> = preset.utility_handles().collect();
        assert_eq!(handles, Utility::ALL.to_vec());
    }

    #[test]
    fn test_utility_lookup_by_key_or_class() {
        let preset = preset();
        let by_key = preset.utility("animateOnHover").expect("key lookup");
        let by_class = preset.utility("animate-hover").expect("class lookup");
        assert_eq!(by_key.key, by_class.key);
        assert!(preset.utility("animateSideways").is_none());
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&preset().to_json().expect("should serialize"))
                .expect("should parse");
        assert_eq!(json["name"], PRESET_NAME);
        assert!(json["theme"]["extend"]["keyframes"]["fadeIn"].is_object());
        assert_eq!(json["utilities"]["extend"]["animateIn"]["className"], "animate-in");
        assert_eq!(json["utilities"]["extend"]["animationName"]["values"], "keyframes");
        assert_eq!(
            json["utilities"]["extend"]["animationRepeat"]["property"],
            "animation-iteration-count"
        );
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let compact = preset().to_json_compact().expect("should serialize");
        assert!(!compact.contains('\n'));
        assert!(compact.starts_with(r#"{"name":"@slurpyb/preset-animate-css""#));
    }
}
