//! Built-in animation preset tables.
//!
//! Maps semantic animation names to Animate.css keyframe identifiers, grouped
//! the way the utilities consume them:
//!
//! - [`ANIMATION_PRESETS`] - every supported animation
//! - [`ENTRANCE_ANIMATIONS`] - animations that bring an element in
//! - [`EXIT_ANIMATIONS`] - animations that take an element out
//! - [`ATTENTION_ANIMATIONS`] - attention seekers (hover / infinite)
//! - [`ANIMATION_SPEEDS`] - semantic speed labels to CSS durations
//!
//! # Example
//!
//! ```
//! use animate_preset::presets::{ANIMATION_PRESETS, ANIMATION_SPEEDS};
//!
//! assert_eq!(ANIMATION_PRESETS.get("shake"), Some("shakeX"));
//! assert_eq!(ANIMATION_SPEEDS.resolve("fast"), "500ms");
//! assert_eq!(ANIMATION_SPEEDS.resolve("750ms"), "750ms");
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered, immutable mapping from a semantic key to a literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetTable {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl PresetTable {
    /// Create a table over static entries.
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Name of the table (e.g. "entrance").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the value for a key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Check whether `key` is one of the table's semantic keys.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Check whether `value` appears as a value anywhere in the table.
    pub fn contains_value(&self, value: &str) -> bool {
        self.entries.iter().any(|(_, v)| *v == value)
    }

    /// Map a key to its value, or hand back the input unchanged when it is
    /// not a key of this table.
    pub fn resolve<'a>(&self, value: &'a str) -> &'a str {
        self.get(value).unwrap_or(value)
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Values in declaration order (duplicates preserved).
    pub fn values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    /// `(key, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PresetTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Every supported animation, grouped by family.
pub static ANIMATION_PRESETS: PresetTable = PresetTable::new(
    "presets",
    &[
        // Fade
        ("fadeIn", "fadeIn"),
        ("fadeOut", "fadeOut"),
        ("fadeInUp", "fadeInUp"),
        ("fadeInDown", "fadeInDown"),
        ("fadeInLeft", "fadeInLeft"),
        ("fadeInRight", "fadeInRight"),
        ("fadeOutUp", "fadeOutUp"),
        ("fadeOutDown", "fadeOutDown"),
        ("fadeOutLeft", "fadeOutLeft"),
        ("fadeOutRight", "fadeOutRight"),
        // Slide
        ("slideInUp", "slideInUp"),
        ("slideInDown", "slideInDown"),
        ("slideInLeft", "slideInLeft"),
        ("slideInRight", "slideInRight"),
        ("slideOutUp", "slideOutUp"),
        ("slideOutDown", "slideOutDown"),
        ("slideOutLeft", "slideOutLeft"),
        ("slideOutRight", "slideOutRight"),
        // Bounce
        ("bounce", "bounce"),
        ("bounceIn", "bounceIn"),
        ("bounceOut", "bounceOut"),
        ("bounceInUp", "bounceInUp"),
        ("bounceInDown", "bounceInDown"),
        ("bounceInLeft", "bounceInLeft"),
        ("bounceInRight", "bounceInRight"),
        // Zoom
        ("zoomIn", "zoomIn"),
        ("zoomOut", "zoomOut"),
        ("zoomInUp", "zoomInUp"),
        ("zoomInDown", "zoomInDown"),
        ("zoomInLeft", "zoomInLeft"),
        ("zoomInRight", "zoomInRight"),
        // Rotate
        ("rotateIn", "rotateIn"),
        ("rotateOut", "rotateOut"),
        // Flip
        ("flip", "flip"),
        ("flipInX", "flipInX"),
        ("flipInY", "flipInY"),
        ("flipOutX", "flipOutX"),
        ("flipOutY", "flipOutY"),
        // Back
        ("backInUp", "backInUp"),
        ("backInDown", "backInDown"),
        ("backInLeft", "backInLeft"),
        ("backInRight", "backInRight"),
        // Attention seekers
        ("pulse", "pulse"),
        ("flash", "flash"),
        ("shake", "shakeX"),
        ("shakeX", "shakeX"),
        ("shakeY", "shakeY"),
        ("headShake", "headShake"),
        ("swing", "swing"),
        ("tada", "tada"),
        ("wobble", "wobble"),
        ("jello", "jello"),
        ("heartBeat", "heartBeat"),
        ("rubberBand", "rubberBand"),
    ],
);

/// Animations that bring an element into view.
pub static ENTRANCE_ANIMATIONS: PresetTable = PresetTable::new(
    "entrance",
    &[
        ("fadeIn", "fadeIn"),
        ("fadeInUp", "fadeInUp"),
        ("fadeInDown", "fadeInDown"),
        ("fadeInLeft", "fadeInLeft"),
        ("fadeInRight", "fadeInRight"),
        ("slideInUp", "slideInUp"),
        ("slideInDown", "slideInDown"),
        ("slideInLeft", "slideInLeft"),
        ("slideInRight", "slideInRight"),
        ("bounceIn", "bounceIn"),
        ("bounceInUp", "bounceInUp"),
        ("bounceInDown", "bounceInDown"),
        ("zoomIn", "zoomIn"),
        ("rotateIn", "rotateIn"),
        ("flipInX", "flipInX"),
        ("flipInY", "flipInY"),
        ("backInUp", "backInUp"),
        ("backInDown", "backInDown"),
    ],
);

/// Animations that take an element out of view.
pub static EXIT_ANIMATIONS: PresetTable = PresetTable::new(
    "exit",
    &[
        ("fadeOut", "fadeOut"),
        ("fadeOutUp", "fadeOutUp"),
        ("fadeOutDown", "fadeOutDown"),
        ("fadeOutLeft", "fadeOutLeft"),
        ("fadeOutRight", "fadeOutRight"),
        ("slideOutUp", "slideOutUp"),
        ("slideOutDown", "slideOutDown"),
        ("slideOutLeft", "slideOutLeft"),
        ("slideOutRight", "slideOutRight"),
        ("bounceOut", "bounceOut"),
        ("zoomOut", "zoomOut"),
        ("rotateOut", "rotateOut"),
        ("flipOutX", "flipOutX"),
        ("flipOutY", "flipOutY"),
    ],
);

/// Attention seekers, used by the hover and infinite utilities.
pub static ATTENTION_ANIMATIONS: PresetTable = PresetTable::new(
    "attention",
    &[
        ("bounce", "bounce"),
        ("pulse", "pulse"),
        ("flash", "flash"),
        ("shake", "shakeX"),
        ("shakeX", "shakeX"),
        ("shakeY", "shakeY"),
        ("headShake", "headShake"),
        ("swing", "swing"),
        ("tada", "tada"),
        ("wobble", "wobble"),
        ("jello", "jello"),
        ("heartBeat", "heartBeat"),
        ("rubberBand", "rubberBand"),
    ],
);

/// Semantic speed labels mapped to `animation-duration` literals.
pub static ANIMATION_SPEEDS: PresetTable = PresetTable::new(
    "speeds",
    &[
        ("slower", "3s"),
        ("slow", "2s"),
        ("normal", "1s"),
        ("fast", "500ms"),
        ("faster", "300ms"),
    ],
);

/// Names of all built-in tables, in a stable order.
const TABLE_NAMES: &[&str] = &["presets", "entrance", "exit", "attention", "speeds"];

/// Returns the names of all built-in tables.
pub fn list_tables() -> Vec<&'static str> {
    TABLE_NAMES.to_vec()
}

/// Returns a built-in table by name, or None if not found.
pub fn get_table(name: &str) -> Option<&'static PresetTable> {
    match name {
        "presets" => Some(&ANIMATION_PRESETS),
        "entrance" => Some(&ENTRANCE_ANIMATIONS),
        "exit" => Some(&EXIT_ANIMATIONS),
        "attention" => Some(&ATTENTION_ANIMATIONS),
        "speeds" => Some(&ANIMATION_SPEEDS),
        _ => None,
    }
}

/// The tables whose values name animations (everything except speeds).
pub fn animation_tables() -> [&'static PresetTable; 4] {
    [&ANIMATION_PRESETS, &ENTRANCE_ANIMATIONS, &EXIT_ANIMATIONS, &ATTENTION_ANIMATIONS]
}
