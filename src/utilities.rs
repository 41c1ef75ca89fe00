//! Animation utilities: class-name prefix, accepted values, and transform.
//!
//! Each utility is described by a [`UtilityDescriptor`], an immutable record
//! holding a plain function pointer. [`Utility`] gives static dispatch over the
//! fixed descriptor set.
//!
//! Transforms are total: they never validate their input. Values from a fixed
//! table are resolved through that table (so `shake` becomes `shakeX` and
//! `fast` becomes `500ms`), anything else is substituted verbatim. Domain
//! membership is checked separately by [`Utility::apply`], which is what a
//! CSS-generation host calls before using a value.
//!
//! # Example
//!
//! ```
//! use animate_preset::utilities::Utility;
//!
//! let bundle = Utility::Animate.transform("fadeIn");
//! assert_eq!(bundle.text("animation-name"), Some("fadeIn"));
//! assert_eq!(bundle.text("animation-duration"), Some("1s"));
//! assert_eq!(bundle.text("animation-fill-mode"), Some("both"));
//!
//! let speed = Utility::AnimateSpeed.transform("fast");
//! assert_eq!(speed.text("animation-duration"), Some("500ms"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::keyframes::KEYFRAMES;
use crate::presets::{
    PresetTable, ANIMATION_PRESETS, ANIMATION_SPEEDS, ATTENTION_ANIMATIONS, ENTRANCE_ANIMATIONS,
    EXIT_ANIMATIONS,
};
use crate::style::StyleBundle;
use crate::suggest::{closest_matches, did_you_mean, levenshtein_distance};

/// Media query that neutralizes motion for users who ask for less of it, and in print.
pub const REDUCED_MOTION_QUERY: &str = "@media (prefers-reduced-motion: reduce), print";

/// Near-zero duration used by the reduced-motion override. Kept at `1ms`
/// rather than `0s` so `animationend` still fires.
pub const REDUCED_MOTION_DURATION: &str = "1ms !important";

/// Selector key used by the hover utility.
pub const HOVER_SELECTOR: &str = "&:hover";

/// Default duration applied by the animation utilities.
pub const DEFAULT_DURATION: &str = "1s";

/// Values a utility accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Keys of a fixed preset table
    Fixed(&'static PresetTable),
    /// Any animation name with a keyframes definition
    Keyframes,
    /// Any string
    OpenString,
}

impl Domain {
    /// Check value-set membership.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Domain::Fixed(table) => table.contains_key(value),
            Domain::Keyframes => KEYFRAMES.contains(value),
            Domain::OpenString => true,
        }
    }

    /// The finite set of accepted values, or None for an open domain.
    pub fn candidates(&self) -> Option<Vec<&'static str>> {
        match self {
            Domain::Fixed(table) => Some(table.keys().collect()),
            Domain::Keyframes => Some(KEYFRAMES.names().collect()),
            Domain::OpenString => None,
        }
    }

    /// Short human-readable description, e.g. `entrance (18 values)`.
    pub fn describe(&self) -> String {
        match self {
            Domain::Fixed(table) => format!("{} ({} values)", table.name(), table.len()),
            Domain::Keyframes => format!("keyframes ({} values)", KEYFRAMES.len()),
            Domain::OpenString => "string".to_string(),
        }
    }
}

impl Serialize for Domain {
    /// Fixed tables serialize as the table object, keyframes as the string
    /// `"keyframes"`, open strings as `{"type": "string"}`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Domain::Fixed(table) => table.serialize(serializer),
            Domain::Keyframes => serializer.serialize_str("keyframes"),
            Domain::OpenString => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", "string")?;
                map.end()
            }
        }
    }
}

/// Immutable description of one utility.
#[derive(Clone, Copy)]
pub struct UtilityDescriptor {
    /// Registration key (e.g. `animateIn`)
    pub key: &'static str,
    /// Generated class-name prefix (e.g. `animate-in`)
    pub class_name: &'static str,
    /// Accepted values
    pub values: Domain,
    /// CSS property for single-property shorthand utilities
    pub property: Option<&'static str>,
    /// Pure value-to-style mapping
    pub transform: fn(&str) -> StyleBundle,
}

impl fmt::Debug for UtilityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UtilityDescriptor")
            .field("key", &self.key)
            .field("class_name", &self.class_name)
            .field("values", &self.values)
            .field("property", &self.property)
            .finish_non_exhaustive()
    }
}

impl Serialize for UtilityDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.property.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("className", self.class_name)?;
        map.serialize_entry("values", &self.values)?;
        if let Some(property) = self.property {
            map.serialize_entry("property", property)?;
        }
        map.end()
    }
}

/// Error type for host-side utility lookups and value validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum UtilityError {
    /// Name matches no utility key or class name
    #[error("unknown utility '{name}'{}", did_you_mean(.suggestions))]
    UnknownUtility { name: String, suggestions: Vec<String> },
    /// Value is outside the utility's accepted domain
    #[error("'{value}' is not a valid value for {utility}{}", did_you_mean(.suggestions))]
    UnknownValue { utility: &'static str, value: String, suggestions: Vec<String> },
}

/// The fixed set of animation utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Utility {
    /// Any preset animation
    Animate,
    /// Entrance animations
    AnimateIn,
    /// Exit animations; leaves the element hidden afterwards
    AnimateOut,
    /// Attention seekers, played while hovered
    AnimateOnHover,
    /// Attention seekers, looped forever
    AnimateInfinite,
    /// Duration from a speed label
    AnimateSpeed,
    /// Raw `animation-delay`
    AnimateDelay,
    /// Raw `animation-iteration-count`
    AnimateCount,
    /// Raw `animation-name` restricted to known keyframes
    AnimationName,
    /// `animation-iteration-count` shorthand utility
    AnimationRepeat,
}

impl Utility {
    /// All utilities in registration order.
    pub const ALL: [Utility; 10] = [
        Utility::Animate,
        Utility::AnimateIn,
        Utility::AnimateOut,
        Utility::AnimateOnHover,
        Utility::AnimateInfinite,
        Utility::AnimateSpeed,
        Utility::AnimateDelay,
        Utility::AnimateCount,
        Utility::AnimationName,
        Utility::AnimationRepeat,
    ];

    /// The descriptor backing this utility.
    pub fn descriptor(self) -> &'static UtilityDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Registration key (e.g. `animateOnHover`).
    pub fn key(self) -> &'static str {
        self.descriptor().key
    }

    /// Class-name prefix (e.g. `animate-hover`).
    pub fn class_name(self) -> &'static str {
        self.descriptor().class_name
    }

    /// Accepted values.
    pub fn values(self) -> Domain {
        self.descriptor().values
    }

    /// Single-property modifiers (speed, delay, count, repeat) that refine an
    /// animation set by another utility.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Utility::AnimateSpeed
                | Utility::AnimateDelay
                | Utility::AnimateCount
                | Utility::AnimationRepeat
        )
    }

    /// Whichever of the key or class name is closer to `query`.
    fn nearest_name(self, query: &str) -> &'static str {
        let query = query.to_lowercase();
        let by_class = levenshtein_distance(&query, &self.class_name().to_lowercase());
        let by_key = levenshtein_distance(&query, &self.key().to_lowercase());
        if by_class < by_key {
            self.class_name()
        } else {
            self.key()
        }
    }

    /// Map a value to its style bundle. Never fails.
    pub fn transform(self, value: &str) -> StyleBundle {
        (self.descriptor().transform)(value)
    }

    /// Validate `value` against the domain, then transform it.
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError::UnknownValue`] when the value is outside a
    /// finite domain.
    pub fn apply(self, value: &str) -> Result<StyleBundle, UtilityError> {
        let domain = self.values();
        if !domain.accepts(value) {
            let suggestions = domain
                .candidates()
                .map(|candidates| closest_matches(value, candidates, 3))
                .unwrap_or_default();
            return Err(UtilityError::UnknownValue {
                utility: self.key(),
                value: value.to_string(),
                suggestions: suggestions.into_iter().map(str::to_string).collect(),
            });
        }
        Ok(self.transform(value))
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Utility {
    type Err = UtilityError;

    /// Accepts either the registration key (`animateIn`) or the class name
    /// (`animate-in`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Utility::ALL.into_iter().find(|u| u.key() == s || u.class_name() == s).ok_or_else(|| {
            // One name per utility
            let names = Utility::ALL.iter().map(|u| u.nearest_name(s));
            UtilityError::UnknownUtility {
                name: s.to_string(),
                suggestions: closest_matches(s, names, 3).into_iter().map(str::to_string).collect(),
            }
        })
    }
}

/// Descriptor table, indexed by `Utility as usize`.
pub static DESCRIPTORS: [UtilityDescriptor; 10] = [
    UtilityDescriptor {
        key: "animate",
        class_name: "animate",
        values: Domain::Fixed(&ANIMATION_PRESETS),
        property: None,
        transform: transform_animate,
    },
    UtilityDescriptor {
        key: "animateIn",
        class_name: "animate-in",
        values: Domain::Fixed(&ENTRANCE_ANIMATIONS),
        property: None,
        transform: transform_animate_in,
    },
    UtilityDescriptor {
        key: "animateOut",
        class_name: "animate-out",
        values: Domain::Fixed(&EXIT_ANIMATIONS),
        property: None,
        transform: transform_animate_out,
    },
    UtilityDescriptor {
        key: "animateOnHover",
        class_name: "animate-hover",
        values: Domain::Fixed(&ATTENTION_ANIMATIONS),
        property: None,
        transform: transform_animate_on_hover,
    },
    UtilityDescriptor {
        key: "animateInfinite",
        class_name: "animate-infinite",
        values: Domain::Fixed(&ATTENTION_ANIMATIONS),
        property: None,
        transform: transform_animate_infinite,
    },
    UtilityDescriptor {
        key: "animateSpeed",
        class_name: "animate-speed",
        values: Domain::Fixed(&ANIMATION_SPEEDS),
        property: None,
        transform: transform_animate_speed,
    },
    UtilityDescriptor {
        key: "animateDelay",
        class_name: "animate-delay",
        values: Domain::OpenString,
        property: None,
        transform: transform_animate_delay,
    },
    UtilityDescriptor {
        key: "animateCount",
        class_name: "animate-count",
        values: Domain::OpenString,
        property: None,
        transform: transform_animate_count,
    },
    UtilityDescriptor {
        key: "animationName",
        class_name: "animation-name",
        values: Domain::Keyframes,
        property: None,
        transform: transform_animation_name,
    },
    UtilityDescriptor {
        key: "animationRepeat",
        class_name: "animation-repeat",
        values: Domain::OpenString,
        property: Some("animation-iteration-count"),
        transform: transform_animation_repeat,
    },
];

/// Fill mode plus the reduced-motion / print override block.
pub fn base_animation_styles() -> StyleBundle {
    let reduced_motion = StyleBundle::new()
        .with("animation-duration", REDUCED_MOTION_DURATION)
        .with("transition-duration", REDUCED_MOTION_DURATION)
        .with("animation-iteration-count", "1 !important");

    StyleBundle::new()
        .with("animation-fill-mode", "both")
        .with(REDUCED_MOTION_QUERY, reduced_motion)
}

fn animation(name: &str) -> StyleBundle {
    StyleBundle::new().with("animation-name", name).with("animation-duration", DEFAULT_DURATION)
}

fn animation_with_base(name: &str) -> StyleBundle {
    let mut bundle = animation(name);
    bundle.extend(&base_animation_styles());
    bundle
}

fn transform_animate(value: &str) -> StyleBundle {
    animation_with_base(ANIMATION_PRESETS.resolve(value))
}

fn transform_animate_in(value: &str) -> StyleBundle {
    animation_with_base(ENTRANCE_ANIMATIONS.resolve(value))
}

fn transform_animate_out(value: &str) -> StyleBundle {
    // Without this the element snaps back into view when the animation ends
    animation_with_base(EXIT_ANIMATIONS.resolve(value)).with("opacity", 0.0)
}

fn transform_animate_on_hover(value: &str) -> StyleBundle {
    StyleBundle::new().with(HOVER_SELECTOR, animation_with_base(ATTENTION_ANIMATIONS.resolve(value)))
}

fn transform_animate_infinite(value: &str) -> StyleBundle {
    let mut bundle = animation(ATTENTION_ANIMATIONS.resolve(value));
    bundle.set("animation-iteration-count", "infinite");
    bundle.extend(&base_animation_styles());
    bundle
}

fn transform_animate_speed(value: &str) -> StyleBundle {
    StyleBundle::new().with("animation-duration", ANIMATION_SPEEDS.resolve(value))
}

fn transform_animate_delay(value: &str) -> StyleBundle {
    StyleBundle::new().with("animation-delay", value)
}

fn transform_animate_count(value: &str) -> StyleBundle {
    StyleBundle::new().with("animation-iteration-count", value)
}

fn transform_animation_name(value: &str) -> StyleBundle {
    StyleBundle::new().with("animation-name", value)
}

fn transform_animation_repeat(value: &str) -> StyleBundle {
    StyleBundle::new().with("animation-iteration-count", value)
}
