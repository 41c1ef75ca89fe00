//! Animate.css `@keyframes` bodies.
//!
//! Every animation name used by a preset table has an entry here, so generated
//! CSS never references an undefined animation. Stops keep their source order
//! and may use selector lists (`"from, 20%, 53%, to"`).

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One stop of a keyframe rule, e.g. `50% { opacity: 1; }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyframeStop {
    /// Stop selector: `from`, `to`, a percentage, or a comma-joined list
    pub selector: &'static str,
    /// Declarations in source order
    pub declarations: &'static [(&'static str, &'static str)],
}

/// A named `@keyframes` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframes {
    /// Animation identifier referenced by `animation-name`
    pub name: &'static str,
    /// Ordered stops
    pub stops: &'static [KeyframeStop],
}

impl Keyframes {
    /// Render as a pretty-printed `@keyframes` rule.
    ///
    /// # Example
    ///
    /// ```
    /// use animate_preset::keyframes::KEYFRAMES;
    ///
    /// let css = KEYFRAMES.get("fadeIn").unwrap().to_css();
    /// assert!(css.starts_with("@keyframes fadeIn {\n  from {\n    opacity: 0;\n"));
    /// ```
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        self.write_css(&mut out);
        out
    }

    /// Append the pretty-printed rule to `out`.
    pub fn write_css(&self, out: &mut String) {
        out.push_str("@keyframes ");
        out.push_str(self.name);
        out.push_str(" {\n");
        for stop in self.stops {
            out.push_str("  ");
            out.push_str(stop.selector);
            out.push_str(" {\n");
            for (property, value) in stop.declarations {
                out.push_str("    ");
                out.push_str(property);
                out.push_str(": ");
                out.push_str(value);
                out.push_str(";\n");
            }
            out.push_str("  }\n");
        }
        out.push_str("}\n");
    }
}

impl Serialize for KeyframeStop {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for (property, value) in self.declarations {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

impl Serialize for Keyframes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stops.len()))?;
        for stop in self.stops {
            map.serialize_entry(stop.selector, stop)?;
        }
        map.end()
    }
}

/// Lookup table from animation name to its keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyframesTable {
    entries: &'static [Keyframes],
}

impl KeyframesTable {
    /// Wrap a static list of keyframe rules.
    pub const fn new(entries: &'static [Keyframes]) -> Self {
        Self { entries }
    }

    /// Look up keyframes by animation name (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&'static Keyframes> {
        self.entries.iter().find(|k| k.name == name)
    }

    /// Check whether a rule exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Animation names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|k| k.name)
    }

    /// All rules in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Keyframes> {
        self.entries.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for KeyframesTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for keyframes in self.entries {
            map.serialize_entry(keyframes.name, keyframes)?;
        }
        map.end()
    }
}

macro_rules! keyframes {
    ($name:literal, $($selector:literal => { $($property:literal : $value:literal),* $(,)? }),* $(,)?) => {
        Keyframes {
            name: $name,
            stops: &[$(KeyframeStop {
                selector: $selector,
                declarations: &[$(($property, $value)),*],
            }),*],
        }
    };
}

/// Animate.css keyframes for every animation in the preset tables.
pub static KEYFRAMES: KeyframesTable = KeyframesTable {
    entries: &[
        // Attention seekers
        keyframes!("bounce",
            "from, 20%, 53%, to" => {
                "animation-timing-function": "cubic-bezier(0.215, 0.61, 0.355, 1)",
                "transform": "translate3d(0, 0, 0)",
            },
            "40%, 43%" => {
                "animation-timing-function": "cubic-bezier(0.755, 0.05, 0.855, 0.06)",
                "transform": "translate3d(0, -30px, 0) scaleY(1.1)",
            },
            "70%" => {
                "animation-timing-function": "cubic-bezier(0.755, 0.05, 0.855, 0.06)",
                "transform": "translate3d(0, -15px, 0) scaleY(1.05)",
            },
            "80%" => {
                "transition-timing-function": "cubic-bezier(0.215, 0.61, 0.355, 1)",
                "transform": "translate3d(0, 0, 0) scaleY(0.95)",
            },
            "90%" => { "transform": "translate3d(0, -4px, 0) scaleY(1.02)" },
        ),
        keyframes!("flash",
            "from, 50%, to" => { "opacity": "1" },
            "25%, 75%" => { "opacity": "0" },
        ),
        keyframes!("pulse",
            "from" => { "transform": "scale3d(1, 1, 1)" },
            "50%" => { "transform": "scale3d(1.05, 1.05, 1.05)" },
            "to" => { "transform": "scale3d(1, 1, 1)" },
        ),
        keyframes!("rubberBand",
            "from" => { "transform": "scale3d(1, 1, 1)" },
            "30%" => { "transform": "scale3d(1.25, 0.75, 1)" },
            "40%" => { "transform": "scale3d(0.75, 1.25, 1)" },
            "50%" => { "transform": "scale3d(1.15, 0.85, 1)" },
            "65%" => { "transform": "scale3d(0.95, 1.05, 1)" },
            "75%" => { "transform": "scale3d(1.05, 0.95, 1)" },
            "to" => { "transform": "scale3d(1, 1, 1)" },
        ),
        keyframes!("shakeX",
            "from, to" => { "transform": "translate3d(0, 0, 0)" },
            "10%, 30%, 50%, 70%, 90%" => { "transform": "translate3d(-10px, 0, 0)" },
            "20%, 40%, 60%, 80%" => { "transform": "translate3d(10px, 0, 0)" },
        ),
        keyframes!("shakeY",
            "from, to" => { "transform": "translate3d(0, 0, 0)" },
            "10%, 30%, 50%, 70%, 90%" => { "transform": "translate3d(0, -10px, 0)" },
            "20%, 40%, 60%, 80%" => { "transform": "translate3d(0, 10px, 0)" },
        ),
        keyframes!("headShake",
            "0%" => { "transform": "translateX(0)" },
            "6.5%" => { "transform": "translateX(-6px) rotateY(-9deg)" },
            "18.5%" => { "transform": "translateX(5px) rotateY(7deg)" },
            "31.5%" => { "transform": "translateX(-3px) rotateY(-5deg)" },
            "43.5%" => { "transform": "translateX(2px) rotateY(3deg)" },
            "50%" => { "transform": "translateX(0)" },
        ),
        keyframes!("swing",
            "20%" => { "transform": "rotate3d(0, 0, 1, 15deg)" },
            "40%" => { "transform": "rotate3d(0, 0, 1, -10deg)" },
            "60%" => { "transform": "rotate3d(0, 0, 1, 5deg)" },
            "80%" => { "transform": "rotate3d(0, 0, 1, -5deg)" },
            "to" => { "transform": "rotate3d(0, 0, 1, 0deg)" },
        ),
        keyframes!("tada",
            "from" => { "transform": "scale3d(1, 1, 1)" },
            "10%, 20%" => { "transform": "scale3d(0.9, 0.9, 0.9) rotate3d(0, 0, 1, -3deg)" },
            "30%, 50%, 70%, 90%" => { "transform": "scale3d(1.1, 1.1, 1.1) rotate3d(0, 0, 1, 3deg)" },
            "40%, 60%, 80%" => { "transform": "scale3d(1.1, 1.1, 1.1) rotate3d(0, 0, 1, -3deg)" },
            "to" => { "transform": "scale3d(1, 1, 1)" },
        ),
        keyframes!("wobble",
            "from" => { "transform": "translate3d(0, 0, 0)" },
            "15%" => { "transform": "translate3d(-25%, 0, 0) rotate3d(0, 0, 1, -5deg)" },
            "30%" => { "transform": "translate3d(20%, 0, 0) rotate3d(0, 0, 1, 3deg)" },
            "45%" => { "transform": "translate3d(-15%, 0, 0) rotate3d(0, 0, 1, -3deg)" },
            "60%" => { "transform": "translate3d(10%, 0, 0) rotate3d(0, 0, 1, 2deg)" },
            "75%" => { "transform": "translate3d(-5%, 0, 0) rotate3d(0, 0, 1, -1deg)" },
            "to" => { "transform": "translate3d(0, 0, 0)" },
        ),
        keyframes!("jello",
            "from, 11.1%, to" => { "transform": "translate3d(0, 0, 0)" },
            "22.2%" => { "transform": "skewX(-12.5deg) skewY(-12.5deg)" },
            "33.3%" => { "transform": "skewX(6.25deg) skewY(6.25deg)" },
            "44.4%" => { "transform": "skewX(-3.125deg) skewY(-3.125deg)" },
            "55.5%" => { "transform": "skewX(1.5625deg) skewY(1.5625deg)" },
            "66.6%" => { "transform": "skewX(-0.78125deg) skewY(-0.78125deg)" },
            "77.7%" => { "transform": "skewX(0.390625deg) skewY(0.390625deg)" },
            "88.8%" => { "transform": "skewX(-0.1953125deg) skewY(-0.1953125deg)" },
        ),
        keyframes!("heartBeat",
            "0%" => { "transform": "scale(1)" },
            "14%" => { "transform": "scale(1.3)" },
            "28%" => { "transform": "scale(1)" },
            "42%" => { "transform": "scale(1.3)" },
            "70%" => { "transform": "scale(1)" },
        ),
        // Back entrances
        keyframes!("backInDown",
            "0%" => { "transform": "translateY(-1200px) scale(0.7)", "opacity": "0.7" },
            "80%" => { "transform": "translateY(0px) scale(0.7)", "opacity": "0.7" },
            "100%" => { "transform": "scale(1)", "opacity": "1" },
        ),
        keyframes!("backInLeft",
            "0%" => { "transform": "translateX(-2000px) scale(0.7)", "opacity": "0.7" },
            "80%" => { "transform": "translateX(0px) scale(0.7)", "opacity": "0.7" },
            "100%" => { "transform": "scale(1)", "opacity": "1" },
        ),
        keyframes!("backInRight",
            "0%" => { "transform": "translateX(2000px) scale(0.7)", "opacity": "0.7" },
            "80%" => { "transform": "translateX(0px) scale(0.7)", "opacity": "0.7" },
            "100%" => { "transform": "scale(1)", "opacity": "1" },
        ),
        keyframes!("backInUp",
            "0%" => { "transform": "translateY(1200px) scale(0.7)", "opacity": "0.7" },
            "80%" => { "transform": "translateY(0px) scale(0.7)", "opacity": "0.7" },
            "100%" => { "transform": "scale(1)", "opacity": "1" },
        ),
        // Bouncing entrances
        keyframes!("bounceIn",
            "from, 20%, 40%, 60%, 80%, to" => {
                "animation-timing-function": "cubic-bezier(0.215, 0.61, 0.355, 1)",
            },
            "0%" => { "opacity": "0", "transform": "scale3d(0.3, 0.3, 0.3)" },
            "20%" => { "transform": "scale3d(1.1, 1.1, 1.1)" },
            "40%" => { "transform": "scale3d(0.9, 0.9, 0.9)" },
            "60%" => { "opacity": "1", "transform": "scale3d(1.03, 1.03, 1.03)" },
            "80%" => { "transform": "scale3d(0.97, 0.97, 0.97)" },
            "to" => { "opacity": "1", "transform": "scale3d(1, 1, 1)" },
        ),
        keyframes!("bounceInDown",
            "from, 60%, 75%, 90%, to" => {
                "animation-timing-function": "cubic-bezier(0.215, 0.61, 0.355, 1)",
            },
            "0%" => { "opacity": "0", "transform": "translate3d(0, -3000px, 0) scaleY(3)" },
            "60%" => { "opacity": "1", "transform": "translate3d(0, 25px, 0) scaleY(0.9)" },
            "75%" => { "transform": "translate3d(0, -10px, 0) scaleY(0.95)" },
            "90%" => { "transform": "translate3d(0, 5px, 0) scaleY(0.985)" },
            "to" => { "transform": "translate3d(0, 0, 0)" },
        ),
        keyframes!("bounceInLeft",
            "from, 60%, 75%, 90%, to" => {
                "animation-timing-function": "cubic-bezier(0.215, 0.61, 0.355, 1)",
            },
            "0%" => { "opacity": "0", "transform": "translate3d(-3000px, 0, 0) scaleX(3)" },
            "60%" => { "opacity": "1", "transform": "translate3d(25px, 0, 0) scaleX(1)" },
            "75%" => { "transform": "translate3d(-10px, 0, 0) scaleX(0.98)" },
            "90%" => { "transform": "translate3d(5px, 0, 0) scaleX(0.995)" },
            "to" => { "transform": "translate3d(0, 0, 0)" },
        ),
        keyframes!("bounceInRight",
            "from, 60%, 75%, 90%, to" => {
                "animation-timing-function": "cubic-bezier(0.215, 0.61, 0.355, 1)",
            },
            "from" => { "opacity": "0", "transform": "translate3d(3000px, 0, 0) scaleX(3)" },
            "60%" => { "opacity": "1", "transform": "translate3d(-25px, 0, 0) scaleX(1)" },
            "75%" => { "transform": "translate3d(10px, 0, 0) scaleX(0.98)" },
            "90%" => { "transform": "translate3d(-5px, 0, 0) scaleX(0.995)" },
            "to" => { "transform": "translate3d(0, 0, 0)" },
        ),
        keyframes!("bounceInUp",
            "from, 60%, 75%, 90%, to" => {
                "animation-timing-function": "cubic-bezier(0.215, 0.61, 0.355, 1)",
            },
            "from" => { "opacity": "0", "transform": "translate3d(0, 3000px, 0) scaleY(5)" },
            "60%" => { "opacity": "1", "transform": "translate3d(0, -20px, 0) scaleY(0.9)" },
            "75%" => { "transform": "translate3d(0, 10px, 0) scaleY(0.95)" },
            "90%" => { "transform": "translate3d(0, -5px, 0) scaleY(0.985)" },
            "to" => { "transform": "translate3d(0, 0, 0)" },
        ),
        // Bouncing exits
        keyframes!("bounceOut",
            "20%" => { "transform": "scale3d(0.9, 0.9, 0.9)" },
            "50%, 55%" => { "opacity": "1", "transform": "scale3d(1.1, 1.1, 1.1)" },
            "to" => { "opacity": "0", "transform": "scale3d(0.3, 0.3, 0.3)" },
        ),
        // Fading entrances
        keyframes!("fadeIn",
            "from" => { "opacity": "0" },
            "to" => { "opacity": "1" },
        ),
        keyframes!("fadeInDown",
            "from" => { "opacity": "0", "transform": "translate3d(0, -100%, 0)" },
            "to" => { "opacity": "1", "transform": "translate3d(0, 0, 0)" },
        ),
        keyframes!("fadeInLeft",
            "from" => { "opacity": "0", "transform": "translate3d(-100%, 0, 0)" },
            "to" => { "opacity": "1", "transform": "translate3d(0, 0, 0)" },
        ),
        keyframes!("fadeInRight",
            "from" => { "opacity": "0", "transform": "translate3d(100%, 0, 0)" },
            "to" => { "opacity": "1", "transform": "translate3d(0, 0, 0)" },
        ),
        keyframes!("fadeInUp",
            "from" => { "opacity": "0", "transform": "translate3d(0, 100%, 0)" },
            "to" => { "opacity": "1", "transform": "translate3d(0, 0, 0)" },
        ),
        // Fading exits
        keyframes!("fadeOut",
            "from" => { "opacity": "1" },
            "to" => { "opacity": "0" },
        ),
        keyframes!("fadeOutDown",
            "from" => { "opacity": "1" },
            "to" => { "opacity": "0", "transform": "translate3d(0, 100%, 0)" },
        ),
        keyframes!("fadeOutLeft",
            "from" => { "opacity": "1" },
            "to" => { "opacity": "0", "transform": "translate3d(-100%, 0, 0)" },
        ),
        keyframes!("fadeOutRight",
            "from" => { "opacity": "1" },
            "to" => { "opacity": "0", "transform": "translate3d(100%, 0, 0)" },
        ),
        keyframes!("fadeOutUp",
            "from" => { "opacity": "1" },
            "to" => { "opacity": "0", "transform": "translate3d(0, -100%, 0)" },
        ),
        // Flippers
        keyframes!("flip",
            "from" => {
                "transform": "perspective(400px) scale3d(1, 1, 1) translate3d(0, 0, 0) rotate3d(0, 1, 0, -360deg)",
                "animation-timing-function": "ease-out",
            },
            "40%" => {
                "transform": "perspective(400px) scale3d(1, 1, 1) translate3d(0, 0, 150px) rotate3d(0, 1, 0, -190deg)",
                "animation-timing-function": "ease-out",
            },
            "50%" => {
                "transform": "perspective(400px) scale3d(1, 1, 1) translate3d(0, 0, 150px) rotate3d(0, 1, 0, -170deg)",
                "animation-timing-function": "ease-in",
            },
            "80%" => {
                "transform": "perspective(400px) scale3d(0.95, 0.95, 0.95) translate3d(0, 0, 0) rotate3d(0, 1, 0, 0deg)",
                "animation-timing-function": "ease-in",
            },
            "to" => {
                "transform": "perspective(400px) scale3d(1, 1, 1) translate3d(0, 0, 0) rotate3d(0, 1, 0, 0deg)",
                "animation-timing-function": "ease-in",
            },
        ),
        keyframes!("flipInX",
            "from" => {
                "transform": "perspective(400px) rotate3d(1, 0, 0, 90deg)",
                "animation-timing-function": "ease-in",
                "opacity": "0",
            },
            "40%" => {
                "transform": "perspective(400px) rotate3d(1, 0, 0, -20deg)",
                "animation-timing-function": "ease-in",
            },
            "60%" => { "transform": "perspective(400px) rotate3d(1, 0, 0, 10deg)", "opacity": "1" },
            "80%" => { "transform": "perspective(400px) rotate3d(1, 0, 0, -5deg)" },
            "to" => { "transform": "perspective(400px)" },
        ),
        keyframes!("flipInY",
            "from" => {
                "transform": "perspective(400px) rotate3d(0, 1, 0, 90deg)",
                "animation-timing-function": "ease-in",
                "opacity": "0",
            },
            "40%" => {
                "transform": "perspective(400px) rotate3d(0, 1, 0, -20deg)",
                "animation-timing-function": "ease-in",
            },
            "60%" => { "transform": "perspective(400px) rotate3d(0, 1, 0, 10deg)", "opacity": "1" },
            "80%" => { "transform": "perspective(400px) rotate3d(0, 1, 0, -5deg)" },
            "to" => { "transform": "perspective(400px)" },
        ),
        keyframes!("flipOutX",
            "from" => { "transform": "perspective(400px)" },
            "30%" => { "transform": "perspective(400px) rotate3d(1, 0, 0, -20deg)", "opacity": "1" },
            "to" => { "transform": "perspective(400px) rotate3d(1, 0, 0, 90deg)", "opacity": "0" },
        ),
        keyframes!("flipOutY",
            "from" => { "transform": "perspective(400px)" },
            "30%" => { "transform": "perspective(400px) rotate3d(0, 1, 0, -15deg)", "opacity": "1" },
            "to" => { "transform": "perspective(400px) rotate3d(0, 1, 0, 90deg)", "opacity": "0" },
        ),
        // Rotating
        keyframes!("rotateIn",
            "from" => { "transform": "rotate3d(0, 0, 1, -200deg)", "opacity": "0" },
            "to" => { "transform": "translate3d(0, 0, 0)", "opacity": "1" },
        ),
        keyframes!("rotateOut",
            "from" => { "opacity": "1" },
            "to" => { "transform": "rotate3d(0, 0, 1, 200deg)", "opacity": "0" },
        ),
        // Zooming entrances
        keyframes!("zoomIn",
            "from" => { "opacity": "0", "transform": "scale3d(0.3, 0.3, 0.3)" },
            "50%" => { "opacity": "1" },
        ),
        keyframes!("zoomInDown",
            "from" => {
                "opacity": "0",
                "transform": "scale3d(0.1, 0.1, 0.1) translate3d(0, -1000px, 0)",
                "animation-timing-function": "cubic-bezier(0.55, 0.055, 0.675, 0.19)",
            },
            "60%" => {
                "opacity": "1",
                "transform": "scale3d(0.475, 0.475, 0.475) translate3d(0, 60px, 0)",
                "animation-timing-function": "cubic-bezier(0.175, 0.885, 0.32, 1)",
            },
        ),
        keyframes!("zoomInLeft",
            "from" => {
                "opacity": "0",
                "transform": "scale3d(0.1, 0.1, 0.1) translate3d(-1000px, 0, 0)",
                "animation-timing-function": "cubic-bezier(0.55, 0.055, 0.675, 0.19)",
            },
            "60%" => {
                "opacity": "1",
                "transform": "scale3d(0.475, 0.475, 0.475) translate3d(10px, 0, 0)",
                "animation-timing-function": "cubic-bezier(0.175, 0.885, 0.32, 1)",
            },
        ),
        keyframes!("zoomInRight",
            "from" => {
                "opacity": "0",
                "transform": "scale3d(0.1, 0.1, 0.1) translate3d(1000px, 0, 0)",
                "animation-timing-function": "cubic-bezier(0.55, 0.055, 0.675, 0.19)",
            },
            "60%" => {
                "opacity": "1",
                "transform": "scale3d(0.475, 0.475, 0.475) translate3d(-10px, 0, 0)",
                "animation-timing-function": "cubic-bezier(0.175, 0.885, 0.32, 1)",
            },
        ),
        keyframes!("zoomInUp",
            "from" => {
                "opacity": "0",
                "transform": "scale3d(0.1, 0.1, 0.1) translate3d(0, 1000px, 0)",
                "animation-timing-function": "cubic-bezier(0.55, 0.055, 0.675, 0.19)",
            },
            "60%" => {
                "opacity": "1",
                "transform": "scale3d(0.475, 0.475, 0.475) translate3d(0, -60px, 0)",
                "animation-timing-function": "cubic-bezier(0.175, 0.885, 0.32, 1)",
            },
        ),
        // Zooming exits
        keyframes!("zoomOut",
            "from" => { "opacity": "1" },
            "50%" => { "opacity": "0", "transform": "scale3d(0.3, 0.3, 0.3)" },
            "to" => { "opacity": "0" },
        ),
        // Sliding entrances
        keyframes!("slideInDown",
            "from" => { "transform": "translate3d(0, -100%, 0)", "visibility": "visible" },
            "to" => { "transform": "translate3d(0, 0, 0)" },
        ),
        keyframes!("slideInLeft",
            "from" => { "transform": "translate3d(-100%, 0, 0)", "visibility": "visible" },
            "to" => { "transform": "translate3d(0, 0, 0)" },
        ),
        keyframes!("slideInRight",
            "from" => { "transform": "translate3d(100%, 0, 0)", "visibility": "visible" },
            "to" => { "transform": "translate3d(0, 0, 0)" },
        ),
        keyframes!("slideInUp",
            "from" => { "transform": "translate3d(0, 100%, 0)", "visibility": "visible" },
            "to" => { "transform": "translate3d(0, 0, 0)" },
        ),
        // Sliding exits
        keyframes!("slideOutDown",
            "from" => { "transform": "translate3d(0, 0, 0)" },
            "to" => { "visibility": "hidden", "transform": "translate3d(0, 100%, 0)" },
        ),
        keyframes!("slideOutLeft",
            "from" => { "transform": "translate3d(0, 0, 0)" },
            "to" => { "visibility": "hidden", "transform": "translate3d(-100%, 0, 0)" },
        ),
        keyframes!("slideOutRight",
            "from" => { "transform": "translate3d(0, 0, 0)" },
            "to" => { "visibility": "hidden", "transform": "translate3d(100%, 0, 0)" },
        ),
        keyframes!("slideOutUp",
            "from" => { "transform": "translate3d(0, 0, 0)" },
            "to" => { "visibility": "hidden", "transform": "translate3d(0, -100%, 0)" },
        ),
    ],
};
