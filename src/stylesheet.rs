//! Stylesheet emission.
//!
//! Turns `(utility, value)` usages into atomic CSS classes, the way a
//! utility-first host would after registering the preset. Each usage becomes
//! one class; the style bundle is flattened into plain rules (at-rule keys
//! wrap, `&` keys substitute the class selector), preceded by the referenced
//! `@keyframes`. Single-property modifiers (`animate-speed` and friends)
//! are emitted after the animation classes so they win at equal
//! specificity. Declaration values that could close the rule are refused,
//! and the result is parsed with lightningcss.

use std::fmt::Write as _;

use clap::ValueEnum;
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keyframes::{Keyframes, KEYFRAMES};
use crate::style::{StyleBundle, StyleValue};
use crate::utilities::{Utility, UtilityError};

/// Which `@keyframes` rules to include in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeyframesMode {
    /// Every rule in the keyframes table
    All,
    /// Only rules referenced through `animation-name`
    #[default]
    Used,
    /// No keyframes at all
    None,
}

impl std::fmt::Display for KeyframesMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyframesMode::All => write!(f, "all"),
            KeyframesMode::Used => write!(f, "used"),
            KeyframesMode::None => write!(f, "none"),
        }
    }
}

impl std::str::FromStr for KeyframesMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(KeyframesMode::All),
            "used" => Ok(KeyframesMode::Used),
            "none" => Ok(KeyframesMode::None),
            _ => Err(format!("unknown keyframes mode '{}' (expected all, used or none)", s)),
        }
    }
}

/// Options controlling class naming and output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetOptions {
    /// Prepended to every class name
    pub prefix: String,
    /// Between the utility class name and the value
    pub separator: String,
    /// Keyframes inclusion
    pub keyframes: KeyframesMode,
    /// Emit lightningcss-minified CSS
    pub minify: bool,
    /// Reject values outside a utility's domain
    pub strict: bool,
}

impl Default for StylesheetOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            separator: "_".to_string(),
            keyframes: KeyframesMode::Used,
            minify: false,
            strict: true,
        }
    }
}

/// Error type for stylesheet emission
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StylesheetError {
    /// A usage was rejected in strict mode
    #[error(transparent)]
    Utility(#[from] UtilityError),
    /// A declaration value would break out of its rule
    #[error("value '{value}' for {property} in .{class_name} may not contain ';', '{{', '}}' or '/*'")]
    UnsafeValue { class_name: String, property: String, value: String },
    /// lightningcss refused the generated CSS
    #[error("generated CSS is invalid: {0}")]
    Css(String),
    /// Requested keyframes that do not exist
    #[error("no @keyframes for {}", .0.join(", "))]
    UnknownKeyframes(Vec<String>),
}

/// One emitted class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmittedClass {
    /// Class name without the leading dot and unescaped
    pub class_name: String,
    /// Utility key
    pub utility: &'static str,
    /// Value as written in the usage
    pub value: String,
    /// Bundle the class was generated from
    pub styles: StyleBundle,
}

/// Result of [`StylesheetBuilder::build`].
#[derive(Debug, Clone, Serialize)]
pub struct Stylesheet {
    /// Final CSS text
    pub css: String,
    /// Emitted classes, in usage order
    pub classes: Vec<EmittedClass>,
    /// Names of the included `@keyframes` rules
    pub keyframes: Vec<&'static str>,
    /// Non-fatal findings (lenient passthrough, missing keyframes)
    pub warnings: Vec<String>,
}

/// Collects usages and emits a stylesheet.
///
/// # Example
///
/// ```
/// use animate_preset::stylesheet::{StylesheetBuilder, StylesheetOptions};
/// use animate_preset::utilities::Utility;
///
/// let mut builder = StylesheetBuilder::new(StylesheetOptions::default());
/// builder.add(Utility::AnimateIn, "fadeIn");
/// let sheet = builder.build().unwrap();
/// assert!(sheet.css.contains(".animate-in_fadeIn"));
/// assert!(sheet.css.contains("@keyframes fadeIn"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StylesheetBuilder {
    options: StylesheetOptions,
    usages: Vec<(Utility, String)>,
}

impl StylesheetBuilder {
    /// Create a builder with the given options.
    pub fn new(options: StylesheetOptions) -> Self {
        Self { options, usages: Vec::new() }
    }

    /// Options in effect.
    pub fn options(&self) -> &StylesheetOptions {
        &self.options
    }

    /// Record a usage. Repeated usages are ignored.
    pub fn add(&mut self, utility: Utility, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if !self.usages.iter().any(|(u, v)| *u == utility && *v == value) {
            self.usages.push((utility, value));
        }
        self
    }

    /// Record a usage by utility key or class name.
    pub fn add_named(&mut self, utility: &str, value: impl Into<String>) -> Result<&mut Self, UtilityError> {
        let utility: Utility = utility.parse()?;
        Ok(self.add(utility, value))
    }

    /// Recorded usages, in insertion order.
    pub fn usages(&self) -> &[(Utility, String)] {
        &self.usages
    }

    /// Number of distinct usages.
    pub fn len(&self) -> usize {
        self.usages.len()
    }

    /// Check if no usages were recorded.
    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }

    /// Emit the stylesheet.
    ///
    /// # Errors
    ///
    /// In strict mode, the first out-of-domain usage fails with
    /// [`StylesheetError::Utility`]. Any mode fails with
    /// [`StylesheetError::UnsafeValue`] when a declaration value contains
    /// rule syntax, and with [`StylesheetError::Css`] if lightningcss rejects
    /// the output.
    pub fn build(&self) -> Result<Stylesheet, StylesheetError> {
        let mut warnings = Vec::new();
        let mut classes = Vec::with_capacity(self.usages.len());

        for (utility, value) in &self.usages {
            let styles = if self.options.strict {
                utility.apply(value)?
            } else {
                if !utility.values().accepts(value) {
                    log::warn!("passing '{}' through to {} unchecked", value, utility);
                    warnings.push(format!("'{}' is not a known value for {}", value, utility));
                }
                utility.transform(value)
            };
            let class_name = self.class_name(*utility, value);
            log::debug!("emitting .{}", class_name);
            classes.push(EmittedClass {
                class_name,
                utility: utility.key(),
                value: value.clone(),
                styles,
            });
        }

        let keyframes = self.collect_keyframes(&classes, &mut warnings);

        let mut css = String::new();
        for rule in &keyframes {
            rule.write_css(&mut css);
        }
        // Modifiers last so their single declaration overrides the bundle's
        let (animations, modifiers): (Vec<_>, Vec<_>) = self
            .usages
            .iter()
            .zip(&classes)
            .partition(|((utility, _), _)| !utility.is_modifier());
        for (_, class) in animations.into_iter().chain(modifiers) {
            let selector = format!(".{}", escape_class(&class.class_name));
            let mut blocks = Vec::new();
            flatten(&class.styles, &selector, &[], &mut blocks);
            for block in &blocks {
                block.check_values(&class.class_name)?;
                block.write_css(&mut css);
            }
        }

        let css = finish_css(&css, self.options.minify)?;

        Ok(Stylesheet {
            css,
            classes,
            keyframes: keyframes.iter().map(|k| k.name).collect(),
            warnings,
        })
    }

    /// Unescaped class name for a usage.
    pub fn class_name(&self, utility: Utility, value: &str) -> String {
        format!(
            "{}{}{}{}",
            self.options.prefix,
            utility.class_name(),
            self.options.separator,
            value
        )
    }

    fn collect_keyframes(
        &self,
        classes: &[EmittedClass],
        warnings: &mut Vec<String>,
    ) -> Vec<&'static Keyframes> {
        match self.options.keyframes {
            KeyframesMode::None => Vec::new(),
            KeyframesMode::All => KEYFRAMES.iter().collect(),
            KeyframesMode::Used => {
                let mut used: Vec<&'static Keyframes> = Vec::new();
                let mut missing: Vec<&str> = Vec::new();
                for name in classes.iter().flat_map(|c| c.styles.find_all("animation-name")) {
                    match KEYFRAMES.get(name) {
                        Some(rule) if !used.iter().any(|u| u.name == rule.name) => used.push(rule),
                        Some(_) => {}
                        None if !missing.contains(&name) => missing.push(name),
                        None => {}
                    }
                }
                for name in missing {
                    log::warn!("no @keyframes for animation '{}'", name);
                    warnings.push(format!("no @keyframes definition for '{}'", name));
                }
                used
            }
        }
    }
}

/// A flat rule, optionally wrapped in at-rules (outermost first).
#[derive(Debug, Clone, PartialEq)]
struct RuleBlock {
    at_rules: Vec<String>,
    selector: String,
    declarations: Vec<(String, String)>,
}

impl RuleBlock {
    fn check_values(&self, class_name: &str) -> Result<(), StylesheetError> {
        for (property, value) in &self.declarations {
            if value.contains([';', '{', '}']) || value.contains("/*") {
                return Err(StylesheetError::UnsafeValue {
                    class_name: class_name.to_string(),
                    property: property.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    fn write_css(&self, out: &mut String) {
        let depth = self.at_rules.len();
        for (level, at_rule) in self.at_rules.iter().enumerate() {
            let _ = writeln!(out, "{}{} {{", indent(level), at_rule);
        }
        let _ = writeln!(out, "{}{} {{", indent(depth), self.selector);
        for (property, value) in &self.declarations {
            let _ = writeln!(out, "{}{}: {};", indent(depth + 1), property, value);
        }
        for level in (0..=depth).rev() {
            let _ = writeln!(out, "{}}}", indent(level));
        }
    }
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

/// Flatten a bundle into rule blocks. Declarations of a rule come before the
/// blocks of its nested keys.
fn flatten(bundle: &StyleBundle, selector: &str, at_rules: &[String], out: &mut Vec<RuleBlock>) {
    let declarations: Vec<(String, String)> = bundle
        .iter()
        .filter(|(_, value)| !value.is_nested())
        .map(|(property, value)| (property.to_string(), value.to_string()))
        .collect();
    if !declarations.is_empty() {
        out.push(RuleBlock {
            at_rules: at_rules.to_vec(),
            selector: selector.to_string(),
            declarations,
        });
    }

    for (key, value) in bundle.iter() {
        let StyleValue::Nested(inner) = value else { continue };
        if key.starts_with('@') {
            let mut wrapped = at_rules.to_vec();
            wrapped.push(key.to_string());
            flatten(inner, selector, &wrapped, out);
        } else if key.contains('&') {
            flatten(inner, &key.replace('&', selector), at_rules, out);
        } else {
            flatten(inner, &format!("{} {}", selector, key), at_rules, out);
        }
    }
}

/// Escape a class name for use in a selector.
///
/// Identifier characters pass through; other ASCII is backslash-escaped, and
/// control characters or whitespace use hex escapes. A leading digit is
/// hex-escaped.
pub fn escape_class(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for (i, c) in name.chars().enumerate() {
        match c {
            'a'..='z' | 'A'..='Z' | '_' | '-' => escaped.push(c),
            '0'..='9' if i == 0 => {
                let _ = write!(escaped, "\\{:x} ", c as u32);
            }
            '0'..='9' => escaped.push(c),
            c if c.is_ascii_whitespace() || c.is_ascii_control() => {
                let _ = write!(escaped, "\\{:x} ", c as u32);
            }
            c if c.is_ascii() => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// Validate through lightningcss, optionally returning its minified output.
fn finish_css(css: &str, minify: bool) -> Result<String, StylesheetError> {
    let mut sheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| StylesheetError::Css(e.to_string()))?;
    if !minify {
        return Ok(css.to_string());
    }
    sheet
        .minify(MinifyOptions::default())
        .map_err(|e| StylesheetError::Css(e.to_string()))?;
    let printed = sheet
        .to_css(PrinterOptions { minify: true, ..PrinterOptions::default() })
        .map_err(|e| StylesheetError::Css(e.to_string()))?;
    Ok(printed.code)
}

/// Render `@keyframes` rules for the given names (all when empty).
///
/// Unknown names fail with [`StylesheetError::UnknownKeyframes`].
pub fn keyframes_css(names: &[String], minify: bool) -> Result<String, StylesheetError> {
    let mut css = String::new();
    if names.is_empty() {
        for rule in KEYFRAMES.iter() {
            rule.write_css(&mut css);
        }
    } else {
        let mut unknown = Vec::new();
        for name in names {
            match KEYFRAMES.get(name) {
                Some(rule) => rule.write_css(&mut css),
                None => unknown.push(name.clone()),
            }
        }
        if !unknown.is_empty() {
            return Err(StylesheetError::UnknownKeyframes(unknown));
        }
    }
    finish_css(&css, minify)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient() -> StylesheetOptions {
        StylesheetOptions { strict: false, ..StylesheetOptions::default() }
    }

    #[test]
    fn test_escape_class() {
        assert_eq!(escape_class("animate-in_fadeIn"), "animate-in_fadeIn");
        assert_eq!(escape_class("animate-delay_1.5s"), "animate-delay_1\\.5s");
        assert_eq!(escape_class("animate-count_50%"), "animate-count_50\\%");
        assert_eq!(escape_class("a b"), "a\\20 b");
        assert_eq!(escape_class("2x"), "\\32 x");
    }

    #[test]
    fn test_flatten_orders_declarations_first() {
        let bundle = StyleBundle::new()
            .with("animation-name", "fadeOut")
            .with("@media print", StyleBundle::new().with("opacity", "1"))
            .with("opacity", 0.0);
        let mut blocks = Vec::new();
        flatten(&bundle, ".x", &[], &mut blocks);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].selector, ".x");
        assert_eq!(
            blocks[0].declarations,
            vec![
                ("animation-name".to_string(), "fadeOut".to_string()),
                ("opacity".to_string(), "0".to_string())
            ]
        );
        assert_eq!(blocks[1].at_rules, vec!["@media print".to_string()]);
    }

    #[test]
    fn test_flatten_selector_keys() {
        let bundle = StyleBundle::new()
            .with("&:hover", StyleBundle::new().with("color", "red"))
            .with("span", StyleBundle::new().with("color", "blue"));
        let mut blocks = Vec::new();
        flatten(&bundle, ".x", &[], &mut blocks);
        let selectors: Vec<_> = blocks.iter().map(|b| b.selector.as_str()).collect();
        assert_eq!(selectors, vec![".x:hover", ".x span"]);
    }

    #[test]
    fn test_hover_media_nests_inside_selector() {
        let mut builder = StylesheetBuilder::new(StylesheetOptions::default());
        builder.add(Utility::AnimateOnHover, "pulse");
        let sheet = builder.build().expect("should build");
        assert!(sheet.css.contains(".animate-hover_pulse:hover {"));
        assert!(sheet.css.contains(
            "@media (prefers-reduced-motion: reduce), print {\n  .animate-hover_pulse:hover {"
        ));
    }

    #[test]
    fn test_dedupes_usages() {
        let mut builder = StylesheetBuilder::default();
        builder.add(Utility::Animate, "bounce").add(Utility::Animate, "bounce");
        builder.add(Utility::Animate, "flash");
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn test_used_keyframes_only() {
        let mut builder = StylesheetBuilder::new(StylesheetOptions::default());
        builder.add(Utility::Animate, "shake").add(Utility::AnimateSpeed, "fast");
        let sheet = builder.build().expect("should build");
        assert_eq!(sheet.keyframes, vec!["shakeX"]);
        assert!(sheet.css.contains("@keyframes shakeX"));
        assert!(!sheet.css.contains("@keyframes fadeIn"));
    }

    #[test]
    fn test_keyframes_modes() {
        let mut options = StylesheetOptions { keyframes: KeyframesMode::All, ..Default::default() };
        let mut builder = StylesheetBuilder::new(options.clone());
        builder.add(Utility::AnimateDelay, "2s");
        assert_eq!(builder.build().expect("should build").keyframes.len(), KEYFRAMES.len());

        options.keyframes = KeyframesMode::None;
        let mut builder = StylesheetBuilder::new(options);
        builder.add(Utility::Animate, "bounce");
        let sheet = builder.build().expect("should build");
        assert!(sheet.keyframes.is_empty());
        assert!(!sheet.css.contains("@keyframes"));
    }

    #[test]
    fn test_strict_rejects_unknown_value() {
        let mut builder = StylesheetBuilder::default();
        builder.add(Utility::AnimateIn, "fadeOut");
        let err = builder.build().expect_err("should reject");
        assert!(matches!(err, StylesheetError::Utility(UtilityError::UnknownValue { .. })));
    }

    #[test]
    fn test_lenient_passes_through_and_warns() {
        let mut builder = StylesheetBuilder::new(lenient());
        builder.add(Utility::AnimationName, "myCustomSpin");
        let sheet = builder.build().expect("should build");
        assert!(sheet.css.contains("animation-name: myCustomSpin;"));
        assert_eq!(sheet.warnings.len(), 2);
        assert!(sheet.keyframes.is_empty());
    }

    #[test]
    fn test_modifiers_follow_animations() {
        for reversed in [false, true] {
            let mut usages = vec![(Utility::AnimateIn, "fadeIn"), (Utility::AnimateSpeed, "fast")];
            if reversed {
                usages.reverse();
            }
            let mut builder = StylesheetBuilder::default();
            for (utility, value) in usages {
                builder.add(utility, value);
            }
            let sheet = builder.build().expect("should build");
            let entrance = sheet.css.find(".animate-in_fadeIn {").expect("entrance rule");
            let speed = sheet.css.find(".animate-speed_fast {").expect("speed rule");
            assert!(entrance < speed, "speed rule must come last:\n{}", sheet.css);
            // Reported classes keep usage order
            assert_eq!(sheet.classes[0].utility, if reversed { "animateSpeed" } else { "animateIn" });
        }
    }

    #[test]
    fn test_rejects_rule_breakout_in_values() {
        for value in ["1s; } body { display: none", "1s }", "1s {", "1s /*"] {
            let mut builder = StylesheetBuilder::default();
            builder.add_named("animateDelay", value).expect("known utility");
            let err = builder.build().expect_err("should reject");
            assert!(
                matches!(&err, StylesheetError::UnsafeValue { property, .. } if property == "animation-delay"),
                "unexpected error for '{}': {:?}",
                value,
                err
            );
        }

        let mut builder = StylesheetBuilder::new(lenient());
        builder.add(Utility::AnimationName, "x; color: red");
        assert!(matches!(builder.build(), Err(StylesheetError::UnsafeValue { .. })));
    }

    #[test]
    fn test_prefix_and_separator() {
        let options = StylesheetOptions {
            prefix: "tw-".to_string(),
            separator: "--".to_string(),
            ..Default::default()
        };
        let mut builder = StylesheetBuilder::new(options);
        builder.add(Utility::AnimateDelay, "1.5s");
        let sheet = builder.build().expect("should build");
        assert_eq!(sheet.classes[0].class_name, "tw-animate-delay--1.5s");
        assert!(sheet.css.contains(".tw-animate-delay--1\\.5s {\n  animation-delay: 1.5s;\n}"));
    }

    #[test]
    fn test_minify_output() {
        let options = StylesheetOptions { minify: true, ..Default::default() };
        let mut builder = StylesheetBuilder::new(options);
        builder.add(Utility::AnimateIn, "fadeIn");
        let sheet = builder.build().expect("should build");
        assert!(!sheet.css.contains('\n'));
        assert!(sheet.css.contains(".animate-in_fadeIn"));
        assert!(sheet.css.contains("@keyframes fadeIn"));
    }

    #[test]
    fn test_add_named() {
        let mut builder = StylesheetBuilder::default();
        builder.add_named("animate-speed", "slow").expect("class name");
        builder.add_named("animateCount", "3").expect("key");
        assert!(builder.add_named("animate-sideways", "x").is_err());
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn test_keyframes_css() {
        let css = keyframes_css(&["fadeIn".to_string()], false).expect("should render");
        assert!(css.starts_with("@keyframes fadeIn {"));
        assert!(matches!(
            keyframes_css(&["nope".to_string()], false),
            Err(StylesheetError::UnknownKeyframes(names)) if names == vec!["nope".to_string()]
        ));
        let all = keyframes_css(&[], false).expect("should render");
        assert_eq!(all.matches("@keyframes ").count(), KEYFRAMES.len());
    }

    #[test]
    fn test_keyframes_mode_parse() {
        assert_eq!("ALL".parse::<KeyframesMode>(), Ok(KeyframesMode::All));
        assert_eq!("used".parse::<KeyframesMode>(), Ok(KeyframesMode::Used));
        assert!("some".parse::<KeyframesMode>().is_err());
        assert_eq!(KeyframesMode::None.to_string(), "none");
    }
}
