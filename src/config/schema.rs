//! Configuration schema types for `animate.toml`
//!
//! Defines the structure and validation rules for stylesheet builds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::stylesheet::{KeyframesMode, StylesheetOptions};
use crate::utilities::Utility;

/// Output section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file; stdout when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Emit minified CSS
    #[serde(default)]
    pub minify: bool,
    /// Which `@keyframes` rules to include
    #[serde(default)]
    pub keyframes: KeyframesMode,
}

/// Class naming section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassesConfig {
    /// Prepended to every class name
    #[serde(default)]
    pub prefix: String,
    /// Between the utility class name and the value
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    "_".to_string()
}

impl Default for ClassesConfig {
    fn default() -> Self {
        Self { prefix: String::new(), separator: default_separator() }
    }
}

/// Validation section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateConfig {
    /// Reject values outside a utility's domain
    #[serde(default = "default_true")]
    pub strict: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Complete animate.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimateConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub classes: ClassesConfig,
    #[serde(default)]
    pub validate: ValidateConfig,
    /// Utility name (key or class name) to the values it is used with, in
    /// file order
    #[serde(default)]
    pub usages: IndexMap<String, Vec<String>>,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "classes.separator")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "animate.toml: '{}' {}", self.field, self.message)
    }
}

impl AnimateConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.classes.separator.is_empty() {
            errors.push(ConfigValidationError {
                field: "classes.separator".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        } else if self.classes.separator.chars().any(char::is_whitespace) {
            errors.push(ConfigValidationError {
                field: "classes.separator".to_string(),
                message: "must not contain whitespace".to_string(),
            });
        }

        if self.classes.prefix.chars().any(char::is_whitespace) {
            errors.push(ConfigValidationError {
                field: "classes.prefix".to_string(),
                message: "must not contain whitespace".to_string(),
            });
        }

        for name in self.usages.keys() {
            if let Err(e) = name.parse::<Utility>() {
                errors.push(ConfigValidationError {
                    field: format!("usages.{}", name),
                    message: e.to_string(),
                });
            }
        }

        errors
    }

    /// Usages resolved to utility handles, in file order.
    ///
    /// Unknown utility names are skipped; [`validate`](Self::validate)
    /// reports them.
    pub fn resolved_usages(&self) -> Vec<(Utility, String)> {
        self.usages
            .iter()
            .filter_map(|(name, values)| name.parse::<Utility>().ok().map(|u| (u, values)))
            .flat_map(|(utility, values)| values.iter().map(move |v| (utility, v.clone())))
            .collect()
    }

    /// Stylesheet options described by this configuration.
    pub fn to_stylesheet_options(&self) -> StylesheetOptions {
        StylesheetOptions {
            prefix: self.classes.prefix.clone(),
            separator: self.classes.separator.clone(),
            keyframes: self.output.keyframes,
            minify: self.output.minify,
            strict: self.validate.strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config: AnimateConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(config, AnimateConfig::default());
        assert!(config.validate.strict);
        assert_eq!(config.classes.separator, "_");
        assert_eq!(config.output.keyframes, KeyframesMode::Used);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_full_config() {
        let toml_str = r#"
[output]
file = "dist/animate.css"
minify = true
keyframes = "all"

[classes]
prefix = "tw-"
separator = "--"

[validate]
strict = false

[usages]
animateIn = ["fadeIn", "zoomIn"]
animate-speed = ["fast"]
"#;
        let config: AnimateConfig = toml::from_str(toml_str).expect("should parse");
        assert_eq!(config.output.file, Some(PathBuf::from("dist/animate.css")));
        assert!(config.output.minify);
        assert_eq!(config.output.keyframes, KeyframesMode::All);
        assert_eq!(config.classes.prefix, "tw-");
        assert!(!config.validate.strict);
        assert!(config.validate().is_empty());

        let usages = config.resolved_usages();
        assert_eq!(
            usages,
            vec![
                (Utility::AnimateIn, "fadeIn".to_string()),
                (Utility::AnimateIn, "zoomIn".to_string()),
                (Utility::AnimateSpeed, "fast".to_string()),
            ]
        );
    }

    #[test]
    fn test_usages_keep_file_order() {
        let toml_str = r#"
[usages]
animate-speed = ["fast"]
animateOut = ["fadeOut"]
animate-delay = ["1s"]
animateIn = ["fadeIn"]
"#;
        let config: AnimateConfig = toml::from_str(toml_str).expect("should parse");
        let keys: Vec<_> = config.usages.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["animate-speed", "animateOut", "animate-delay", "animateIn"]);
        let utilities: Vec<_> = config.resolved_usages().into_iter().map(|(u, _)| u).collect();
        assert_eq!(
            utilities,
            vec![Utility::AnimateSpeed, Utility::AnimateOut, Utility::AnimateDelay, Utility::AnimateIn]
        );
    }

    #[test]
    fn test_invalid_keyframes_mode() {
        let result: Result<AnimateConfig, _> = toml::from_str("[output]\nkeyframes = \"some\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_errors() {
        let config = AnimateConfig {
            classes: ClassesConfig { prefix: "my prefix".to_string(), separator: String::new() },
            usages: IndexMap::from([("animateSideways".to_string(), vec!["x".to_string()])]),
            ..Default::default()
        };
        let errors = config.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["classes.separator", "classes.prefix", "usages.animateSideways"]);
        assert!(config.resolved_usages().is_empty());
    }

    #[test]
    fn test_to_stylesheet_options() {
        let mut config = AnimateConfig::default();
        config.output.minify = true;
        config.classes.prefix = "a-".to_string();
        let options = config.to_stylesheet_options();
        assert!(options.minify);
        assert!(options.strict);
        assert_eq!(options.prefix, "a-");
        assert_eq!(options.separator, "_");
    }

    #[test]
    fn test_error_display() {
        let error = ConfigValidationError {
            field: "classes.separator".to_string(),
            message: "must be a non-empty string".to_string(),
        };
        assert_eq!(error.to_string(), "animate.toml: 'classes.separator' must be a non-empty string");
    }
}
