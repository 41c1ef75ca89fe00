//! Animate.css preset for utility-first CSS generation
//!
//! This library provides:
//! - Preset tables mapping semantic names to Animate.css animations and speeds
//! - Animation utilities that turn a value into an ordered style bundle
//! - The Animate.css `@keyframes` bodies every table refers to
//! - A stylesheet builder that emits atomic classes, validated by lightningcss
//!
//! # Example
//!
//! ```
//! use animate_preset::utilities::Utility;
//!
//! let styles = Utility::AnimateOut.transform("fadeOut");
//! assert_eq!(styles.text("animation-name"), Some("fadeOut"));
//! assert_eq!(styles.text("animation-fill-mode"), Some("both"));
//! ```

pub mod cli;
pub mod config;
pub mod integrity;
pub mod keyframes;
pub mod preset;
pub mod presets;
pub mod style;
pub mod stylesheet;
pub mod suggest;
pub mod utilities;

#[cfg(feature = "wasm")]
pub mod wasm;
