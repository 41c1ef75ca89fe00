//! Configuration loading and discovery for `animate.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::AnimateConfig;
use crate::stylesheet::KeyframesMode;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "animate.toml";

/// Directory under the XDG config home.
pub const XDG_DIR_NAME: &str = "animate-preset";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse animate.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output file
    pub output: Option<PathBuf>,
    /// Override minification
    pub minify: Option<bool>,
    /// Override keyframes inclusion
    pub keyframes: Option<KeyframesMode>,
    /// Override strict validation
    pub strict: Option<bool>,
    /// Override class prefix
    pub prefix: Option<String>,
}

/// Find animate.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for animate.toml
/// 2. Check XDG_CONFIG_HOME/animate-preset/animate.toml (or
///    ~/.config/animate-preset/animate.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find animate.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join(XDG_DIR_NAME).join(CONFIG_FILE_NAME);
    config_path.exists().then_some(config_path)
}

/// Find animate.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from an animate.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// [`find_config`] to locate one. With no config file anywhere, the
/// defaults are returned.
///
/// # Example
/// ```ignore
/// let config = load_config(Some(Path::new("site/animate.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<AnimateConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => {
            log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(default_config())
        }
    }
}

/// Parse and validate configuration text.
pub fn parse_config(contents: &str) -> Result<AnimateConfig, ConfigError> {
    let config: AnimateConfig = toml::from_str(contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

fn load_config_file(path: &Path) -> Result<AnimateConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Configuration used when no animate.toml is found.
pub fn default_config() -> AnimateConfig {
    AnimateConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut AnimateConfig, overrides: &CliOverrides) {
    if let Some(ref output) = overrides.output {
        config.output.file = Some(output.clone());
    }
    if let Some(minify) = overrides.minify {
        config.output.minify = minify;
    }
    if let Some(keyframes) = overrides.keyframes {
        config.output.keyframes = keyframes;
    }
    if let Some(strict) = overrides.strict {
        config.validate.strict = strict;
    }
    if let Some(ref prefix) = overrides.prefix {
        config.classes.prefix = prefix.clone();
    }
}

/// Resolve the output file relative to the directory holding the config.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(config_path: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match config_path.parent() {
        Some(root) => root.join(path),
        None => path.to_path_buf(),
    }
}
