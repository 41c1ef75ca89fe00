//! WASM API module for browser/JS interop
//!
//! Exposes the transforms, the stylesheet builder and the preset JSON to
//! JavaScript hosts.

use indexmap::IndexMap;
use wasm_bindgen::prelude::*;

use crate::config::AnimateConfig;
use crate::preset::preset;
use crate::presets;
use crate::stylesheet::StylesheetBuilder;
use crate::utilities::Utility;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Result of building a stylesheet.
#[wasm_bindgen]
pub struct BuildResult {
    css: String,
    classes: Vec<String>,
    warnings: Vec<String>,
    error: Option<String>,
}

#[wasm_bindgen]
impl BuildResult {
    /// Generated CSS (empty on error)
    #[wasm_bindgen(getter)]
    pub fn css(&self) -> String {
        self.css.clone()
    }

    /// Emitted class names, unescaped
    #[wasm_bindgen(getter)]
    pub fn classes(&self) -> Vec<String> {
        self.classes.clone()
    }

    /// Non-fatal findings
    #[wasm_bindgen(getter)]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.clone()
    }

    /// Error message when the build failed
    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }
}

impl BuildResult {
    fn failed(message: String) -> Self {
        Self { css: String::new(), classes: Vec::new(), warnings: Vec::new(), error: Some(message) }
    }
}

/// Transform a value without validation.
///
/// # Returns
/// The style bundle as JSON, or an empty string for an unknown utility
#[wasm_bindgen]
pub fn transform(utility: &str, value: &str) -> String {
    utility
        .parse::<Utility>()
        .ok()
        .and_then(|u| serde_json::to_string(&u.transform(value)).ok())
        .unwrap_or_default()
}

/// Validate a value against the utility's accepted set, then transform it.
#[wasm_bindgen]
pub fn apply(utility: &str, value: &str) -> Result<String, JsValue> {
    let utility: Utility = utility.parse().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let bundle = utility.apply(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&bundle).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build a stylesheet from a JSON object of utility name to value list.
///
/// # Arguments
/// * `usages_json` - e.g. `{"animateIn": ["fadeIn"], "animate-speed": ["fast"]}`
/// * `minify` - Emit minified CSS
#[wasm_bindgen]
pub fn build_css(usages_json: &str, minify: bool) -> BuildResult {
    let usages: IndexMap<String, Vec<String>> = match serde_json::from_str(usages_json) {
        Ok(usages) => usages,
        Err(e) => return BuildResult::failed(format!("invalid usages JSON: {}", e)),
    };

    let mut config = AnimateConfig { usages, ..Default::default() };
    config.output.minify = minify;
    if let Some(error) = config.validate().first() {
        return BuildResult::failed(error.to_string());
    }

    let mut builder = StylesheetBuilder::new(config.to_stylesheet_options());
    for (utility, value) in config.resolved_usages() {
        builder.add(utility, value);
    }

    match builder.build() {
        Ok(sheet) => BuildResult {
            css: sheet.css,
            classes: sheet.classes.into_iter().map(|c| c.class_name).collect(),
            warnings: sheet.warnings,
            error: None,
        },
        Err(e) => BuildResult::failed(e.to_string()),
    }
}

/// The assembled preset as JSON.
#[wasm_bindgen]
pub fn preset_json() -> String {
    preset().to_json_compact().unwrap_or_default()
}

/// Names of the built-in preset tables.
#[wasm_bindgen]
pub fn list_tables() -> Vec<String> {
    presets::list_tables().into_iter().map(str::to_string).collect()
}
