//! WASM tests using wasm_bindgen_test
//!
//! Run with: wasm-pack test --headless --chrome --features wasm

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use animate_preset::wasm::{apply, build_css, list_tables, preset_json, transform};

#[wasm_bindgen_test]
fn test_transform_returns_bundle_json() {
    let json = transform("animateDelay", "2s");
    assert_eq!(json, r#"{"animation-delay":"2s"}"#);
}

#[wasm_bindgen_test]
fn test_transform_unknown_utility_is_empty() {
    assert!(transform("animateSideways", "x").is_empty());
}

#[wasm_bindgen_test]
fn test_apply_validates() {
    let json = apply("animate-in", "fadeIn").expect("fadeIn is an entrance animation");
    assert!(json.contains("\"animation-name\":\"fadeIn\""));
    assert!(apply("animate-in", "fadeOut").is_err());
}

#[wasm_bindgen_test]
fn test_build_css_minified() {
    let result = build_css(r#"{"animateOut": ["fadeOut"]}"#, true);
    assert!(result.error().is_none());
    assert!(result.css().contains("@keyframes fadeOut"));
    assert!(!result.css().contains('\n'));
}

#[wasm_bindgen_test]
fn test_build_css_reports_errors() {
    let result = build_css("[1, 2]", false);
    assert!(result.error().is_some());
    assert!(result.css().is_empty());
}

#[wasm_bindgen_test]
fn test_preset_json() {
    let json: serde_json::Value = serde_json::from_str(&preset_json()).expect("valid JSON");
    assert_eq!(json["name"], "@slurpyb/preset-animate-css");
}

#[wasm_bindgen_test]
fn test_list_tables() {
    assert_eq!(list_tables(), vec!["presets", "entrance", "exit", "attention", "speeds"]);
}
