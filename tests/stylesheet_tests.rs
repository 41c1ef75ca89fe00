//! Integration tests for stylesheet emission

use animate_preset::stylesheet::{
    KeyframesMode, StylesheetBuilder, StylesheetError, StylesheetOptions,
};
use animate_preset::utilities::Utility;

fn build(options: StylesheetOptions, usages: &[(Utility, &str)]) -> animate_preset::stylesheet::Stylesheet {
    let mut builder = StylesheetBuilder::new(options);
    for (utility, value) in usages {
        builder.add(*utility, *value);
    }
    builder.build().expect("stylesheet should build")
}

#[test]
fn test_animate_out_class() {
    let sheet = build(StylesheetOptions::default(), &[(Utility::AnimateOut, "fadeOut")]);
    let expected_rule = "\
.animate-out_fadeOut {
  animation-name: fadeOut;
  animation-duration: 1s;
  animation-fill-mode: both;
  opacity: 0;
}
@media (prefers-reduced-motion: reduce), print {
  .animate-out_fadeOut {
    animation-duration: 1ms !important;
    transition-duration: 1ms !important;
    animation-iteration-count: 1 !important;
  }
}
";
    assert!(sheet.css.ends_with(expected_rule), "unexpected CSS:\n{}", sheet.css);
    assert!(sheet.css.starts_with("@keyframes fadeOut {"));
    assert_eq!(sheet.keyframes, vec!["fadeOut"]);
    assert!(sheet.warnings.is_empty());
}

#[test]
fn test_single_property_utilities() {
    let sheet = build(
        StylesheetOptions::default(),
        &[
            (Utility::AnimateSpeed, "slower"),
            (Utility::AnimateDelay, "500ms"),
            (Utility::AnimateCount, "3"),
            (Utility::AnimationRepeat, "infinite"),
        ],
    );
    assert!(sheet.css.contains(".animate-speed_slower {\n  animation-duration: 3s;\n}"));
    assert!(sheet.css.contains(".animate-delay_500ms {\n  animation-delay: 500ms;\n}"));
    assert!(sheet.css.contains(".animate-count_3 {\n  animation-iteration-count: 3;\n}"));
    assert!(sheet
        .css
        .contains(".animation-repeat_infinite {\n  animation-iteration-count: infinite;\n}"));
    assert!(sheet.keyframes.is_empty());
}

#[test]
fn test_used_keyframes_are_deduplicated() {
    let sheet = build(
        StylesheetOptions::default(),
        &[
            (Utility::Animate, "bounce"),
            (Utility::AnimateInfinite, "bounce"),
            (Utility::AnimateOnHover, "bounce"),
            (Utility::AnimationName, "tada"),
        ],
    );
    assert_eq!(sheet.keyframes, vec!["bounce", "tada"]);
    assert_eq!(sheet.css.matches("@keyframes bounce {").count(), 1);
    assert_eq!(sheet.classes.len(), 4);
}

#[test]
fn test_class_metadata() {
    let sheet = build(StylesheetOptions::default(), &[(Utility::AnimateIn, "zoomIn")]);
    let class = &sheet.classes[0];
    assert_eq!(class.class_name, "animate-in_zoomIn");
    assert_eq!(class.utility, "animateIn");
    assert_eq!(class.value, "zoomIn");
    assert_eq!(class.styles, Utility::AnimateIn.transform("zoomIn"));
}

#[test]
fn test_all_keyframes_minified() {
    let options = StylesheetOptions {
        keyframes: KeyframesMode::All,
        minify: true,
        ..Default::default()
    };
    let sheet = build(options, &[(Utility::Animate, "flip")]);
    assert!(!sheet.css.contains('\n'));
    assert!(sheet.css.contains("@keyframes flip"));
    assert!(sheet.css.contains("@keyframes rubberBand"));
    assert!(sheet.css.contains(".animate_flip"));
    assert!(sheet.css.contains("prefers-reduced-motion"));
}

#[test]
fn test_strict_error_message() {
    let mut builder = StylesheetBuilder::default();
    builder.add(Utility::AnimateOut, "fadeIn");
    let err = builder.build().expect_err("fadeIn is not an exit animation");
    assert!(matches!(err, StylesheetError::Utility(_)));
    assert!(err.to_string().starts_with("'fadeIn' is not a valid value for animateOut"));
}

#[test]
fn test_lenient_speed_passthrough() {
    let options = StylesheetOptions { strict: false, ..Default::default() };
    let sheet = build(options, &[(Utility::AnimateSpeed, "750ms")]);
    assert!(sheet.css.contains(".animate-speed_750ms {\n  animation-duration: 750ms;\n}"));
    assert_eq!(sheet.warnings.len(), 1);
}

#[test]
fn test_empty_builder() {
    let sheet = StylesheetBuilder::default().build().expect("empty sheet is valid");
    assert!(sheet.css.is_empty());
    assert!(sheet.classes.is_empty());
}
