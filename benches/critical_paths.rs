//! Criterion benchmarks for the preset's hot paths
//!
//! - Transforms: value to style bundle, per utility
//! - Validation: domain checks with suggestion lookup on failure
//! - Stylesheet: class emission, keyframes collection and lightningcss pass

use animate_preset::presets::{ANIMATION_PRESETS, ENTRANCE_ANIMATIONS};
use animate_preset::stylesheet::{KeyframesMode, StylesheetBuilder, StylesheetOptions};
use animate_preset::utilities::Utility;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// =============================================================================
// Test Data Generators
// =============================================================================

/// First `n` usages cycling through the entrance table
fn make_usages(n: usize) -> Vec<(Utility, &'static str)> {
    let keys: Vec<&'static str> = ENTRANCE_ANIMATIONS.keys().collect();
    keys.iter().cycle().take(n).map(|key| (Utility::AnimateIn, *key)).collect()
}

fn builder_for(options: StylesheetOptions, usages: &[(Utility, &'static str)]) -> StylesheetBuilder {
    let mut builder = StylesheetBuilder::new(options);
    for (utility, value) in usages {
        builder.add(*utility, *value);
    }
    builder
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for (utility, value) in [
        (Utility::Animate, "bounce"),
        (Utility::AnimateOut, "fadeOut"),
        (Utility::AnimateOnHover, "pulse"),
        (Utility::AnimateSpeed, "fast"),
        (Utility::AnimateDelay, "500ms"),
    ] {
        group.bench_with_input(BenchmarkId::new(utility.key(), value), &value, |b, value| {
            b.iter(|| utility.transform(black_box(value)))
        });
    }

    group.throughput(Throughput::Elements(ANIMATION_PRESETS.len() as u64));
    group.bench_function("animate_full_table", |b| {
        b.iter(|| {
            for key in ANIMATION_PRESETS.keys() {
                black_box(Utility::Animate.transform(key));
            }
        })
    });

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("apply_accepted", |b| {
        b.iter(|| Utility::AnimateIn.apply(black_box("slideInRight")))
    });

    // Rejection computes suggestions over the whole table
    group.bench_function("apply_rejected", |b| {
        b.iter(|| Utility::Animate.apply(black_box("bounceInn")))
    });

    group.bench_function("parse_utility", |b| {
        b.iter(|| black_box("animate-infinite").parse::<Utility>())
    });

    group.finish();
}

fn bench_stylesheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("stylesheet");

    for size in [1, 8, 32].iter() {
        let usages = make_usages(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("build_used", size), &usages, |b, usages| {
            let builder = builder_for(StylesheetOptions::default(), usages);
            b.iter(|| builder.build())
        });
    }

    let usages = make_usages(8);
    let minified = StylesheetOptions { minify: true, ..Default::default() };
    group.bench_function("build_minified", |b| {
        let builder = builder_for(minified.clone(), &usages);
        b.iter(|| builder.build())
    });

    let all = StylesheetOptions { keyframes: KeyframesMode::All, ..Default::default() };
    group.bench_function("build_all_keyframes", |b| {
        let builder = builder_for(all.clone(), &usages);
        b.iter(|| builder.build())
    });

    group.finish();
}

criterion_group!(benches, bench_transforms, bench_validation, bench_stylesheet);

criterion_main!(benches);
