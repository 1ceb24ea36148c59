// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the flatten → normalize → concat pipeline.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use trellis_atomic_ref::RefCompiler;
use trellis_declaration::{StyleDescriptor, StyleEntry, StyleValue, flatten};
use trellis_normalize::normalize;
use trellis_style::{StyleSheet, concat};

fn shorthand_heavy_entry() -> StyleEntry {
    StyleEntry::new()
        .with("marginHorizontal", 16)
        .with("paddingVertical", 8)
        .with("marginStart", 4)
        .with("shadowColor", "rgb(20, 20, 20)")
        .with("shadowOpacity", 0.25)
        .with(
            "shadowOffset",
            StyleEntry::new().with("width", 0).with("height", 2),
        )
        .with("shadowRadius", 6)
        .with("borderWidth", 1)
        .with("borderTopColor", "gainsboro")
        .with("flexDirection", "row")
        .with(
            "transform",
            vec![
                StyleValue::Map(StyleEntry::new().with("rotate", "45deg")),
                StyleValue::Map(StyleEntry::new().with("scale", 2)),
            ],
        )
}

fn descriptor_tree(depth: usize) -> StyleDescriptor {
    let mut descriptor = StyleDescriptor::from(StyleEntry::new().with("flex", 1));
    for level in 0..depth {
        descriptor = StyleDescriptor::from(vec![
            StyleDescriptor::None,
            StyleDescriptor::from(StyleEntry::new().with("zIndex", level as i32)),
            descriptor,
        ]);
    }
    descriptor
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("declaration/flatten");

    let flat: Vec<StyleDescriptor> = (0..8)
        .map(|index| StyleDescriptor::from(StyleEntry::new().with("flex", index)))
        .collect();
    group.bench_function("flat_8", |b| b.iter(|| black_box(flatten(&flat))));

    let nested = [descriptor_tree(16)];
    group.bench_function("nested_16", |b| b.iter(|| black_box(flatten(&nested))));

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("shorthand_heavy", |b| {
        b.iter_batched_ref(
            shorthand_heavy_entry,
            |entry| normalize(entry),
            BatchSize::SmallInput,
        );
    });

    let mut canonical = shorthand_heavy_entry();
    normalize(&mut canonical);
    group.bench_function("already_canonical", |b| {
        b.iter_batched_ref(
            || canonical.clone(),
            |entry| normalize(entry),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("style/concat");

    let sheet = StyleSheet::create([
        ("row", shorthand_heavy_entry()),
        ("selected", StyleEntry::new().with("color", "gold")),
    ]);
    let styles = [
        sheet.get("row").unwrap(),
        StyleDescriptor::None,
        sheet.get("selected").unwrap(),
        StyleDescriptor::from("theme-dark"),
    ];

    group.bench_function("warm_cache", |b| {
        let mut compiler = RefCompiler::new();
        // Prime the cache; steady-state renders hit it every time.
        let _ = concat(&mut compiler, &styles);
        b.iter(|| black_box(concat(&mut compiler, &styles)));
    });

    group.bench_function("cold_cache", |b| {
        b.iter_batched_ref(
            RefCompiler::new,
            |compiler| black_box(concat(compiler, &styles)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_normalize, bench_concat);
criterion_main!(benches);
