// ABOUTME: Criterion benchmarks for the brew-ratio calculator
// ABOUTME: Measures method lookup, recipe calculation, unit conversion and JSON encoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

//! Criterion benchmarks for the brew-ratio calculator.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use indian_coffee_beans::brewing::{
    brewing_methods, calculate_brew_ratio, convert_volume, find_method, CalculatorInput,
    RoastLevel, Strength, VolumeUnit,
};

fn bench_method_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("method_lookup");

    group.bench_function("exact_id", |b| {
        b.iter(|| find_method(black_box("southindianfilter")));
    });
    group.bench_function("normalized_id", |b| {
        b.iter(|| find_method(black_box("  South-Indian_Filter ")));
    });

    group.finish();
}

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");

    let input = CalculatorInput::new("pourover", 300.0, Strength::Average, RoastLevel::Medium);
    group.bench_function("single_recipe", |b| {
        b.iter(|| calculate_brew_ratio(black_box(&input)).unwrap());
    });

    let inputs: Vec<CalculatorInput> = brewing_methods()
        .iter()
        .flat_map(|method| {
            Strength::ALL.into_iter().flat_map(move |strength| {
                RoastLevel::ALL.into_iter().map(move |roast| {
                    CalculatorInput::new(method.id, method.default_volume_ml, strength, roast)
                })
            })
        })
        .collect();
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("full_preset_grid", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(calculate_brew_ratio(input).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_conversion(c: &mut Criterion) {
    c.bench_function("convert_cups_to_oz", |b| {
        b.iter(|| convert_volume(black_box(2.5), VolumeUnit::Cups, VolumeUnit::FluidOunces));
    });
}

fn bench_serialization(c: &mut Criterion) {
    let input = CalculatorInput::new("frenchpress", 500.0, Strength::Robust, RoastLevel::Dark);
    let result = calculate_brew_ratio(&input).unwrap();

    c.bench_function("recipe_to_json", |b| {
        b.iter(|| serde_json::to_string(black_box(&result)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_method_lookup,
    bench_calculate,
    bench_conversion,
    bench_serialization,
);
criterion_main!(benches);
