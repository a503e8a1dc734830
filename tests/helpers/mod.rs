// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request harness and brew test fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;

use indian_coffee_beans::brewing::{CalculatorInput, RoastLevel, Strength};

/// Tolerance for floating point gram and milliliter comparisons
pub const EPSILON: f64 = 1e-9;

/// Shorthand for building calculator input
pub fn input(
    method: &str,
    volume_ml: f64,
    strength: Strength,
    roast: RoastLevel,
) -> CalculatorInput {
    CalculatorInput::new(method, volume_ml, strength, roast)
}

/// Assert two floats are within `EPSILON`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
