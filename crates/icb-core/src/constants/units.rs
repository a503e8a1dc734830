// ABOUTME: Unit conversion constants for drink volumes
// ABOUTME: Provides named constants to eliminate magic numbers in brew calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

/// Milliliters per US customary cup
pub const ML_PER_US_CUP: f64 = 236.588;

/// Milliliters per US fluid ounce
pub const ML_PER_US_FL_OZ: f64 = 29.5735;

/// Milliliters per milliliter
pub const ML_PER_ML: f64 = 1.0;
