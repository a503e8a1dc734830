// ABOUTME: Brew-ratio calculator crate for the Indian Coffee Beans brewing tool
// ABOUTME: Exposes the method catalog, recipe calculation and volume conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

#![deny(unsafe_code)]

//! # Brewing
//!
//! Turns a desired drink volume and taste preferences into a coffee recipe
//! for one of the supported brewing methods.
//!
//! Everything here is pure: the method catalog is static data and
//! [`calculate_brew_ratio`] has no side effects beyond a trace event.
//!
//! ```rust
//! use icb_brewing::{calculate_brew_ratio, CalculatorInput, RoastLevel, Strength};
//!
//! let input = CalculatorInput::new("pourover", 300.0, Strength::Average, RoastLevel::Medium);
//! let recipe = calculate_brew_ratio(&input).unwrap();
//! assert_eq!(recipe.ratio, "1:15");
//! assert!((recipe.coffee_amount_g - 20.0).abs() < 1e-9);
//! ```

/// Recipe calculation
pub mod calculator;
/// Volume-range and display configuration
pub mod config;
/// Volume unit conversion
pub mod conversion;
/// Static brewing method catalog
pub mod methods;
/// Calculator input and output types
pub mod models;

pub use calculator::{calculate_brew_ratio, CalculationError};
pub use config::{BrewingConfig, ConfigError};
pub use conversion::{convert_volume, to_milliliters, ConversionError, VolumeUnit};
pub use methods::{
    brewing_methods, find_method, format_ratio, BrewingMethod, RatioPresets, TemperaturePresets,
};
pub use models::{
    round_to, CalculatorInput, CalculatorResult, ParsePreferenceError, RoastLevel, Strength,
};
