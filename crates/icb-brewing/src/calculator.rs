// ABOUTME: Brew-ratio calculation from method, volume, strength and roast level
// ABOUTME: Pure function returning a recipe or a typed error for unusable input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

//! Recipe calculation
//!
//! [`calculate_brew_ratio`] is the whole calculator: look up the method,
//! pick the ratio for the strength and the temperature for the roast, and
//! divide. It holds no state and performs no I/O, so callers simply call it
//! again whenever an input changes.
//!
//! The 50-2000 ml sanity range is deliberately not checked here; input
//! surfaces apply it through [`crate::BrewingConfig::validate_volume`].

use icb_core::constants::messages::UNABLE_TO_CALCULATE;
use icb_core::errors::AppError;
use thiserror::Error;
use tracing::debug;

use crate::methods::{find_method, format_ratio};
use crate::models::{CalculatorInput, CalculatorResult};

/// Reasons a recipe cannot be produced
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Method id not in the catalog
    #[error("Unknown brewing method '{0}'")]
    UnknownMethod(String),

    /// Volume is zero, negative, NaN or infinite
    #[error("Volume must be a positive number of milliliters, got {0}")]
    InvalidVolume(f64),

    /// Volume is valid but outside the range the tool accepts
    #[error("Volume {volume_ml} ml is outside the supported range of {min_ml}-{max_ml} ml")]
    VolumeOutOfRange {
        /// Requested volume
        volume_ml: f64,
        /// Smallest accepted volume
        min_ml: f64,
        /// Largest accepted volume
        max_ml: f64,
    },
}

impl From<CalculationError> for AppError {
    fn from(error: CalculationError) -> Self {
        match &error {
            CalculationError::UnknownMethod(method) => AppError::invalid_input(UNABLE_TO_CALCULATE)
                .with_resource_id(method.clone())
                .with_details(serde_json::json!({ "reason": error.to_string() })),
            CalculationError::InvalidVolume(_) => AppError::invalid_input(UNABLE_TO_CALCULATE)
                .with_details(serde_json::json!({ "reason": error.to_string() })),
            CalculationError::VolumeOutOfRange { min_ml, max_ml, .. } => {
                AppError::out_of_range(error.to_string()).with_details(serde_json::json!({
                    "min_ml": min_ml,
                    "max_ml": max_ml,
                }))
            }
        }
    }
}

/// Calculate a brew recipe
///
/// `coffee_amount_g` is `volume_ml / N`, where `N` is the method's ratio
/// preset for the requested strength. It is left unrounded.
///
/// # Errors
///
/// Returns `CalculationError::UnknownMethod` if the method id is not in the catalog.
/// Returns `CalculationError::InvalidVolume` if the volume is not a positive finite number.
pub fn calculate_brew_ratio(
    input: &CalculatorInput,
) -> Result<CalculatorResult, CalculationError> {
    let method = find_method(&input.method)
        .ok_or_else(|| CalculationError::UnknownMethod(input.method.clone()))?;

    if !input.volume_ml.is_finite() || input.volume_ml <= 0.0 {
        return Err(CalculationError::InvalidVolume(input.volume_ml));
    }

    let denominator = method.ratio_for(input.strength);
    let coffee_amount_g = input.volume_ml / denominator;

    debug!(
        brew.method = method.id,
        brew.volume_ml = input.volume_ml,
        brew.strength = %input.strength,
        brew.roast_level = %input.roast_level,
        brew.coffee_g = coffee_amount_g,
        "Calculated brew ratio"
    );

    Ok(CalculatorResult {
        method,
        coffee_amount_g,
        water_amount_ml: input.volume_ml,
        ratio: format_ratio(denominator),
        temperature: method.temperature_for(input.roast_level),
        grind_size: method.grind_size,
        brew_time: method.brew_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoastLevel, Strength};

    #[test]
    fn test_pourover_reference_recipe() {
        let input = CalculatorInput::new("pourover", 300.0, Strength::Average, RoastLevel::Medium);
        let result = calculate_brew_ratio(&input).unwrap();

        assert!((result.coffee_amount_g - 20.0).abs() < 1e-9);
        assert!((result.water_amount_ml - 300.0).abs() < f64::EPSILON);
        assert_eq!(result.ratio, "1:15");
        assert_eq!(result.temperature, "91-94°C");
        assert_eq!(result.grind_size, "Medium-fine");
        assert_eq!(result.method.id, "pourover");
    }

    #[test]
    fn test_unknown_method() {
        let input =
            CalculatorInput::new("percolator", 300.0, Strength::Average, RoastLevel::Medium);
        assert_eq!(
            calculate_brew_ratio(&input),
            Err(CalculationError::UnknownMethod("percolator".to_owned()))
        );
    }

    #[test]
    fn test_non_positive_volume_is_rejected() {
        for volume in [0.0, -250.0, f64::NAN, f64::INFINITY] {
            let input = CalculatorInput::new("chemex", volume, Strength::Mild, RoastLevel::Light);
            assert!(matches!(
                calculate_brew_ratio(&input),
                Err(CalculationError::InvalidVolume(_))
            ));
        }
    }

    #[test]
    fn test_core_does_not_enforce_display_range() {
        let input = CalculatorInput::new("espresso", 18.0, Strength::Average, RoastLevel::Dark);
        let result = calculate_brew_ratio(&input).unwrap();
        assert!((result.coffee_amount_g - 9.0).abs() < 1e-9);
        assert_eq!(result.ratio, "1:2");
    }

    #[test]
    fn test_app_error_mapping() {
        let err: AppError = CalculationError::UnknownMethod("percolator".to_owned()).into();
        assert_eq!(err.http_status(), 400);
        assert_eq!(err.message, UNABLE_TO_CALCULATE);
        assert_eq!(err.context.resource_id.as_deref(), Some("percolator"));

        let err: AppError = CalculationError::VolumeOutOfRange {
            volume_ml: 5000.0,
            min_ml: 50.0,
            max_ml: 2000.0,
        }
        .into();
        assert_eq!(err.code, icb_core::errors::ErrorCode::ValueOutOfRange);
    }
}
