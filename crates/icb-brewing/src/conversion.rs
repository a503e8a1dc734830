// ABOUTME: Unit conversion utilities for drink volumes
// ABOUTME: Converts between milliliters, US cups and US fluid ounces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use icb_core::constants::units::{ML_PER_ML, ML_PER_US_CUP, ML_PER_US_FL_OZ};
use icb_core::errors::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conversion error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Unit string not recognized
    #[error("Unknown volume unit '{0}' (expected ml, cups or oz)")]
    UnknownUnit(String),
}

impl From<ConversionError> for AppError {
    fn from(error: ConversionError) -> Self {
        Self::invalid_input(error.to_string()).with_source(error)
    }
}

/// Volume unit accepted by the brewing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VolumeUnit {
    /// Milliliters (base unit)
    #[default]
    #[serde(rename = "ml", alias = "milliliters")]
    Milliliters,
    /// US customary cups (236.588 ml)
    #[serde(rename = "cups", alias = "cup")]
    Cups,
    /// US fluid ounces (29.5735 ml)
    #[serde(rename = "oz", alias = "floz")]
    FluidOunces,
}

impl VolumeUnit {
    /// Milliliters in one of this unit
    #[must_use]
    pub const fn ml_per_unit(&self) -> f64 {
        match self {
            Self::Milliliters => ML_PER_ML,
            Self::Cups => ML_PER_US_CUP,
            Self::FluidOunces => ML_PER_US_FL_OZ,
        }
    }

    /// Get the abbreviation for display
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Milliliters => "ml",
            Self::Cups => "cups",
            Self::FluidOunces => "oz",
        }
    }
}

impl FromStr for VolumeUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Ok(Self::Milliliters)
            }
            "cup" | "cups" => Ok(Self::Cups),
            "oz" | "floz" | "fl oz" | "fl. oz" | "fluid ounce" | "fluid ounces" => {
                Ok(Self::FluidOunces)
            }
            _ => Err(ConversionError::UnknownUnit(s.to_owned())),
        }
    }
}

impl Display for VolumeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Convert a volume between units
///
/// Total over `f64`: no validation is applied, so negative or non-finite
/// inputs convert the same way they would on paper.
///
/// # Examples
///
/// ```rust
/// use icb_brewing::{convert_volume, VolumeUnit};
///
/// let ml = convert_volume(1.0, VolumeUnit::Cups, VolumeUnit::Milliliters);
/// assert!((ml - 236.588).abs() < 0.01);
/// ```
#[must_use]
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.ml_per_unit() / to.ml_per_unit()
}

/// Convert a volume in `unit` to milliliters
#[must_use]
pub fn to_milliliters(value: f64, unit: VolumeUnit) -> f64 {
    convert_volume(value, unit, VolumeUnit::Milliliters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing() {
        assert_eq!("ML".parse::<VolumeUnit>(), Ok(VolumeUnit::Milliliters));
        assert_eq!("cup".parse::<VolumeUnit>(), Ok(VolumeUnit::Cups));
        assert_eq!("fl oz".parse::<VolumeUnit>(), Ok(VolumeUnit::FluidOunces));
        assert_eq!(
            "gallon".parse::<VolumeUnit>(),
            Err(ConversionError::UnknownUnit("gallon".to_owned()))
        );
    }

    #[test]
    fn test_same_unit_is_identity() {
        for unit in [VolumeUnit::Milliliters, VolumeUnit::Cups, VolumeUnit::FluidOunces] {
            assert!((convert_volume(3.25, unit, unit) - 3.25).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_cups_to_ounces() {
        // 1 US cup is 8 US fluid ounces
        let oz = convert_volume(1.0, VolumeUnit::Cups, VolumeUnit::FluidOunces);
        assert!((oz - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_serde_names() {
        let unit: VolumeUnit = serde_json::from_str("\"oz\"").unwrap();
        assert_eq!(unit, VolumeUnit::FluidOunces);
        assert_eq!(serde_json::to_string(&VolumeUnit::Cups).unwrap(), "\"cups\"");
    }
}
