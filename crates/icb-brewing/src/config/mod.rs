// ABOUTME: Brewing configuration for accepted volume range and display precision
// ABOUTME: Loads from environment variables with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use std::env;
use std::str::FromStr;

use icb_core::constants::defaults;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::CalculationError;
use crate::conversion::{to_milliliters, VolumeUnit};
use crate::methods::BrewingMethod;

/// Limits applied by input surfaces before calling the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewingConfig {
    /// Smallest accepted drink volume (ml)
    pub min_volume_ml: f64,
    /// Largest accepted drink volume (ml)
    pub max_volume_ml: f64,
    /// Decimal places for displayed coffee grams
    pub display_decimals: u8,
}

impl Default for BrewingConfig {
    fn default() -> Self {
        Self {
            min_volume_ml: defaults::MIN_VOLUME_ML,
            max_volume_ml: defaults::MAX_VOLUME_ML,
            display_decimals: defaults::DISPLAY_DECIMALS,
        }
    }
}

impl BrewingConfig {
    /// Load brewing configuration from environment
    ///
    /// Reads `BREW_MIN_VOLUME_ML`, `BREW_MAX_VOLUME_ML` and `BREW_DISPLAY_DECIMALS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a variable is set but not a number.
    /// Returns `ConfigError::InvalidRange` if the resulting range is unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            min_volume_ml: env_or("BREW_MIN_VOLUME_ML", defaults::MIN_VOLUME_ML)?,
            max_volume_ml: env_or("BREW_MAX_VOLUME_ML", defaults::MAX_VOLUME_ML)?,
            display_decimals: env_or("BREW_DISPLAY_DECIMALS", defaults::DISPLAY_DECIMALS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if the bounds are non-finite,
    /// non-positive or inverted, or if more than 6 display decimals are requested.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_volume_ml.is_finite() || !self.max_volume_ml.is_finite() {
            return Err(ConfigError::InvalidRange("volume bounds must be finite"));
        }
        if self.min_volume_ml <= 0.0 {
            return Err(ConfigError::InvalidRange("minimum volume must be positive"));
        }
        if self.min_volume_ml >= self.max_volume_ml {
            return Err(ConfigError::InvalidRange(
                "minimum volume must be below maximum volume",
            ));
        }
        if self.display_decimals > 6 {
            return Err(ConfigError::InvalidRange("display decimals must be 0-6"));
        }
        Ok(())
    }

    /// Check a requested volume against the accepted range
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::InvalidVolume` for non-finite or non-positive volumes
    /// and `CalculationError::VolumeOutOfRange` for volumes outside the bounds.
    pub fn validate_volume(&self, volume_ml: f64) -> Result<f64, CalculationError> {
        if !volume_ml.is_finite() || volume_ml <= 0.0 {
            return Err(CalculationError::InvalidVolume(volume_ml));
        }
        if volume_ml < self.min_volume_ml || volume_ml > self.max_volume_ml {
            return Err(CalculationError::VolumeOutOfRange {
                volume_ml,
                min_ml: self.min_volume_ml,
                max_ml: self.max_volume_ml,
            });
        }
        Ok(volume_ml)
    }

    /// Turn an optional requested volume into a range-checked volume in ml
    ///
    /// A missing volume falls back to the method's `default_volume_ml`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::validate_volume`], applied after unit conversion.
    pub fn resolve_volume(
        &self,
        method: &BrewingMethod,
        volume: Option<f64>,
        unit: VolumeUnit,
    ) -> Result<f64, CalculationError> {
        let volume_ml = volume.map_or_else(
            || {
                debug!(
                    method = method.id,
                    volume_ml = method.default_volume_ml,
                    "No volume given, using the method's default"
                );
                method.default_volume_ml
            },
            |volume| to_milliliters(volume, unit),
        );
        self.validate_volume(volume_ml)
    }
}

fn env_or<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse { var, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::find_method;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("BREW_MIN_VOLUME_ML");
        env::remove_var("BREW_MAX_VOLUME_ML");
        env::remove_var("BREW_DISPLAY_DECIMALS");
    }

    #[test]
    #[serial]
    fn test_defaults_from_empty_env() {
        clear_env();
        let config = BrewingConfig::from_env().unwrap();
        assert_eq!(config, BrewingConfig::default());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("BREW_MIN_VOLUME_ML", "30");
        env::set_var("BREW_MAX_VOLUME_ML", "1500");
        let config = BrewingConfig::from_env().unwrap();
        clear_env();

        assert!((config.min_volume_ml - 30.0).abs() < f64::EPSILON);
        assert!((config.max_volume_ml - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_unparsable_env_value() {
        clear_env();
        env::set_var("BREW_MAX_VOLUME_ML", "lots");
        let result = BrewingConfig::from_env();
        clear_env();

        assert_eq!(
            result,
            Err(ConfigError::Parse {
                var: "BREW_MAX_VOLUME_ML",
                value: "lots".to_owned()
            })
        );
    }

    #[test]
    fn test_inverted_range_is_invalid() {
        let config = BrewingConfig {
            min_volume_ml: 500.0,
            max_volume_ml: 100.0,
            ..BrewingConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_validate_volume() {
        let config = BrewingConfig::default();
        assert!(config.validate_volume(50.0).is_ok());
        assert!(config.validate_volume(2000.0).is_ok());
        assert!(matches!(
            config.validate_volume(49.9),
            Err(CalculationError::VolumeOutOfRange { .. })
        ));
        assert!(matches!(
            config.validate_volume(2500.0),
            Err(CalculationError::VolumeOutOfRange { .. })
        ));
        assert!(matches!(
            config.validate_volume(-1.0),
            Err(CalculationError::InvalidVolume(_))
        ));
    }

    #[test]
    fn test_resolve_volume_defaults_to_method_size() {
        let config = BrewingConfig::default();
        let espresso = find_method("espresso").unwrap();

        let volume_ml = config
            .resolve_volume(espresso, None, VolumeUnit::Cups)
            .unwrap();
        assert!((volume_ml - espresso.default_volume_ml).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_volume_converts_cups() {
        let config = BrewingConfig::default();
        let chemex = find_method("chemex").unwrap();

        let volume_ml = config
            .resolve_volume(chemex, Some(2.0), VolumeUnit::Cups)
            .unwrap();
        assert!((volume_ml - 473.176).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_volume_rejects_out_of_range() {
        let config = BrewingConfig::default();
        let pourover = find_method("pourover").unwrap();

        assert!(matches!(
            config.resolve_volume(pourover, Some(10.0), VolumeUnit::Cups),
            Err(CalculationError::VolumeOutOfRange { .. })
        ));
        assert!(matches!(
            config.resolve_volume(pourover, Some(20.0), VolumeUnit::Milliliters),
            Err(CalculationError::VolumeOutOfRange { .. })
        ));
    }
}
