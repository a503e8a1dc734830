// ABOUTME: Data models for brew-ratio calculation requests and results
// ABOUTME: Defines Strength, RoastLevel, CalculatorInput and CalculatorResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::methods::BrewingMethod;

/// Failure to parse a strength or roast preference from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParsePreferenceError {
    /// Which preference was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
    /// Accepted spellings
    pub expected: &'static str,
}

/// Strength preference, selecting one of a method's three ratio presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Lighter cup, more water per gram of coffee
    Mild,
    /// The method's reference ratio
    #[default]
    Average,
    /// Heavier cup, less water per gram of coffee
    Robust,
}

impl Strength {
    /// All strengths from lightest to heaviest
    pub const ALL: [Self; 3] = [Self::Mild, Self::Average, Self::Robust];

    /// Lowercase identifier used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Average => "average",
            Self::Robust => "robust",
        }
    }

    /// Parse leniently, falling back to [`Strength::Average`] for unknown input
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!(strength = %s, "Unknown strength, falling back to average");
            Self::default()
        })
    }
}

impl FromStr for Strength {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mild" | "light" | "weak" => Ok(Self::Mild),
            "average" | "medium" | "balanced" => Ok(Self::Average),
            "robust" | "strong" => Ok(Self::Robust),
            _ => Err(ParsePreferenceError {
                kind: "strength",
                value: s.to_owned(),
                expected: "mild, average, robust",
            }),
        }
    }
}

impl Display for Strength {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roast level of the beans; only used to pick a brew temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoastLevel {
    /// Light roast, needs the hottest water
    Light,
    /// Medium roast
    #[default]
    Medium,
    /// Dark roast, extracts easily at lower temperatures
    Dark,
}

impl RoastLevel {
    /// All roast levels from lightest to darkest
    pub const ALL: [Self; 3] = [Self::Light, Self::Medium, Self::Dark];

    /// Lowercase identifier used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Dark => "dark",
        }
    }

    /// Parse leniently, falling back to [`RoastLevel::Medium`] for unknown input
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!(roast_level = %s, "Unknown roast level, falling back to medium");
            Self::default()
        })
    }
}

impl FromStr for RoastLevel {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "dark" => Ok(Self::Dark),
            _ => Err(ParsePreferenceError {
                kind: "roast level",
                value: s.to_owned(),
                expected: "light, medium, dark",
            }),
        }
    }
}

impl Display for RoastLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Brewing method id, e.g. `pourover`
    pub method: String,
    /// Desired drink volume in milliliters
    #[serde(alias = "volume")]
    pub volume_ml: f64,
    /// Strength preference
    #[serde(default)]
    pub strength: Strength,
    /// Roast level of the beans
    #[serde(default)]
    pub roast_level: RoastLevel,
}

impl CalculatorInput {
    /// Build an input from its parts
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        volume_ml: f64,
        strength: Strength,
        roast_level: RoastLevel,
    ) -> Self {
        Self {
            method: method.into(),
            volume_ml,
            strength,
            roast_level,
        }
    }
}

/// A computed recipe
///
/// Everything except `coffee_amount_g` and `ratio` is echoed from the method
/// descriptor or the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorResult {
    /// The method the recipe is for
    pub method: &'static BrewingMethod,
    /// Ground coffee in grams, unrounded
    pub coffee_amount_g: f64,
    /// Water in milliliters (the requested drink volume)
    pub water_amount_ml: f64,
    /// Ratio as displayed, e.g. `1:15`
    pub ratio: String,
    /// Recommended water temperature for the roast level
    pub temperature: &'static str,
    /// Grind size label
    pub grind_size: &'static str,
    /// Brew time label
    pub brew_time: &'static str,
}

impl CalculatorResult {
    /// Coffee grams rounded for display
    #[must_use]
    pub fn coffee_amount_rounded(&self, decimals: u8) -> f64 {
        round_to(self.coffee_amount_g, decimals)
    }
}

impl Display for CalculatorResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} recipe", self.method.name)?;
        writeln!(f, "   Coffee:      {:.1} g", self.coffee_amount_g)?;
        writeln!(f, "   Water:       {:.0} ml", self.water_amount_ml)?;
        writeln!(f, "   Ratio:       {}", self.ratio)?;
        writeln!(f, "   Temperature: {}", self.temperature)?;
        writeln!(f, "   Grind:       {}", self.grind_size)?;
        write!(f, "   Brew time:   {}", self.brew_time)
    }
}

/// Round `value` to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10_f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}
