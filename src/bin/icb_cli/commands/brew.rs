// ABOUTME: Brew commands for icb-cli
// ABOUTME: Handles calculate, methods and convert by delegating to the brewing crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

use indian_coffee_beans::{
    brewing::{
        brewing_methods, calculate_brew_ratio, convert_volume, find_method, BrewingConfig,
        CalculatorInput, RoastLevel, Strength, VolumeUnit,
    },
    errors::{AppError, AppResult},
};
use tracing::info;

use crate::helpers::display::{
    display_conversion, display_method_detail, display_method_table, display_recipe,
};

type Result<T> = AppResult<T>;

/// Arguments of `icb-cli calculate`
pub struct CalculateArgs {
    pub method: String,
    pub volume: Option<f64>,
    pub unit: VolumeUnit,
    pub strength: Strength,
    pub roast: RoastLevel,
    pub json: bool,
}

/// Calculate and print a recipe
pub fn calculate(config: &BrewingConfig, args: &CalculateArgs) -> Result<()> {
    let method = find_method(&args.method).ok_or_else(|| {
        AppError::invalid_input(format!(
            "Unknown brewing method '{}'. Run `icb-cli methods` to see the available methods",
            args.method
        ))
        .with_resource_id(args.method.clone())
    })?;

    let volume_ml = config.resolve_volume(method, args.volume, args.unit)?;

    let input = CalculatorInput::new(method.id, volume_ml, args.strength, args.roast);
    let result = calculate_brew_ratio(&input)?;
    info!(method = method.id, volume_ml, "Recipe calculated");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_recipe(&result, &input, config.display_decimals);
    }

    Ok(())
}

/// Print the method catalog
pub fn methods(detailed: bool) {
    if detailed {
        for method in brewing_methods() {
            display_method_detail(method);
        }
    } else {
        display_method_table(brewing_methods());
    }
}

/// Convert and print a volume
pub fn convert(value: f64, from: VolumeUnit, to: VolumeUnit) {
    display_conversion(value, from, to, convert_volume(value, from, to));
}
