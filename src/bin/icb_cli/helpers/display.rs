// ABOUTME: Output formatting helpers for icb-cli
// ABOUTME: Provides consistent display functions for recipes, methods and conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

use indian_coffee_beans::brewing::{
    format_ratio, round_to, BrewingMethod, CalculatorInput, CalculatorResult, VolumeUnit,
};

/// Display a calculated recipe
pub fn display_recipe(result: &CalculatorResult, input: &CalculatorInput, decimals: u8) {
    let decimals_usize = usize::from(decimals);
    println!(
        "\n{} ({} strength, {} roast)",
        result.method.name, input.strength, input.roast_level
    );
    println!("{}", "=".repeat(50));
    println!(
        "   Coffee:      {:.decimals_usize$} g",
        result.coffee_amount_rounded(decimals)
    );
    println!("   Water:       {:.0} ml", result.water_amount_ml);
    println!("   Ratio:       {}", result.ratio);
    println!("   Temperature: {}", result.temperature);
    println!("   Grind:       {}", result.grind_size);
    println!("   Brew time:   {}", result.brew_time);
    println!("{}", "=".repeat(50));

    if let Some(tip) = result.method.tips.first() {
        println!("Tip: {tip}");
    }
}

/// Display the method catalog as a table
pub fn display_method_table(methods: &[BrewingMethod]) {
    println!(
        "\n{:<20} {:<22} {:<22} {:>8} {:>10}",
        "ID", "Name", "Grind", "Ratio", "Default"
    );
    println!("{}", "-".repeat(86));
    for method in methods {
        println!(
            "{:<20} {:<22} {:<22} {:>8} {:>7} ml",
            method.id,
            method.name,
            method.grind_size,
            format_ratio(method.ratios.average),
            method.default_volume_ml
        );
    }
    println!("\n{} methods. Use --detailed for descriptions and tips.", methods.len());
}

/// Display everything known about one method
pub fn display_method_detail(method: &BrewingMethod) {
    println!("\n{} [{}]", method.name, method.id);
    println!("{}", "=".repeat(60));
    println!("{}", method.description);
    println!("   Flavor:      {}", method.flavor_profile);
    println!("   Grind:       {}", method.grind_size);
    println!("   Brew time:   {}", method.brew_time);
    println!("   Default:     {} ml", method.default_volume_ml);
    println!(
        "   Ratios:      mild {}  average {}  robust {}",
        format_ratio(method.ratios.mild),
        format_ratio(method.ratios.average),
        format_ratio(method.ratios.robust)
    );
    println!(
        "   Temperature: light {}  medium {}  dark {}",
        method.temperatures.light, method.temperatures.medium, method.temperatures.dark
    );
    if !method.tips.is_empty() {
        println!("   Tips:");
        for tip in method.tips {
            println!("   • {tip}");
        }
    }
}

/// Display a unit conversion
pub fn display_conversion(value: f64, from: VolumeUnit, to: VolumeUnit, result: f64) {
    println!("{value} {from} = {} {to}", round_to(result, 3));
}
