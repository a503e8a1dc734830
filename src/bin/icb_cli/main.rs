// ABOUTME: icb-cli - command-line brew-ratio calculator for Indian Coffee Beans
// ABOUTME: Calculates recipes, lists brewing methods and converts drink volumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans
//!
//! Usage:
//! ```bash
//! # Recipe for a 300 ml pour over at average strength
//! icb-cli calculate --method pourover --volume 300
//!
//! # Two cups of strong French press from a dark roast, as JSON
//! icb-cli calculate --method french-press --volume 2 --unit cups \
//!     --strength robust --roast dark --json
//!
//! # Use the method's usual drink size
//! icb-cli calculate --method espresso
//!
//! # List methods
//! icb-cli methods --detailed
//!
//! # Convert 12 fl oz to ml
//! icb-cli convert 12 --from oz --to ml
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use indian_coffee_beans::{
    brewing::{BrewingConfig, RoastLevel, Strength, VolumeUnit},
    errors::{AppError, AppResult},
    logging::LoggingConfig,
};
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "icb-cli",
    version,
    about = "Indian Coffee Beans brew-ratio calculator",
    long_about = "Work out how much coffee to use for a brewing method, drink size, \
                  strength and roast level."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate a brew recipe
    Calculate {
        /// Brewing method id (e.g. pourover, v60, frenchpress)
        #[arg(long, short = 'm')]
        method: String,

        /// Drink volume; defaults to the method's usual drink size
        #[arg(long)]
        volume: Option<f64>,

        /// Unit of --volume (ml, cups, oz)
        #[arg(long, default_value_t = VolumeUnit::Milliliters)]
        unit: VolumeUnit,

        /// Strength preference (mild, average, robust)
        #[arg(long, short = 's', default_value_t = Strength::Average)]
        strength: Strength,

        /// Roast level of the beans (light, medium, dark)
        #[arg(long, short = 'r', default_value_t = RoastLevel::Medium)]
        roast: RoastLevel,

        /// Print the recipe as JSON
        #[arg(long)]
        json: bool,
    },

    /// List brewing methods
    Methods {
        /// Show description, presets and tips for each method
        #[arg(long, short = 'd')]
        detailed: bool,
    },

    /// Convert a volume between ml, cups and fluid ounces
    Convert {
        /// Amount to convert
        value: f64,

        /// Source unit
        #[arg(long)]
        from: VolumeUnit,

        /// Target unit
        #[arg(long)]
        to: VolumeUnit,
    },
}

fn run(cli: Cli) -> Result<()> {
    LoggingConfig::for_cli(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let config = BrewingConfig::from_env()?;
    debug!(?config, "Brewing configuration loaded");

    match cli.command {
        Command::Calculate {
            method,
            volume,
            unit,
            strength,
            roast,
            json,
        } => commands::brew::calculate(
            &config,
            &commands::brew::CalculateArgs {
                method,
                volume,
                unit,
                strength,
                roast,
                json,
            },
        ),
        Command::Methods { detailed } => {
            commands::brew::methods(detailed);
            Ok(())
        }
        Command::Convert { value, from, to } => {
            commands::brew::convert(value, from, to);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.message);
            ExitCode::FAILURE
        }
    }
}
