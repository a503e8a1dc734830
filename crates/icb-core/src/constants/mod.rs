// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups unit factors, service names and environment defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat file.

/// Volume unit conversion factors
pub mod units;

/// Service identifiers used in logs and health responses
pub mod service_names {
    /// HTTP API service name
    pub const ICB_BREW_SERVER: &str = "icb-brew-server";
    /// Command-line tool name
    pub const ICB_CLI: &str = "icb-cli";
}

/// Defaults applied when an environment variable is not set
pub mod defaults {
    /// Default bind address for the HTTP server
    pub const HTTP_HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;
    /// Smallest drink volume the input surfaces accept (ml)
    pub const MIN_VOLUME_ML: f64 = 50.0;
    /// Largest drink volume the input surfaces accept (ml)
    pub const MAX_VOLUME_ML: f64 = 2000.0;
    /// Decimal places used when displaying coffee grams
    pub const DISPLAY_DECIMALS: u8 = 1;
}

/// User-facing messages shared by the HTTP API and the CLI
pub mod messages {
    /// Shown whenever a recipe cannot be produced for the given inputs
    pub const UNABLE_TO_CALCULATE: &str = "Unable to calculate recipe. Please check your inputs.";
}
