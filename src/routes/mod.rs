// ABOUTME: Route module organization for the brew server HTTP endpoints
// ABOUTME: Provides route definitions grouped by domain with thin handlers over the brewing crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

//! Route module for the brew server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to `icb_brewing`.

/// Brew calculator, method catalog and unit conversion routes
pub mod brew;
/// Health check and system status routes
pub mod health;

pub use brew::BrewRoutes;
pub use health::HealthRoutes;
