// ABOUTME: Main library entry point for the Indian Coffee Beans brew service
// ABOUTME: Wires the brewing calculator into an HTTP API with config, logging and middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

#![deny(unsafe_code)]

//! # Indian Coffee Beans
//!
//! Brew-ratio calculator service. Given a brewing method, a drink volume, a
//! strength preference and a roast level, it answers how much coffee to use,
//! at what water temperature, grind and brew time.
//!
//! The calculation itself lives in the `icb_brewing` crate and is pure. This
//! crate adds the surfaces around it:
//!
//! - **Routes**: JSON endpoints for recipes, the method catalog and unit conversion
//! - **Config**: Environment-driven server and brewing configuration
//! - **Logging**: Structured `tracing` output in json, pretty or compact form
//! - **Middleware**: Request IDs, access logging and CORS
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use indian_coffee_beans::config::ServerConfig;
//! use indian_coffee_beans::server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     server::run(config).await
//! }
//! ```

/// Configuration management
pub mod config;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for request tracing and CORS
pub mod middleware;

/// `HTTP` routes
pub mod routes;

/// Router assembly and HTTP server lifecycle
pub mod server;

pub use icb_brewing as brewing;
