// ABOUTME: Configuration management module for server settings
// ABOUTME: Handles environment-driven server configuration and shared config types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

//! Configuration module for the brew server
//!
//! - **Environment**: Server configuration from environment variables
//! - **Types**: Log level and deployment environment enums

/// Environment and server configuration
pub mod environment;
/// Core configuration type definitions
pub mod types;

pub use environment::ServerConfig;
pub use types::{Environment, LogLevel};
