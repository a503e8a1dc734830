// ABOUTME: Configuration error types for brewing configuration validation
// ABOUTME: Defines error variants for invalid ranges and unparsable environment values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

//! Configuration error types for brewing configuration validation.

use icb_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g. minimum volume above maximum)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment variable
    #[error("Parse error for {var}: '{value}'")]
    Parse {
        /// Variable name
        var: &'static str,
        /// Raw value that failed to parse
        value: String,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
