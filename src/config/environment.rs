// ABOUTME: Environment-based configuration management for the brew server
// ABOUTME: Loads bind address, port, log level and brewing limits from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use icb_brewing::BrewingConfig;
use icb_core::constants::defaults;
use serde::{Deserialize, Serialize};

use super::types::{Environment, LogLevel};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind the HTTP listener to
    pub host: IpAddr,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Comma-separated CORS origins, or `*` for any
    pub cors_allowed_origins: String,
    /// Accepted volume range and display precision
    pub brewing: BrewingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            cors_allowed_origins: "*".to_owned(),
            brewing: BrewingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable value
    /// or the brewing limits fail validation
    pub fn from_env() -> Result<Self> {
        let host_raw = env_var_or("HOST", defaults::HTTP_HOST);
        let host = host_raw
            .parse()
            .with_context(|| format!("Invalid HOST value: {host_raw}"))?;

        let port_raw = env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string());
        let http_port = port_raw
            .parse()
            .with_context(|| format!("Invalid HTTP_PORT value: {port_raw}"))?;

        let config = Self {
            host,
            http_port,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            cors_allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            brewing: BrewingConfig::from_env().context("Invalid brewing configuration")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the port is zero or the brewing limits are invalid
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            anyhow::bail!("HTTP_PORT must be non-zero");
        }
        self.brewing
            .validate()
            .context("Invalid brewing configuration")?;
        Ok(())
    }

    /// Socket address the HTTP listener binds to
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Indian Coffee Beans Brew Server Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - CORS Origins: {}\n\
             - Volume Range: {}-{} ml\n\
             - Display Decimals: {}",
            self.bind_addr(),
            self.environment,
            self.log_level,
            self.cors_allowed_origins,
            self.brewing.min_volume_ml,
            self.brewing.max_volume_ml,
            self.brewing.display_decimals,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
