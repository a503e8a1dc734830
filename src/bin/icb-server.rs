// ABOUTME: Brew server binary exposing the brew-ratio calculator over HTTP
// ABOUTME: Loads configuration from the environment, initializes logging and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

//! # Indian Coffee Beans Brew Server Binary
//!
//! Starts the JSON API for recipes, the brewing method catalog and volume
//! conversion. Stops cleanly on Ctrl-C.

use anyhow::Result;
use clap::Parser;
use indian_coffee_beans::{config::ServerConfig, logging::LoggingConfig, server};
use tracing::info;

#[derive(Parser)]
#[command(name = "icb-server")]
#[command(about = "Indian Coffee Beans brew-ratio calculator API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    config.validate()?;

    LoggingConfig::for_server(&config).init()?;

    info!("Starting Indian Coffee Beans brew server");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    server::run(config).await
}

fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_addr());

    info!("=== Available API Endpoints ===");
    info!("Brew Calculator:");
    info!("   Calculate:         POST {base}/api/brew/calculate");
    info!("   List Methods:      GET  {base}/api/brew/methods");
    info!("   Method Details:    GET  {base}/api/brew/methods/{{method_id}}");
    info!("   Convert Volume:    GET  {base}/api/brew/convert?value=&from=&to=");
    info!("Monitoring:");
    info!("   Health:            GET  {base}/health");
    info!("   Readiness:         GET  {base}/ready");
    info!("=== End of Endpoint List ===");
}
