// ABOUTME: Server binary for the VitalMotion recommendation API
// ABOUTME: Loads environment configuration, initializes logging, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! # VitalMotion Server Binary
//!
//! ```bash
//! DATABASE_URL=sqlite:./data/vitalmotion.db FIREBASE_PROJECT_ID=my-project \
//!     cargo run --bin vitalmotion-server -- --http-port 5001
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use vitalmotion_server::{
    config::ServerConfig, logging, resources::ServerResources, server,
};

#[derive(Parser)]
#[command(name = "vitalmotion-server")]
#[command(about = "VitalMotion API - workout tracking and next-exercise recommendations")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    config.validate()?;

    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config).await?);

    if let Err(e) = server::serve(resources).await {
        error!(error = %e, "Server exited with an error");
        return Err(e);
    }
    Ok(())
}
