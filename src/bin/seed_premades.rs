// ABOUTME: Premade catalog seeding utility for the VitalMotion server
// ABOUTME: Writes the built-in premade exercises and workouts into the global collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! Premade catalog seeder.
//!
//! Usage:
//! ```bash
//! # Seed premades (uses DATABASE_URL from environment)
//! cargo run --bin seed-premades
//!
//! # Override database URL
//! cargo run --bin seed-premades -- --database-url sqlite:./data/vitalmotion.db
//!
//! # Rewrite existing premades
//! cargo run --bin seed-premades -- --force
//! ```

use std::env;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use vitalmotion_server::constants::database::DEFAULT_DATABASE_URL;
use vitalmotion_server::database::DocumentStore;
use vitalmotion_server::premades::{seed_premades, SeedOutcome};

#[derive(Parser)]
#[command(
    name = "seed-premades",
    about = "VitalMotion premade catalog seeder",
    long_about = "Create the premade exercises and workouts copied into every new VitalMotion user"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Rewrite premades even if the catalog already exists
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());

    info!("Connecting to database: {}", database_url);
    let store = DocumentStore::connect(&database_url).await?;

    match seed_premades(&store, args.force).await? {
        SeedOutcome::Seeded {
            exercises,
            workouts,
        } => info!("Seeded {} premade exercises and {} premade workouts", exercises, workouts),
        SeedOutcome::AlreadySeeded => {
            info!("Premade catalog already present. Use --force to re-seed.");
        }
    }
    Ok(())
}
