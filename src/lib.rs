// ABOUTME: Main library entry point for the VitalMotion recommendation server
// ABOUTME: Wires configuration, auth, document storage, recommendation service, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

#![deny(unsafe_code)]

//! # VitalMotion Server
//!
//! HTTP API that stores a user's exercises, workout templates and pain notes,
//! and recommends the next muscle group to train with a pain-adjusted
//! intensity.
//!
//! ## Architecture
//!
//! - **`vitalmotion_core`**: errors, domain models, constants
//! - **`vitalmotion_intelligence`**: the recommendation engine
//! - **database**: SQLite document store addressed by collection path
//! - **recommendation**: collaborator traits and the service joining them
//! - **auth**: bearer token verification (Firebase ID tokens)
//! - **routes**: axum routers per domain
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitalmotion_server::config::ServerConfig;
//! use vitalmotion_server::resources::ServerResources;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! let resources = Arc::new(ServerResources::from_config(config).await?);
//! vitalmotion_server::server::serve(resources).await?;
//! # Ok(())
//! # }
//! ```

/// Bearer token authentication and Firebase verification
pub mod auth;

/// Environment configuration
pub mod config;

/// Server constants and defaults
pub mod constants;

/// Document store
pub mod database;

/// Unified error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Premade exercise and workout catalog
pub mod premades;

/// Recommendation collaborators and service
pub mod recommendation;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;

/// Router assembly and serving
pub mod server;

/// New user bootstrap
pub mod users;
