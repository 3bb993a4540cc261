// ABOUTME: Configuration module for the VitalMotion server
// ABOUTME: Environment-only configuration loaded once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

/// Environment-based server configuration
pub mod environment;

pub use environment::{
    CorsConfig, DatabaseConfig, Environment, FirebaseConfig, RecommendationSettings,
    ServerConfig,
};
