// ABOUTME: Server-wide constants and environment defaults for the VitalMotion API
// ABOUTME: Ports, service names, header names, and default configuration values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! # Constants Module
//!
//! Hardcoded defaults for the server. Domain constants (pain thresholds,
//! collection paths) live in `vitalmotion_core::constants` and are re-exported
//! here.

pub use vitalmotion_core::constants::{collections, pain, recommendation};

/// Service identification
pub mod service_names {
    /// Service name for structured logs
    pub const VITALMOTION_SERVER: &str = "vitalmotion-server";

    /// Name reported by the exercise lookup collaborator in errors
    pub const EXERCISE_CATALOG: &str = "exercise catalog";

    /// Name reported by the pain journal collaborator in errors
    pub const PAIN_JOURNAL: &str = "pain journal";

    /// Name reported by the workout catalog collaborator in errors
    pub const WORKOUT_CATALOG: &str = "workout catalog";
}

/// Network defaults
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 5001;

    /// Default bind address
    pub const DEFAULT_HOST: &str = "127.0.0.1";

    /// Default CORS origin list
    pub const DEFAULT_CORS_ORIGINS: &str = "*";

    /// Header carrying the request ID
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// Database defaults
pub mod database {
    /// Default SQLite URL
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/vitalmotion.db";

    /// Maximum pooled connections for file databases
    pub const MAX_CONNECTIONS: u32 = 5;
}

/// Firebase defaults
pub mod firebase {
    /// Public key cache TTL when not configured (1 hour)
    pub const DEFAULT_KEY_CACHE_TTL_SECS: u64 = 3600;
}
