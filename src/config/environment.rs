// ABOUTME: Environment-variable configuration for the VitalMotion server
// ABOUTME: Bind address, SQLite URL, CORS origins, Firebase verification, and recommendation tuning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! Every setting is read from the process environment (plus `.env` when
//! present) once at startup. Unparseable values are startup errors.

use crate::constants::{database, firebase, network, recommendation};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};
use vitalmotion_intelligence::RecommendationEngineConfig;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// sqlx connection URL (`sqlite:./path.db` or `sqlite::memory:`)
    pub url: String,
}

impl DatabaseConfig {
    /// Whether the URL points at an in-memory database
    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*`
    pub allowed_origins: String,
}

/// Firebase Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirebaseConfig {
    /// Firebase project ID (required for token validation)
    pub project_id: Option<String>,
    /// Whether Firebase authentication is enabled
    pub enabled: bool,
    /// Cache TTL for Firebase public keys in seconds
    pub key_cache_ttl_secs: u64,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            enabled: false,
            key_cache_ttl_secs: firebase::DEFAULT_KEY_CACHE_TTL_SECS,
        }
    }
}

impl FirebaseConfig {
    /// Check if Firebase is enabled and has a project ID configured
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.enabled && self.project_id.is_some()
    }

    /// Load Firebase configuration from environment
    ///
    /// Environment variables:
    /// - `FIREBASE_PROJECT_ID` - Firebase project ID (required for token validation)
    /// - `FIREBASE_ENABLED` - Disable with `false` (default: enabled when a project ID is set)
    /// - `FIREBASE_KEY_CACHE_TTL_SECS` - Public key cache TTL (default: 3600)
    ///
    /// # Errors
    ///
    /// Returns an error if a value is present but cannot be parsed
    pub fn from_env() -> Result<Self> {
        let project_id = env::var("FIREBASE_PROJECT_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        let enabled = project_id.is_some()
            && env_var_or("FIREBASE_ENABLED", "true")
                .parse::<bool>()
                .context("Invalid FIREBASE_ENABLED value")?;

        if enabled {
            info!(
                project_id = project_id.as_deref().unwrap_or("(not set)"),
                "Firebase authentication enabled"
            );
        }

        Ok(Self {
            project_id,
            enabled,
            key_cache_ttl_secs: env_var_or(
                "FIREBASE_KEY_CACHE_TTL_SECS",
                &firebase::DEFAULT_KEY_CACHE_TTL_SECS.to_string(),
            )
            .parse()
            .context("Invalid FIREBASE_KEY_CACHE_TTL_SECS value")?,
        })
    }
}

/// Recommendation engine settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationSettings {
    /// Upper bound on the joined exercise and pain lookups, in milliseconds
    pub lookup_timeout_ms: u64,
    /// Trailing days of pain history that influence intensity
    pub pain_window_days: u32,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: recommendation::DEFAULT_LOOKUP_TIMEOUT_MS,
            pain_window_days: recommendation::DEFAULT_PAIN_WINDOW_DAYS,
        }
    }
}

impl RecommendationSettings {
    /// Lookup timeout as a [`Duration`]
    #[must_use]
    pub const fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    /// Engine configuration derived from these settings
    #[must_use]
    pub fn engine_config(&self) -> RecommendationEngineConfig {
        RecommendationEngineConfig::with_pain_window_days(self.pain_window_days)
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Firebase token verification
    pub firebase: FirebaseConfig,
    /// Recommendation engine settings
    pub recommendation: RecommendationSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: network::DEFAULT_HTTP_PORT,
            host: network::DEFAULT_HOST.to_owned(),
            environment: Environment::default(),
            database: DatabaseConfig {
                url: database::DEFAULT_DATABASE_URL.to_owned(),
            },
            cors: CorsConfig {
                allowed_origins: network::DEFAULT_CORS_ORIGINS.to_owned(),
            },
            firebase: FirebaseConfig::default(),
            recommendation: RecommendationSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable cannot be parsed, or
    /// if the resulting configuration fails [`ServerConfig::validate`]
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &network::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or("HOST", network::DEFAULT_HOST),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseConfig {
                url: env_var_or("DATABASE_URL", database::DEFAULT_DATABASE_URL),
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", network::DEFAULT_CORS_ORIGINS),
            },
            firebase: FirebaseConfig::from_env()?,
            recommendation: RecommendationSettings {
                lookup_timeout_ms: env_var_or(
                    "RECOMMENDATION_LOOKUP_TIMEOUT_MS",
                    &recommendation::DEFAULT_LOOKUP_TIMEOUT_MS.to_string(),
                )
                .parse()
                .context("Invalid RECOMMENDATION_LOOKUP_TIMEOUT_MS value")?,
                pain_window_days: env_var_or(
                    "RECOMMENDATION_PAIN_WINDOW_DAYS",
                    &recommendation::DEFAULT_PAIN_WINDOW_DAYS.to_string(),
                )
                .parse()
                .context("Invalid RECOMMENDATION_PAIN_WINDOW_DAYS value")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server cannot run with
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            bail!("HTTP_PORT must be non-zero");
        }
        if self.recommendation.lookup_timeout_ms == 0 {
            bail!("RECOMMENDATION_LOOKUP_TIMEOUT_MS must be greater than zero");
        }
        if !self.database.url.starts_with("sqlite:") {
            bail!("DATABASE_URL must be a sqlite URL, got {}", self.database.url);
        }
        if self.environment.is_production() && !self.firebase.is_configured() {
            warn!("Running in production without Firebase token verification configured");
        }
        Ok(())
    }

    /// One-line-per-setting summary of the configuration for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "VitalMotion Server Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - CORS Origins: {}\n\
             - Firebase Auth: {}\n\
             - Lookup Timeout: {} ms\n\
             - Pain Window: {} days",
            self.host,
            self.http_port,
            self.environment,
            if self.database.is_memory() {
                "SQLite (in-memory)"
            } else {
                "SQLite"
            },
            self.cors.allowed_origins,
            if self.firebase.is_configured() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.recommendation.lookup_timeout_ms,
            self.recommendation.pain_window_days,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
