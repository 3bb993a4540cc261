// ABOUTME: Tracing subscriber setup for the VitalMotion server
// ABOUTME: Reads level, format, and location settings from the environment and filters dependency noise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! Structured logging
//!
//! One global subscriber is installed at startup. `LOG_FORMAT=json` emits one
//! JSON object per event for log shippers; `pretty` and `compact` are for
//! terminals. HTTP request spans come from the router's `TraceLayer`.

use std::env;
use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::service_names;

/// Directives appended to every filter so dependency chatter stays quiet
const NOISY_TARGETS: &[&str] = &[
    "hyper=warn",
    "hyper_util=warn",
    "reqwest=warn",
    "rustls=warn",
    "sqlx=warn",
    "tower_http=info",
];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string, usually from `RUST_LOG`
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name attached to the startup event
    pub service_name: String,
    /// Deployment environment name
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Multi-field human readable output
    Pretty,
    /// Single-line output without targets
    Compact,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`, defaulting to pretty
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            service_name: service_names::VITALMOTION_SERVER.into(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION`,
    /// `LOG_INCLUDE_SPANS`, `SERVICE_NAME` and `ENVIRONMENT`
    ///
    /// Production defaults to JSON with source locations.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let production = matches!(environment.to_lowercase().as_str(), "production" | "prod");
        let default_format = if production { "json" } else { "pretty" };

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: LogFormat::from_str_or_default(
                &env::var("LOG_FORMAT").unwrap_or_else(|_| default_format.into()),
            ),
            include_location: production || env_flag("LOG_INCLUDE_LOCATION"),
            include_spans: env_flag("LOG_INCLUDE_SPANS"),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::VITALMOTION_SERVER.into()),
            environment,
        }
    }

    /// Filter built from the configured level plus [`NOISY_TARGETS`]
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        NOISY_TARGETS
            .iter()
            .filter_map(|directive| directive.parse().ok())
            .fold(EnvFilter::new(&self.level), EnvFilter::add_directive)
    }

    /// Install the global subscriber and log a startup event
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let json = (self.format == LogFormat::Json).then(|| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_span_events(self.span_events())
                .with_writer(io::stdout)
        });
        let pretty = (self.format == LogFormat::Pretty).then(|| {
            fmt::layer()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_span_events(self.span_events())
                .with_writer(io::stdout)
        });
        let compact = (self.format == LogFormat::Compact).then(|| {
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stdout)
        });

        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(json)
            .with(pretty)
            .with(compact)
            .try_init()?;

        info!(
            service.name = %self.service_name,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Set and not `0`/`false`
fn env_flag(key: &str) -> bool {
    env::var(key).is_ok_and(|value| !matches!(value.as_str(), "" | "0" | "false"))
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
