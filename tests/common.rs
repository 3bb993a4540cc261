// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory stores, a static token verifier, and fixture data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `vitalmotion_server`

use std::collections::HashMap;
use std::sync::{Arc, Once};

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use serde_json::json;
use vitalmotion_server::auth::TokenVerifier;
use vitalmotion_server::config::ServerConfig;
use vitalmotion_server::database::DocumentStore;
use vitalmotion_server::errors::{AppError, AppResult};
use vitalmotion_server::resources::ServerResources;

static INIT_LOGGER: Once = Once::new();

/// Token accepted for [`TEST_UID`]
pub const TEST_TOKEN: &str = "token-alice";
/// User owning [`TEST_TOKEN`]
pub const TEST_UID: &str = "alice";
/// Token accepted for [`OTHER_UID`]
pub const OTHER_TOKEN: &str = "token-bob";
/// A second user
pub const OTHER_UID: &str = "bob";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Verifier accepting a fixed set of tokens
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    tokens: HashMap<String, String>,
}

impl StaticTokenVerifier {
    /// Verifier knowing the two test users
    pub fn with_test_users() -> Self {
        let mut tokens = HashMap::new();
        tokens.insert(TEST_TOKEN.to_owned(), TEST_UID.to_owned());
        tokens.insert(OTHER_TOKEN.to_owned(), OTHER_UID.to_owned());
        Self { tokens }
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> AppResult<String> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| AppError::auth_invalid("Unknown test token"))
    }
}

/// Fresh in-memory document store
pub async fn create_test_store() -> Result<DocumentStore> {
    init_test_logging();
    Ok(DocumentStore::connect("sqlite::memory:").await?)
}

/// Configuration pointing at an in-memory database
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.database.url = "sqlite::memory:".to_owned();
    config
}

/// Server resources over `store` with the static verifier
pub fn create_test_resources(store: DocumentStore) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        Arc::new(test_config()),
        store,
        Arc::new(StaticTokenVerifier::with_test_users()),
    ))
}

/// Store one exercise per muscle for `uid`, using the muscle name as the ID
pub async fn seed_muscle_exercises(store: &DocumentStore, uid: &str) -> Result<()> {
    let collection = format!("users/{uid}/exercises");
    for muscle in vitalmotion_core::models::MuscleGroup::ALL {
        store
            .set(
                &collection,
                muscle.as_str(),
                &json!({ "name": format!("{muscle} exercise"), "muscle": muscle.as_str() }),
            )
            .await?;
    }
    Ok(())
}

/// Date `days` before `today` as stored text
pub fn days_ago(today: NaiveDate, days: i64) -> String {
    (today - Duration::days(days)).format("%Y-%m-%d").to_string()
}

/// Store the reference pain history relative to today
///
/// Biceps 3 (1 day ago), Triceps 7 (3), Shoulders 4 (3), Abs 2 (1),
/// Abs 10 (6), Glutes 2 (8, outside the window).
pub async fn seed_reference_pain(store: &DocumentStore, uid: &str) -> Result<()> {
    let today = Utc::now().date_naive();
    let collection = format!("users/{uid}/pain");
    for (muscle, level, age) in [
        ("Biceps", 3, 1),
        ("Triceps", 7, 3),
        ("Shoulders", 4, 3),
        ("Abs", 2, 1),
        ("Abs", 10, 6),
        ("Glutes", 2, 8),
    ] {
        store
            .add(
                &collection,
                &json!({
                    "date": days_ago(today, age),
                    "body_part": muscle,
                    "pain_level": level,
                }),
            )
            .await?;
    }
    Ok(())
}
