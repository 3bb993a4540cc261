// ABOUTME: Centralized resource container shared by every HTTP handler
// ABOUTME: Holds the configuration, document store, token verifier, and recommendation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! # Server Resources
//!
//! Built once at startup and handed to routers as `Arc<ServerResources>`.

use std::sync::Arc;

use tracing::{info, warn};
use vitalmotion_intelligence::RecommendationEngine;

use crate::auth::firebase::FirebaseAuth;
use crate::auth::{DisabledTokenVerifier, TokenVerifier};
use crate::config::ServerConfig;
use crate::database::DocumentStore;
use crate::errors::AppResult;
use crate::recommendation::{
    RecommendationService, StoreExerciseCatalog, StorePainJournal, StoreWorkoutCatalog,
};

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Document store
    pub store: DocumentStore,
    /// ID token verifier
    pub verifier: Arc<dyn TokenVerifier>,
    /// Recommendation service over the store-backed collaborators
    pub recommendations: RecommendationService,
}

impl ServerResources {
    /// Assemble resources around an open store and a verifier
    #[must_use]
    pub fn new(
        config: Arc<ServerConfig>,
        store: DocumentStore,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        let engine = RecommendationEngine::with_config(config.recommendation.engine_config());
        let recommendations = RecommendationService::new(
            Arc::new(StoreExerciseCatalog::new(store.clone())),
            Arc::new(StorePainJournal::new(store.clone())),
            Arc::new(StoreWorkoutCatalog::new(store.clone())),
            engine,
            config.recommendation.lookup_timeout(),
        );

        Self {
            config,
            store,
            verifier,
            recommendations,
        }
    }

    /// Open the configured store and pick the token verifier
    ///
    /// # Errors
    ///
    /// Returns a database error if the store cannot be opened
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let store = DocumentStore::connect(&config.database.url).await?;

        let verifier: Arc<dyn TokenVerifier> = if config.firebase.is_configured() {
            info!("Using Firebase ID token verification");
            Arc::new(FirebaseAuth::new(config.firebase.clone()))
        } else {
            warn!("Firebase not configured; authenticated routes will reject every token");
            Arc::new(DisabledTokenVerifier)
        };

        Ok(Self::new(Arc::new(config), store, verifier))
    }
}
