// ABOUTME: Recommendation route handlers for next-exercise and premade workout requests
// ABOUTME: Strips workout items without an exercise ID before delegating to the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use vitalmotion_core::models::{Recommendation, WorkoutItem};

use crate::auth::{authenticate, ensure_owner};
use crate::errors::AppResult;
use crate::resources::ServerResources;
use crate::routes::JsonBody;

/// Recommendation routes
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create all recommendation routes
    ///
    /// Both routes share the `:key` segment: a user ID for exercises and a
    /// premade workout ID for workouts.
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recommend/:key/exercise", post(Self::handle_exercise))
            .route("/recommend/:key/workout", get(Self::handle_workout))
            .with_state(resources)
    }

    /// Handle POST /recommend/:uid/exercise
    async fn handle_exercise(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(uid): Path<String>,
        JsonBody(workout): JsonBody<Vec<WorkoutItem>>,
    ) -> AppResult<Json<Recommendation>> {
        let user = authenticate(&headers, resources.verifier.as_ref()).await?;
        ensure_owner(&user, &uid)?;

        let exercise_ids = exercise_ids(&workout);
        let recommendation = resources
            .recommendations
            .recommend(&uid, &exercise_ids)
            .await?;
        Ok(Json(recommendation))
    }

    /// Handle GET /recommend/:workout_id/workout
    async fn handle_workout(
        State(resources): State<Arc<ServerResources>>,
        Path(workout_id): Path<String>,
    ) -> AppResult<Json<Value>> {
        let template = resources
            .recommendations
            .recommend_workout(&workout_id)
            .await?;
        Ok(Json(template))
    }
}

/// Ordered IDs of the items that carry a non-empty `eid`
fn exercise_ids(workout: &[WorkoutItem]) -> Vec<String> {
    workout
        .iter()
        .filter_map(WorkoutItem::exercise_id)
        .map(str::to_owned)
        .collect()
}
