// ABOUTME: Per-user data route handlers for bootstrap, exercises, workouts, and pain notes
// ABOUTME: Every route requires a bearer token whose subject matches the {uid} path segment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;
use vitalmotion_core::models::{ExerciseDefinition, RawPainReport};

use crate::auth::{authenticate, ensure_owner};
use crate::constants::collections;
use crate::database::StoredDocument;
use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use crate::routes::JsonBody;
use crate::users::{bootstrap_user, NewUser};

/// Body of `POST /users/:uid/exercises`
#[derive(Debug, Deserialize)]
pub struct CreateExerciseBody {
    /// Display name
    pub name: String,
    /// Muscle group name, matched case-insensitively
    pub muscle: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// ID of a newly created document
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Generated document ID
    pub id: String,
}

/// User data routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/users/:uid", post(Self::handle_bootstrap))
            .route(
                "/users/:uid/exercises",
                get(Self::handle_list_exercises).post(Self::handle_create_exercise),
            )
            .route("/users/:uid/exercises/:eid", get(Self::handle_get_exercise))
            .route("/users/:uid/workouts", get(Self::handle_list_workouts))
            .route("/users/:uid/workouts/:workout_id", get(Self::handle_get_workout))
            .route(
                "/users/:uid/pain",
                get(Self::handle_list_pain).post(Self::handle_create_pain),
            )
            .with_state(resources)
    }

    /// Authenticate and require the caller to own `uid`
    async fn authorize(
        headers: &HeaderMap,
        resources: &Arc<ServerResources>,
        uid: &str,
    ) -> AppResult<()> {
        let user = authenticate(headers, resources.verifier.as_ref()).await?;
        ensure_owner(&user, uid)
    }

    /// Handle POST /users/:uid - Create the user and copy premade data
    async fn handle_bootstrap(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(uid): Path<String>,
        JsonBody(body): JsonBody<NewUser>,
    ) -> AppResult<Response> {
        Self::authorize(&headers, &resources, &uid).await?;

        let summary = bootstrap_user(&resources.store, &uid, &body).await?;
        Ok((
            StatusCode::CREATED,
            Json(json!({
                "uid": uid,
                "exercises_copied": summary.exercises_copied,
                "workouts_copied": summary.workouts_copied,
            })),
        )
            .into_response())
    }

    /// Handle GET /users/:uid/exercises
    async fn handle_list_exercises(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(uid): Path<String>,
    ) -> AppResult<Json<Vec<Value>>> {
        Self::authorize(&headers, &resources, &uid).await?;
        let docs = resources
            .store
            .list(&collections::user_exercises(&uid))
            .await?;
        Ok(Json(docs.into_iter().map(StoredDocument::into_value).collect()))
    }

    /// Handle POST /users/:uid/exercises
    async fn handle_create_exercise(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(uid): Path<String>,
        JsonBody(body): JsonBody<CreateExerciseBody>,
    ) -> AppResult<Response> {
        Self::authorize(&headers, &resources, &uid).await?;

        let name = body.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Exercise name must not be empty"));
        }
        let exercise = ExerciseDefinition {
            name: name.to_owned(),
            muscle: body.muscle.parse()?,
            description: body.description,
        };

        let id = resources
            .store
            .add(
                &collections::user_exercises(&uid),
                &serde_json::to_value(&exercise)?,
            )
            .await?;
        info!(user.id = %uid, exercise.id = %id, muscle = %exercise.muscle, "Exercise created");

        Ok((StatusCode::CREATED, Json(CreatedResponse { id })).into_response())
    }

    /// Handle GET /users/:uid/exercises/:eid
    async fn handle_get_exercise(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path((uid, eid)): Path<(String, String)>,
    ) -> AppResult<Json<Value>> {
        Self::authorize(&headers, &resources, &uid).await?;
        Self::get_document(&resources, &collections::user_exercises(&uid), &eid, "Exercise")
            .await
            .map(Json)
    }

    /// Handle GET /users/:uid/workouts
    async fn handle_list_workouts(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(uid): Path<String>,
    ) -> AppResult<Json<Vec<Value>>> {
        Self::authorize(&headers, &resources, &uid).await?;
        let docs = resources
            .store
            .list(&collections::user_workouts(&uid))
            .await?;
        Ok(Json(docs.into_iter().map(StoredDocument::into_value).collect()))
    }

    /// Handle GET /users/:uid/workouts/:workout_id
    async fn handle_get_workout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path((uid, workout_id)): Path<(String, String)>,
    ) -> AppResult<Json<Value>> {
        Self::authorize(&headers, &resources, &uid).await?;
        Self::get_document(
            &resources,
            &collections::user_workouts(&uid),
            &workout_id,
            "Workout",
        )
        .await
        .map(Json)
    }

    /// Handle GET /users/:uid/pain
    async fn handle_list_pain(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(uid): Path<String>,
    ) -> AppResult<Json<Vec<Value>>> {
        Self::authorize(&headers, &resources, &uid).await?;
        let docs = resources.store.list(&collections::user_pain(&uid)).await?;
        Ok(Json(docs.into_iter().map(StoredDocument::into_value).collect()))
    }

    /// Handle POST /users/:uid/pain
    ///
    /// Wrongly typed fields are reported as missing.
    async fn handle_create_pain(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(uid): Path<String>,
        JsonBody(body): JsonBody<Value>,
    ) -> AppResult<Response> {
        Self::authorize(&headers, &resources, &uid).await?;

        let report = RawPainReport::from_document(&body).validate()?;
        let id = resources
            .store
            .add(&collections::user_pain(&uid), &report.to_document())
            .await?;
        info!(
            user.id = %uid,
            pain.muscle = %report.muscle_group,
            pain.level = report.pain_level.value(),
            "Pain note recorded"
        );

        Ok((StatusCode::CREATED, Json(CreatedResponse { id })).into_response())
    }

    /// One document with its ID, or `RESOURCE_NOT_FOUND`
    async fn get_document(
        resources: &Arc<ServerResources>,
        collection: &str,
        id: &str,
        kind: &str,
    ) -> AppResult<Value> {
        if id.contains('/') {
            return Err(AppError::not_found(format!("{kind} {id}")));
        }
        resources
            .store
            .get(collection, id)
            .await?
            .map(|doc| crate::database::with_id(doc, id))
            .ok_or_else(|| AppError::not_found(format!("{kind} {id}")))
    }
}
