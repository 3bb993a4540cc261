// ABOUTME: Recommendation service joining collaborator lookups and running the engine
// ABOUTME: Issues exercise and pain lookups concurrently under one timeout and maps failures to transient errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use futures_util::future::try_join_all;
use futures_util::TryFutureExt;
use serde_json::Value;
use tracing::{info, warn};
use vitalmotion_core::models::{MuscleGroup, RawPainReport, Recommendation};
use vitalmotion_intelligence::RecommendationEngine;

use super::providers::{ExerciseCatalog, PainJournal, WorkoutCatalog};
use crate::constants::service_names;
use crate::database::with_id;
use crate::errors::{AppError, AppResult};

/// Next-exercise and premade-workout recommendations for one user request
#[derive(Clone)]
pub struct RecommendationService {
    exercises: Arc<dyn ExerciseCatalog>,
    pain: Arc<dyn PainJournal>,
    workouts: Arc<dyn WorkoutCatalog>,
    engine: RecommendationEngine,
    lookup_timeout: Duration,
}

impl RecommendationService {
    /// Assemble a service from its collaborators
    #[must_use]
    pub fn new(
        exercises: Arc<dyn ExerciseCatalog>,
        pain: Arc<dyn PainJournal>,
        workouts: Arc<dyn WorkoutCatalog>,
        engine: RecommendationEngine,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            exercises,
            pain,
            workouts,
            engine,
            lookup_timeout,
        }
    }

    /// Recommend the next muscle group and intensity for `uid`
    ///
    /// # Errors
    ///
    /// Returns `EXTERNAL_SERVICE_UNAVAILABLE` when a lookup fails or the
    /// joined lookups exceed the configured timeout
    pub async fn recommend(&self, uid: &str, exercise_ids: &[String]) -> AppResult<Recommendation> {
        self.recommend_on(uid, exercise_ids, Utc::now().date_naive())
            .await
    }

    /// [`Self::recommend`] with the pain window anchored at `today`
    ///
    /// # Errors
    ///
    /// Same as [`Self::recommend`]
    pub async fn recommend_on(
        &self,
        uid: &str,
        exercise_ids: &[String],
        today: NaiveDate,
    ) -> AppResult<Recommendation> {
        let (resolved, pain_reports) = self.fetch_inputs(uid, exercise_ids).await?;

        info!(
            user.id = %uid,
            workout.size = exercise_ids.len(),
            workout.resolved = resolved.len(),
            "Recommending next exercise"
        );

        Ok(self
            .engine
            .recommend(exercise_ids.len(), &resolved, &pain_reports, today))
    }

    /// Premade workout template `workout_id`, with its ID included
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown ID and
    /// `EXTERNAL_SERVICE_UNAVAILABLE` when the catalog cannot be read
    pub async fn recommend_workout(&self, workout_id: &str) -> AppResult<Value> {
        let template = self
            .workouts
            .workout_template(workout_id)
            .await
            .map_err(|e| unavailable(service_names::WORKOUT_CATALOG, e))?
            .ok_or_else(|| AppError::not_found(format!("Workout {workout_id}")))?;

        Ok(with_id(template, workout_id))
    }

    /// Resolve every exercise and load pain history concurrently
    async fn fetch_inputs(
        &self,
        uid: &str,
        exercise_ids: &[String],
    ) -> AppResult<(Vec<MuscleGroup>, Vec<RawPainReport>)> {
        let muscles = try_join_all(
            exercise_ids
                .iter()
                .map(|eid| self.exercises.resolve_muscle(uid, eid)),
        )
        .map_err(|e| unavailable(service_names::EXERCISE_CATALOG, e));

        let pain = self
            .pain
            .recent_pain_reports(uid)
            .map_err(|e| unavailable(service_names::PAIN_JOURNAL, e));

        // Timeout drops both lookups
        let joined = tokio::time::timeout(self.lookup_timeout, async {
            tokio::try_join!(muscles, pain)
        })
        .await
        .map_err(|_| {
            warn!(
                user.id = %uid,
                timeout_ms = self.lookup_timeout.as_millis(),
                "Recommendation lookups timed out"
            );
            AppError::external_unavailable(
                "recommendation lookups",
                format!("timed out after {} ms", self.lookup_timeout.as_millis()),
            )
        })??;

        let (muscles, pain_reports) = joined;
        Ok((muscles.into_iter().flatten().collect(), pain_reports))
    }
}

/// Collaborator failure as a transient error, keeping the original as source
fn unavailable(service: &str, error: AppError) -> AppError {
    if error.code.is_transient() {
        return error;
    }
    warn!(service, error = %error, "Recommendation collaborator failed");
    AppError::external_unavailable(service, error.message.clone()).with_source(error)
}
