// ABOUTME: Collaborator traits feeding the recommendation service and their document store implementations
// ABOUTME: ExerciseCatalog resolves muscles, PainJournal lists pain notes, WorkoutCatalog serves premades
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use vitalmotion_core::models::{ExerciseDefinition, MuscleGroup, RawPainReport};

use crate::constants::collections;
use crate::database::DocumentStore;
use crate::errors::AppResult;

/// Resolves a user's exercise IDs to the muscle groups they target
#[async_trait]
pub trait ExerciseCatalog: Send + Sync {
    /// Muscle targeted by `exercise_id`, `None` when the exercise is unknown
    /// or its stored muscle is not recognized
    async fn resolve_muscle(&self, uid: &str, exercise_id: &str)
        -> AppResult<Option<MuscleGroup>>;
}

/// Supplies a user's stored pain notes
#[async_trait]
pub trait PainJournal: Send + Sync {
    /// Pain notes as stored; callers filter by date and validate fields
    async fn recent_pain_reports(&self, uid: &str) -> AppResult<Vec<RawPainReport>>;
}

/// Read-only catalog of premade workout templates
#[async_trait]
pub trait WorkoutCatalog: Send + Sync {
    /// Stored template for `workout_id`, `None` when absent
    async fn workout_template(&self, workout_id: &str) -> AppResult<Option<Value>>;
}

/// [`ExerciseCatalog`] reading `users/{uid}/exercises/{eid}`
#[derive(Debug, Clone)]
pub struct StoreExerciseCatalog {
    store: DocumentStore,
}

impl StoreExerciseCatalog {
    /// Catalog over `store`
    #[must_use]
    pub const fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ExerciseCatalog for StoreExerciseCatalog {
    async fn resolve_muscle(
        &self,
        uid: &str,
        exercise_id: &str,
    ) -> AppResult<Option<MuscleGroup>> {
        // Empty IDs and IDs with a path separator cannot name a document
        if exercise_id.is_empty() || exercise_id.contains('/') {
            return Ok(None);
        }

        let doc = self
            .store
            .get(&collections::user_exercises(uid), exercise_id)
            .await?;
        let muscle = doc.as_ref().and_then(ExerciseDefinition::muscle_of_document);
        if muscle.is_none() {
            debug!(user.id = %uid, exercise.id = %exercise_id, "Exercise did not resolve to a muscle");
        }
        Ok(muscle)
    }
}

/// [`PainJournal`] reading `users/{uid}/pain`
#[derive(Debug, Clone)]
pub struct StorePainJournal {
    store: DocumentStore,
}

impl StorePainJournal {
    /// Journal over `store`
    #[must_use]
    pub const fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PainJournal for StorePainJournal {
    async fn recent_pain_reports(&self, uid: &str) -> AppResult<Vec<RawPainReport>> {
        let docs = self.store.list(&collections::user_pain(uid)).await?;
        Ok(docs
            .iter()
            .map(|doc| RawPainReport::from_document(&doc.data))
            .collect())
    }
}

/// [`WorkoutCatalog`] reading `globals/workouts/premades/{id}`
#[derive(Debug, Clone)]
pub struct StoreWorkoutCatalog {
    store: DocumentStore,
}

impl StoreWorkoutCatalog {
    /// Catalog over `store`
    #[must_use]
    pub const fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WorkoutCatalog for StoreWorkoutCatalog {
    async fn workout_template(&self, workout_id: &str) -> AppResult<Option<Value>> {
        if workout_id.is_empty() || workout_id.contains('/') {
            return Ok(None);
        }
        self.store
            .get(collections::PREMADE_WORKOUTS, workout_id)
            .await
    }
}
