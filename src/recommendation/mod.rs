// ABOUTME: Recommendation module wiring collaborators to the intelligence engine
// ABOUTME: Re-exports the collaborator traits, their store implementations, and the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

/// Collaborator traits and document store implementations
pub mod providers;

/// Recommendation service
pub mod service;

pub use providers::{
    ExerciseCatalog, PainJournal, StoreExerciseCatalog, StorePainJournal, StoreWorkoutCatalog,
    WorkoutCatalog,
};
pub use service::RecommendationService;
