// ABOUTME: Core data models for the VitalMotion recommender
// ABOUTME: Re-exports muscle groups, pain reports, exercises, and recommendation records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

/// Muscle group enumeration
pub mod muscle;

/// Pain notes, validated pain levels, and raw stored reports
pub mod pain;

/// Exercise definitions and workout request items
pub mod exercise;

/// Recommendation output record
pub mod recommendation;

pub use exercise::{ExerciseDefinition, WorkoutItem};
pub use muscle::{MuscleGroup, UnknownMuscleGroup};
pub use pain::{MalformedPainReport, PainLevel, PainLevelOutOfRange, PainReport, RawPainReport};
pub use recommendation::{Intensity, Recommendation};
