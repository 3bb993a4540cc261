// ABOUTME: Recommendation engine crate for the VitalMotion server
// ABOUTME: Muscle classification, pain windowing, and intensity selection without I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

#![deny(unsafe_code)]

//! # VitalMotion Intelligence
//!
//! Deterministic evaluation of a workout in progress. Callers fetch the
//! exercise muscles and pain history, then hand them to
//! [`RecommendationEngine::recommend`].

/// Body regions, the majority cascade, and least-trained muscle selection
pub mod classifier;

/// Engine configuration
pub mod config;

/// Pain window and intensity directive selection
pub mod intensity;

/// Combined recommendation engine
pub mod recommendation_engine;

pub use classifier::{
    classify_workout, majority_threshold, BodyRegion, Classification, MuscleClassifier,
    MuscleCounts, CATEGORY_CASCADE,
};
pub use config::{IntensityThresholds, PainWindowConfig, RecommendationEngineConfig};
pub use intensity::{PainIntensitySelector, RecentPainWindow};
pub use recommendation_engine::RecommendationEngine;
