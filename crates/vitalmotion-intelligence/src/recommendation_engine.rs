// ABOUTME: Next-exercise recommendation engine combining classification and pain-adjusted intensity
// ABOUTME: Pure synchronous evaluation over muscles and pain reports already fetched by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use crate::classifier::{BodyRegion, MuscleClassifier};
use crate::config::RecommendationEngineConfig;
use crate::intensity::{PainIntensitySelector, RecentPainWindow};
use chrono::NaiveDate;
use tracing::{debug, info};
use vitalmotion_core::models::{MuscleGroup, RawPainReport, Recommendation};

/// Recommendation engine with configurable window and thresholds
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: RecommendationEngineConfig,
}

impl RecommendationEngine {
    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommendationEngineConfig {
        &self.config
    }

    /// Recommend the next muscle and intensity
    ///
    /// `workout_size` counts every submitted exercise reference; `resolved`
    /// holds the muscles of those found in the catalog. `today` anchors the
    /// pain window.
    #[must_use]
    pub fn recommend(
        &self,
        workout_size: usize,
        resolved: &[MuscleGroup],
        pain_reports: &[RawPainReport],
        today: NaiveDate,
    ) -> Recommendation {
        let classification = MuscleClassifier::classify(workout_size, resolved);
        debug!(
            workout.size = workout_size,
            workout.resolved = resolved.len(),
            region = classification.region.map_or("none", BodyRegion::as_str),
            "Classified workout"
        );

        let window =
            RecentPainWindow::from_reports(pain_reports, today, self.config.pain_window.days);
        let intensity = PainIntensitySelector::new(self.config.thresholds)
            .select(&window, classification.target);

        info!(
            recommendation.muscle = %classification.target,
            recommendation.intensity = %intensity,
            pain.window_reports = window.len(),
            "Generated exercise recommendation"
        );

        Recommendation {
            recommended_muscle: classification.target,
            intensity,
        }
    }
}
