// ABOUTME: Recommendation engine configuration for next-exercise suggestions
// ABOUTME: Configures the pain window length and the intensity thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! Recommendation Engine Configuration
//!
//! Defaults come from `vitalmotion_core::constants`. The server overrides the
//! window length from its environment configuration.

use serde::{Deserialize, Serialize};
use vitalmotion_core::constants::{
    pain::{HIGHER_INTENSITY_MAX_PAIN, LOWER_INTENSITY_MIN_PAIN},
    recommendation::DEFAULT_PAIN_WINDOW_DAYS,
};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Trailing window over which pain reports count
    pub pain_window: PainWindowConfig,
    /// Pain levels that switch the intensity directive
    pub thresholds: IntensityThresholds,
}

/// Length of the pain window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainWindowConfig {
    /// Calendar days before today still considered recent (inclusive)
    pub days: u32,
}

/// Pain levels at which the intensity directive changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityThresholds {
    /// Pain at or below this level recommends higher intensity
    pub higher_max_pain: u8,
    /// Pain at or above this level recommends lower intensity
    pub lower_min_pain: u8,
}

impl Default for PainWindowConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_PAIN_WINDOW_DAYS,
        }
    }
}

impl Default for IntensityThresholds {
    fn default() -> Self {
        Self {
            higher_max_pain: HIGHER_INTENSITY_MAX_PAIN,
            lower_min_pain: LOWER_INTENSITY_MIN_PAIN,
        }
    }
}

impl RecommendationEngineConfig {
    /// Default thresholds with a custom window length
    #[must_use]
    pub fn with_pain_window_days(days: u32) -> Self {
        Self {
            pain_window: PainWindowConfig { days },
            ..Self::default()
        }
    }
}
