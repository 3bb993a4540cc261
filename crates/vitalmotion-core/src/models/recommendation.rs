// ABOUTME: Recommendation output returned by the exercise recommender
// ABOUTME: Pairs the suggested muscle group with an intensity adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use super::muscle::MuscleGroup;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Intensity adjustment relative to the user's usual effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Recent pain was low; push harder
    Higher,
    /// No signal either way
    Same,
    /// Recent pain was high; back off
    Lower,
}

impl Intensity {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Higher => "higher",
            Self::Same => "same",
            Self::Lower => "lower",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Next muscle group to train and at what intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Muscle group to add next
    #[serde(rename = "recommended")]
    pub recommended_muscle: MuscleGroup,
    /// Intensity adjustment
    pub intensity: Intensity,
}
