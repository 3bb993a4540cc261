// ABOUTME: Muscle group enumeration used to classify exercises and pain notes
// ABOUTME: Closed set of eleven groups in canonical order with parsing and display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Anatomical muscle group targeted by an exercise or named in a pain note
///
/// Declaration order is the canonical order. Tie-breaking across all muscles
/// walks [`MuscleGroup::ALL`], so `Abs` wins any global tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MuscleGroup {
    /// Abdominals
    Abs,
    /// Lats and lower back
    Back,
    /// Biceps
    Biceps,
    /// Pectorals
    Chest,
    /// Forearms and grip
    Forearms,
    /// Glutes
    Glutes,
    /// Hamstrings
    Hamstrings,
    /// Quadriceps
    Quadriceps,
    /// Deltoids
    Shoulders,
    /// Trapezius
    Traps,
    /// Triceps
    Triceps,
}

/// Stored muscle name did not match any [`MuscleGroup`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown muscle group: {0}")]
pub struct UnknownMuscleGroup(pub String);

impl MuscleGroup {
    /// Number of muscle groups
    pub const COUNT: usize = 11;

    /// Every muscle group in canonical order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Abs,
        Self::Back,
        Self::Biceps,
        Self::Chest,
        Self::Forearms,
        Self::Glutes,
        Self::Hamstrings,
        Self::Quadriceps,
        Self::Shoulders,
        Self::Traps,
        Self::Triceps,
    ];

    /// Position in [`MuscleGroup::ALL`], usable as an array index
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name as stored in exercise and pain documents
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abs => "Abs",
            Self::Back => "Back",
            Self::Biceps => "Biceps",
            Self::Chest => "Chest",
            Self::Forearms => "Forearms",
            Self::Glutes => "Glutes",
            Self::Hamstrings => "Hamstrings",
            Self::Quadriceps => "Quadriceps",
            Self::Shoulders => "Shoulders",
            Self::Traps => "Traps",
            Self::Triceps => "Triceps",
        }
    }
}

impl FromStr for MuscleGroup {
    type Err = UnknownMuscleGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|muscle| muscle.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownMuscleGroup(s.to_owned()))
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
