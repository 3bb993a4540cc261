// ABOUTME: Exercise definitions and the per-item shape of a workout request
// ABOUTME: Exercises carry the muscle group the classifier counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use super::muscle::MuscleGroup;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named exercise targeting one muscle group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    /// Display name
    pub name: String,
    /// Targeted muscle group
    pub muscle: MuscleGroup,
    /// Optional free-text instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExerciseDefinition {
    /// Read the targeted muscle out of a stored exercise document
    ///
    /// Only the `muscle` field is required; it is matched case-insensitively.
    /// Returns `None` when the field is absent or names no known group.
    #[must_use]
    pub fn muscle_of_document(doc: &Value) -> Option<MuscleGroup> {
        doc.get("muscle")
            .and_then(Value::as_str)
            .and_then(|name| name.parse().ok())
    }
}

/// One entry of a workout submitted for recommendation
///
/// Clients may send extra fields (sets, reps); only `eid` is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutItem {
    /// Exercise ID in the user's exercise collection
    #[serde(default)]
    pub eid: Option<String>,
}

impl WorkoutItem {
    /// The exercise ID when present and non-empty
    #[must_use]
    pub fn exercise_id(&self) -> Option<&str> {
        self.eid.as_deref().filter(|eid| !eid.is_empty())
    }
}
