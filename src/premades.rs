// ABOUTME: Built-in catalog of premade exercises and workouts copied into every new user
// ABOUTME: Seeds globals/exercises/premades and globals/workouts/premades in the document store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! # Premade Catalog
//!
//! Premade exercises cover every [`MuscleGroup`]. Premade workouts are keyed
//! by body region (`arms`, `mid`, `upper`, `legs`) plus a `full` body session,
//! and reference premade exercises by ID so a copied workout resolves against
//! the user's copied exercises.

use serde_json::{json, Value};
use tracing::info;
use vitalmotion_core::models::MuscleGroup;

use crate::constants::collections;
use crate::database::DocumentStore;
use crate::errors::AppResult;

/// A premade exercise definition
#[derive(Debug, Clone, Copy)]
pub struct PremadeExercise {
    /// Document ID, shared by every user's copy
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Targeted muscle
    pub muscle: MuscleGroup,
    /// Short coaching description
    pub description: &'static str,
}

/// One planned exercise inside a premade workout
#[derive(Debug, Clone, Copy)]
pub struct PlannedExercise {
    /// Premade exercise ID
    pub eid: &'static str,
    /// Working sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
}

/// A premade workout template
#[derive(Debug, Clone, Copy)]
pub struct PremadeWorkout {
    /// Document ID (`arms`, `mid`, `upper`, `legs`, `full`)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Ordered exercises
    pub exercises: &'static [PlannedExercise],
}

const fn planned(eid: &'static str, sets: u32, reps: u32) -> PlannedExercise {
    PlannedExercise { eid, sets, reps }
}

// ============================================================================
// Exercise Data
// ============================================================================

/// Premade exercises, two per muscle group
pub const PREMADE_EXERCISES: &[PremadeExercise] = &[
    PremadeExercise {
        id: "crunch",
        name: "Crunch",
        muscle: MuscleGroup::Abs,
        description: "Lying on your back, curl your shoulders toward your hips.",
    },
    PremadeExercise {
        id: "plank",
        name: "Plank",
        muscle: MuscleGroup::Abs,
        description: "Hold a straight line from head to heels on forearms and toes.",
    },
    PremadeExercise {
        id: "pull-up",
        name: "Pull-Up",
        muscle: MuscleGroup::Back,
        description: "Hang from a bar and pull your chin above it.",
    },
    PremadeExercise {
        id: "bent-over-row",
        name: "Bent-Over Row",
        muscle: MuscleGroup::Back,
        description: "Hinge at the hips and row a barbell to your lower ribs.",
    },
    PremadeExercise {
        id: "bicep-curl",
        name: "Bicep Curl",
        muscle: MuscleGroup::Biceps,
        description: "Curl dumbbells from full extension to your shoulders.",
    },
    PremadeExercise {
        id: "hammer-curl",
        name: "Hammer Curl",
        muscle: MuscleGroup::Biceps,
        description: "Curl dumbbells with palms facing each other.",
    },
    PremadeExercise {
        id: "push-up",
        name: "Push-Up",
        muscle: MuscleGroup::Chest,
        description: "Lower your chest to the floor and press back up.",
    },
    PremadeExercise {
        id: "bench-press",
        name: "Bench Press",
        muscle: MuscleGroup::Chest,
        description: "Press a barbell from your chest while lying on a bench.",
    },
    PremadeExercise {
        id: "wrist-curl",
        name: "Wrist Curl",
        muscle: MuscleGroup::Forearms,
        description: "With forearms on your thighs, curl a dumbbell with your wrists.",
    },
    PremadeExercise {
        id: "farmers-carry",
        name: "Farmer's Carry",
        muscle: MuscleGroup::Forearms,
        description: "Walk while holding heavy weights at your sides.",
    },
    PremadeExercise {
        id: "hip-thrust",
        name: "Hip Thrust",
        muscle: MuscleGroup::Glutes,
        description: "With shoulders on a bench, drive a loaded bar up with your hips.",
    },
    PremadeExercise {
        id: "glute-bridge",
        name: "Glute Bridge",
        muscle: MuscleGroup::Glutes,
        description: "Lying on your back, lift your hips until knees, hips and shoulders align.",
    },
    PremadeExercise {
        id: "romanian-deadlift",
        name: "Romanian Deadlift",
        muscle: MuscleGroup::Hamstrings,
        description: "Hinge forward with soft knees, lowering the bar along your legs.",
    },
    PremadeExercise {
        id: "leg-curl",
        name: "Leg Curl",
        muscle: MuscleGroup::Hamstrings,
        description: "Curl the machine pad toward your glutes.",
    },
    PremadeExercise {
        id: "back-squat",
        name: "Back Squat",
        muscle: MuscleGroup::Quadriceps,
        description: "Squat below parallel with a barbell across your upper back.",
    },
    PremadeExercise {
        id: "walking-lunge",
        name: "Walking Lunge",
        muscle: MuscleGroup::Quadriceps,
        description: "Step forward into a lunge and alternate legs as you travel.",
    },
    PremadeExercise {
        id: "overhead-press",
        name: "Overhead Press",
        muscle: MuscleGroup::Shoulders,
        description: "Press a barbell from your collarbone to lockout overhead.",
    },
    PremadeExercise {
        id: "lateral-raise",
        name: "Lateral Raise",
        muscle: MuscleGroup::Shoulders,
        description: "Raise dumbbells out to your sides up to shoulder height.",
    },
    PremadeExercise {
        id: "barbell-shrug",
        name: "Barbell Shrug",
        muscle: MuscleGroup::Traps,
        description: "Lift your shoulders toward your ears holding a barbell.",
    },
    PremadeExercise {
        id: "face-pull",
        name: "Face Pull",
        muscle: MuscleGroup::Traps,
        description: "Pull a rope attachment toward your face with elbows high.",
    },
    PremadeExercise {
        id: "tricep-dip",
        name: "Tricep Dip",
        muscle: MuscleGroup::Triceps,
        description: "Lower yourself between parallel bars and press back up.",
    },
    PremadeExercise {
        id: "skull-crusher",
        name: "Skull Crusher",
        muscle: MuscleGroup::Triceps,
        description: "Lying on a bench, lower an EZ bar to your forehead and extend.",
    },
];

// ============================================================================
// Workout Data
// ============================================================================

/// Premade workouts, one per body region plus a full body session
pub const PREMADE_WORKOUTS: &[PremadeWorkout] = &[
    PremadeWorkout {
        id: "arms",
        name: "Arm Day",
        description: "Biceps, triceps, shoulders and forearms.",
        exercises: &[
            planned("bicep-curl", 3, 10),
            planned("skull-crusher", 3, 10),
            planned("lateral-raise", 3, 12),
            planned("wrist-curl", 2, 15),
        ],
    },
    PremadeWorkout {
        id: "mid",
        name: "Core and Back",
        description: "Back, chest, traps and abs.",
        exercises: &[
            planned("bent-over-row", 4, 8),
            planned("bench-press", 4, 8),
            planned("barbell-shrug", 3, 12),
            planned("plank", 3, 1),
        ],
    },
    PremadeWorkout {
        id: "upper",
        name: "Upper Body",
        description: "Balanced push and pull for the whole upper body.",
        exercises: &[
            planned("pull-up", 3, 8),
            planned("push-up", 3, 15),
            planned("overhead-press", 3, 8),
            planned("hammer-curl", 3, 10),
            planned("tricep-dip", 3, 10),
            planned("crunch", 3, 20),
        ],
    },
    PremadeWorkout {
        id: "legs",
        name: "Leg Day",
        description: "Glutes, hamstrings and quadriceps.",
        exercises: &[
            planned("back-squat", 4, 6),
            planned("romanian-deadlift", 3, 8),
            planned("hip-thrust", 3, 10),
            planned("walking-lunge", 2, 12),
        ],
    },
    PremadeWorkout {
        id: "full",
        name: "Full Body",
        description: "One movement per major area.",
        exercises: &[
            planned("back-squat", 3, 8),
            planned("bench-press", 3, 8),
            planned("bent-over-row", 3, 8),
            planned("overhead-press", 2, 10),
            planned("glute-bridge", 2, 12),
            planned("face-pull", 2, 15),
        ],
    },
];

impl PremadeExercise {
    /// Stored document body
    #[must_use]
    pub fn to_document(&self) -> Value {
        json!({
            "name": self.name,
            "muscle": self.muscle.as_str(),
            "description": self.description,
        })
    }
}

impl PremadeWorkout {
    /// Stored document body; exercise names are denormalized from the catalog
    #[must_use]
    pub fn to_document(&self) -> Value {
        let exercises: Vec<Value> = self
            .exercises
            .iter()
            .map(|planned| {
                let name = premade_exercise(planned.eid).map_or(planned.eid, |e| e.name);
                json!({
                    "eid": planned.eid,
                    "name": name,
                    "sets": planned.sets,
                    "reps": planned.reps,
                })
            })
            .collect();

        json!({
            "name": self.name,
            "description": self.description,
            "exercises": exercises,
        })
    }
}

/// Look up a premade exercise by ID
#[must_use]
pub fn premade_exercise(id: &str) -> Option<&'static PremadeExercise> {
    PREMADE_EXERCISES.iter().find(|exercise| exercise.id == id)
}

/// Result of a seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Catalog written
    Seeded {
        /// Exercises written
        exercises: usize,
        /// Workouts written
        workouts: usize,
    },
    /// Catalog already present and `force` was not set
    AlreadySeeded,
}

/// Write the premade catalog into the global collections
///
/// Existing premades are left alone unless `force` is set, in which case
/// every built-in document is rewritten.
///
/// # Errors
///
/// Returns a database error if reading or writing the store fails
pub async fn seed_premades(store: &DocumentStore, force: bool) -> AppResult<SeedOutcome> {
    let existing = store.list(collections::PREMADE_EXERCISES).await?.len()
        + store.list(collections::PREMADE_WORKOUTS).await?.len();
    if existing > 0 && !force {
        info!(existing, "Premade catalog already seeded");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    for exercise in PREMADE_EXERCISES {
        store
            .set(
                collections::PREMADE_EXERCISES,
                exercise.id,
                &exercise.to_document(),
            )
            .await?;
    }
    for workout in PREMADE_WORKOUTS {
        store
            .set(
                collections::PREMADE_WORKOUTS,
                workout.id,
                &workout.to_document(),
            )
            .await?;
    }

    info!(
        exercises = PREMADE_EXERCISES.len(),
        workouts = PREMADE_WORKOUTS.len(),
        "Premade catalog seeded"
    );
    Ok(SeedOutcome::Seeded {
        exercises: PREMADE_EXERCISES.len(),
        workouts: PREMADE_WORKOUTS.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_covers_every_muscle() {
        let covered: HashSet<MuscleGroup> = PREMADE_EXERCISES.iter().map(|e| e.muscle).collect();
        for muscle in MuscleGroup::ALL {
            assert!(covered.contains(&muscle), "{muscle} has no premade exercise");
        }
    }

    #[test]
    fn test_workouts_reference_known_exercises() {
        for workout in PREMADE_WORKOUTS {
            for planned in workout.exercises {
                assert!(
                    premade_exercise(planned.eid).is_some(),
                    "{} references unknown exercise {}",
                    workout.id,
                    planned.eid
                );
            }
        }
    }

    #[test]
    fn test_workout_ids_match_regions() {
        let ids: Vec<&str> = PREMADE_WORKOUTS.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["arms", "mid", "upper", "legs", "full"]);
    }

    #[test]
    fn test_workout_document_denormalizes_names() {
        let doc = PREMADE_WORKOUTS[0].to_document();
        assert_eq!(doc["exercises"][0]["eid"], "bicep-curl");
        assert_eq!(doc["exercises"][0]["name"], "Bicep Curl");
        assert_eq!(doc["exercises"][0]["sets"], 3);
    }

    #[tokio::test]
    async fn test_seed_is_skipped_when_present() {
        let store = DocumentStore::connect("sqlite::memory:").await.unwrap();

        let first = seed_premades(&store, false).await.unwrap();
        assert_eq!(
            first,
            SeedOutcome::Seeded {
                exercises: PREMADE_EXERCISES.len(),
                workouts: PREMADE_WORKOUTS.len()
            }
        );
        assert_eq!(seed_premades(&store, false).await.unwrap(), SeedOutcome::AlreadySeeded);
        assert!(matches!(
            seed_premades(&store, true).await.unwrap(),
            SeedOutcome::Seeded { .. }
        ));

        let stored = store
            .get(collections::PREMADE_EXERCISES, "plank")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored["muscle"], "Abs");
    }
}
