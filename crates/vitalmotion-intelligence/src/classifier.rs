// ABOUTME: Muscle classifier choosing the least-trained muscle of a workout's body region
// ABOUTME: Counts muscle frequencies, applies the majority cascade, and breaks ties in list order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! # Muscle Classifier
//!
//! A workout belongs to the first body region, in the order of
//! [`CATEGORY_CASCADE`], whose exercises make up a strict majority of the
//! workout. The recommended muscle is the least-trained member of that region,
//! or the least-trained muscle overall when no region has a majority.

use serde::{Deserialize, Serialize};
use vitalmotion_core::models::MuscleGroup;

/// Body region used to categorize a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyRegion {
    /// Biceps, triceps, shoulders, forearms
    Arms,
    /// Back, chest, traps, abs
    MidBody,
    /// Arms and mid body together
    UpperBody,
    /// Glutes, hamstrings, quadriceps
    Legs,
}

/// Regions in the order they are tested; the first with a majority wins
///
/// `Arms` precedes `UpperBody`, so an arm-dominated workout stays in the arm
/// list even though it also has an upper-body majority.
pub const CATEGORY_CASCADE: [BodyRegion; 4] = [
    BodyRegion::Arms,
    BodyRegion::MidBody,
    BodyRegion::UpperBody,
    BodyRegion::Legs,
];

impl BodyRegion {
    /// Member muscles in tie-break order
    #[must_use]
    pub const fn muscles(self) -> &'static [MuscleGroup] {
        use MuscleGroup::{
            Abs, Back, Biceps, Chest, Forearms, Glutes, Hamstrings, Quadriceps, Shoulders, Traps,
            Triceps,
        };
        match self {
            Self::Arms => &[Biceps, Triceps, Shoulders, Forearms],
            Self::MidBody => &[Back, Chest, Traps, Abs],
            Self::UpperBody => &[Biceps, Triceps, Shoulders, Back, Chest, Traps, Abs, Forearms],
            Self::Legs => &[Glutes, Hamstrings, Quadriceps],
        }
    }

    /// Short name used in logs and premade workout IDs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arms => "arms",
            Self::MidBody => "mid",
            Self::UpperBody => "upper",
            Self::Legs => "legs",
        }
    }
}

/// Per-muscle exercise counts indexed by [`MuscleGroup::index`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MuscleCounts([usize; MuscleGroup::COUNT]);

impl MuscleCounts {
    /// Count each resolved muscle once
    #[must_use]
    pub fn tally(muscles: &[MuscleGroup]) -> Self {
        let mut counts = Self::default();
        for muscle in muscles {
            counts.0[muscle.index()] += 1;
        }
        counts
    }

    /// Exercises seen for one muscle
    #[must_use]
    pub const fn get(&self, muscle: MuscleGroup) -> usize {
        self.0[muscle.index()]
    }

    /// Sum over a region's member muscles
    #[must_use]
    pub fn region_total(&self, region: BodyRegion) -> usize {
        region.muscles().iter().map(|muscle| self.get(*muscle)).sum()
    }

    /// First muscle in `candidates` with the smallest count
    ///
    /// Returns `None` only for an empty candidate list.
    #[must_use]
    pub fn least_trained(&self, candidates: &[MuscleGroup]) -> Option<MuscleGroup> {
        // min_by_key keeps the last of equal minima; fold keeps the first
        candidates
            .iter()
            .copied()
            .fold(None, |best: Option<MuscleGroup>, muscle| match best {
                Some(current) if self.get(current) <= self.get(muscle) => Some(current),
                _ => Some(muscle),
            })
    }
}

/// Strict majority of a workout of `workout_size` entries
#[must_use]
pub const fn majority_threshold(workout_size: usize) -> usize {
    workout_size / 2 + 1
}

/// Outcome of classifying one workout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Muscle to train next
    pub target: MuscleGroup,
    /// Region whose majority decided the target, `None` for the global fallback
    pub region: Option<BodyRegion>,
}

/// Stateless classifier over resolved workout muscles
#[derive(Debug, Clone, Copy, Default)]
pub struct MuscleClassifier;

impl MuscleClassifier {
    /// Classify a workout
    ///
    /// `workout_size` is the number of submitted exercise references, including
    /// those that did not resolve; `resolved` holds the muscles of the ones
    /// that did.
    #[must_use]
    pub fn classify(workout_size: usize, resolved: &[MuscleGroup]) -> Classification {
        let counts = MuscleCounts::tally(resolved);
        let threshold = majority_threshold(workout_size);

        let region = CATEGORY_CASCADE
            .into_iter()
            .find(|region| counts.region_total(*region) >= threshold);

        let target = match region {
            Some(region) => counts.least_trained(region.muscles()),
            None => counts.least_trained(&MuscleGroup::ALL),
        }
        .unwrap_or(MuscleGroup::Abs);

        Classification { target, region }
    }
}

/// Resolve each reference with `muscle_of`, drop the unresolved, and classify
pub fn classify_workout<R, F>(workout: &[R], muscle_of: F) -> MuscleGroup
where
    F: FnMut(&R) -> Option<MuscleGroup>,
{
    let resolved: Vec<MuscleGroup> = workout.iter().filter_map(muscle_of).collect();
    MuscleClassifier::classify(workout.len(), &resolved).target
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitalmotion_core::models::MuscleGroup::{
        Abs, Back, Biceps, Chest, Forearms, Glutes, Hamstrings, Quadriceps, Shoulders, Traps,
        Triceps,
    };

    fn classify(muscles: &[MuscleGroup]) -> Classification {
        MuscleClassifier::classify(muscles.len(), muscles)
    }

    #[test]
    fn test_majority_threshold() {
        assert_eq!(majority_threshold(0), 1);
        assert_eq!(majority_threshold(1), 1);
        assert_eq!(majority_threshold(3), 2);
        assert_eq!(majority_threshold(4), 3);
    }

    #[test]
    fn test_arms_majority_picks_missing_arm_muscle() {
        let result = classify(&[Biceps, Triceps, Shoulders]);
        assert_eq!(result.region, Some(BodyRegion::Arms));
        assert_eq!(result.target, Forearms);

        assert_eq!(classify(&[Forearms, Triceps, Shoulders]).target, Biceps);
        assert_eq!(classify(&[Forearms, Biceps, Shoulders]).target, Triceps);
        assert_eq!(classify(&[Forearms, Biceps, Triceps]).target, Shoulders);
    }

    #[test]
    fn test_arms_takes_precedence_over_upper_body() {
        // Upper body also has a majority; the arm list must still decide
        let result = classify(&[Biceps, Biceps, Back]);
        assert_eq!(result.region, Some(BodyRegion::Arms));
        assert_eq!(result.target, Triceps);
    }

    #[test]
    fn test_mid_body_majority() {
        let result = classify(&[Back, Chest, Traps]);
        assert_eq!(result.region, Some(BodyRegion::MidBody));
        assert_eq!(result.target, Abs);
    }

    #[test]
    fn test_upper_body_majority_without_arms_or_mid() {
        let result = classify(&[Biceps, Chest, Glutes]);
        assert_eq!(result.region, Some(BodyRegion::UpperBody));
        assert_eq!(result.target, Triceps);
    }

    #[test]
    fn test_legs_majority() {
        let result = classify(&[Hamstrings, Quadriceps, Hamstrings]);
        assert_eq!(result.region, Some(BodyRegion::Legs));
        assert_eq!(result.target, Glutes);
    }

    #[test]
    fn test_empty_workout_falls_back_to_abs() {
        let result = classify(&[]);
        assert_eq!(result.region, None);
        assert_eq!(result.target, Abs);
    }

    #[test]
    fn test_no_majority_uses_global_minimum() {
        // Two arms, two legs: neither reaches 3 of 4
        let result = classify(&[Biceps, Triceps, Glutes, Hamstrings]);
        assert_eq!(result.region, None);
        assert_eq!(result.target, Abs);
    }

    #[test]
    fn test_unresolved_entries_count_toward_threshold() {
        // Two arm exercises out of five submitted is not a majority
        let result = MuscleClassifier::classify(5, &[Biceps, Triceps]);
        assert_eq!(result.region, None);
        assert_eq!(result.target, Abs);

        // Same muscles out of three submitted is
        let result = MuscleClassifier::classify(3, &[Biceps, Triceps]);
        assert_eq!(result.region, Some(BodyRegion::Arms));
        assert_eq!(result.target, Shoulders);
    }

    #[test]
    fn test_least_trained_keeps_first_minimum() {
        let counts = MuscleCounts::tally(&[Back, Abs]);
        assert_eq!(
            counts.least_trained(BodyRegion::MidBody.muscles()),
            Some(Chest)
        );
        assert_eq!(counts.least_trained(&[]), None);
    }

    #[test]
    fn test_classify_workout_drops_unresolved_refs() {
        let refs = ["e-biceps", "missing", "e-triceps"];
        let target = classify_workout(&refs, |eid| match *eid {
            "e-biceps" => Some(Biceps),
            "e-triceps" => Some(Triceps),
            _ => None,
        });
        assert_eq!(target, Shoulders);
    }
}
