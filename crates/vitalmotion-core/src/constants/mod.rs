// ABOUTME: Application constants organized by domain
// ABOUTME: Pain thresholds, recommendation window, and document store collection paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! # Constants Module
//!
//! Hardcoded defaults shared by the intelligence crate and the server. Values
//! that operators may change at runtime are read through the server's
//! environment configuration, which falls back to the defaults here.

/// Pain scale and intensity thresholds
pub mod pain {
    /// Lowest valid pain level on the 1-10 scale
    pub const MIN_PAIN_LEVEL: u8 = 1;

    /// Highest valid pain level on the 1-10 scale
    pub const MAX_PAIN_LEVEL: u8 = 10;

    /// Pain at or below this level recommends higher intensity
    pub const HIGHER_INTENSITY_MAX_PAIN: u8 = 3;

    /// Pain at or above this level recommends lower intensity
    pub const LOWER_INTENSITY_MIN_PAIN: u8 = 7;

    /// Stored date format for pain notes (`YYYY-MM-DD`)
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Recommendation engine defaults
pub mod recommendation {
    /// Number of trailing days whose pain reports influence intensity
    pub const DEFAULT_PAIN_WINDOW_DAYS: u32 = 7;

    /// Upper bound on the joined collaborator lookups for one request
    pub const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 5_000;
}

/// Collection paths in the hierarchical document store
///
/// Paths follow `collection/document/collection/...`; helpers taking a user ID
/// build the per-user sub-collections.
pub mod collections {
    /// Top-level user documents
    pub const USERS: &str = "users";

    /// Premade exercises copied into every new user
    pub const PREMADE_EXERCISES: &str = "globals/exercises/premades";

    /// Premade workout templates, also served by the workout recommender
    pub const PREMADE_WORKOUTS: &str = "globals/workouts/premades";

    /// A user's exercise definitions
    #[must_use]
    pub fn user_exercises(uid: &str) -> String {
        format!("{USERS}/{uid}/exercises")
    }

    /// A user's workout templates
    #[must_use]
    pub fn user_workouts(uid: &str) -> String {
        format!("{USERS}/{uid}/workouts")
    }

    /// A user's pain notes
    #[must_use]
    pub fn user_pain(uid: &str) -> String {
        format!("{USERS}/{uid}/pain")
    }
}

#[cfg(test)]
mod tests {
    use super::collections;

    #[test]
    fn test_user_collection_paths() {
        assert_eq!(collections::user_exercises("u1"), "users/u1/exercises");
        assert_eq!(collections::user_workouts("u1"), "users/u1/workouts");
        assert_eq!(collections::user_pain("u1"), "users/u1/pain");
    }
}
