// ABOUTME: New user bootstrap creating the profile document and seeding premade data
// ABOUTME: Copies the global premade exercises and workouts into the user's own collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::constants::collections;
use crate::database::DocumentStore;
use crate::errors::{AppError, AppResult};

/// Profile fields supplied when a user signs up
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
}

/// What a bootstrap wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BootstrapSummary {
    /// Premade exercise documents copied
    pub exercises_copied: u64,
    /// Premade workout documents copied, including sub-collections
    pub workouts_copied: u64,
}

/// Create `users/{uid}` and seed the user's exercises and workouts
///
/// Re-running replaces the profile and overwrites premade copies, leaving
/// user-created documents in place.
///
/// # Errors
///
/// Returns `INVALID_INPUT` when either name is blank, or a database error if
/// any write fails
pub async fn bootstrap_user(
    store: &DocumentStore,
    uid: &str,
    user: &NewUser,
) -> AppResult<BootstrapSummary> {
    let first_name = user.first_name.trim();
    let last_name = user.last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(AppError::invalid_input(
            "first_name and last_name must not be empty",
        ));
    }

    let profile = json!({
        "created_at": Utc::now().to_rfc3339(),
        "first_name": first_name,
        "last_name": last_name,
    });
    store.set(collections::USERS, uid, &profile).await?;

    let exercises_copied = store
        .copy_collection_recursive(
            collections::PREMADE_EXERCISES,
            &collections::user_exercises(uid),
        )
        .await?;
    let workouts_copied = store
        .copy_collection_recursive(
            collections::PREMADE_WORKOUTS,
            &collections::user_workouts(uid),
        )
        .await?;

    info!(
        user.id = %uid,
        exercises_copied,
        workouts_copied,
        "User bootstrapped"
    );

    Ok(BootstrapSummary {
        exercises_copied,
        workouts_copied,
    })
}
