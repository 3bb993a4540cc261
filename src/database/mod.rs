// ABOUTME: Database layer for the VitalMotion server
// ABOUTME: Exposes the SQLite document store backing users, exercises, workouts, and pain notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

/// Hierarchical JSON document store over SQLite
pub mod document_store;

pub use document_store::{with_id, DocumentStore, StoredDocument};
