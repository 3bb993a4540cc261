// ABOUTME: Core types and constants for the VitalMotion recommendation server
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

#![deny(unsafe_code)]

//! # VitalMotion Core
//!
//! Foundation crate providing shared types for the VitalMotion training
//! recommender. This crate changes infrequently so the intelligence crate and
//! the server can compile against a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Recommendation thresholds and document store paths
//! - **models**: Muscle groups, pain reports, exercises, and recommendations

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MuscleGroup`, `PainReport`, `Recommendation`, etc.)
pub mod models;
