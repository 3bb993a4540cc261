// ABOUTME: Error types for the VitalMotion server
// ABOUTME: Re-exports the unified error system from vitalmotion-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! Errors are defined in `vitalmotion_core::errors` so the intelligence crate
//! and the server share one type. The `http-response` and `database-errors`
//! features of the core crate provide `IntoResponse` and `From<sqlx::Error>`.

pub use vitalmotion_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
