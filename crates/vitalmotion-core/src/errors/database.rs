// ABOUTME: Conversions from sqlx errors into the unified AppError type
// ABOUTME: Keeps the storage backend's error details attached as the error source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use super::{AppError, ErrorCode};

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        let message = match &error {
            sqlx::Error::RowNotFound => "Row not found".to_owned(),
            sqlx::Error::PoolTimedOut => "Timed out acquiring a database connection".to_owned(),
            other => format!("Database query failed: {other}"),
        };
        Self::new(ErrorCode::DatabaseError, message).with_source(error)
    }
}
