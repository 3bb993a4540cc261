// ABOUTME: Axum response conversion for AppError
// ABOUTME: Renders errors as the JSON ErrorResponse envelope and keeps a copy in response extensions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use super::{AppError, ErrorResponse};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error.code = ?self.code, error.message = %self.message, "Request failed");
        } else {
            warn!(error.code = ?self.code, error.message = %self.message, "Request rejected");
        }

        let envelope = ErrorResponse::from(self);
        let mut response = (status, Json(envelope.clone())).into_response();
        // Lets outer middleware re-render the body with request context
        response.extensions_mut().insert(envelope);
        response
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_input(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}
