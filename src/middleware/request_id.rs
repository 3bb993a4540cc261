// ABOUTME: Request ID layers tagging every HTTP request and response with x-request-id
// ABOUTME: Generates a UUID when the client did not send one, echoes it back, and stamps it into error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::header::CONTENT_LENGTH;
use http::HeaderName;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::constants::network::REQUEST_ID_HEADER;
use crate::errors::ErrorResponse;

/// Assign a UUID request ID to requests that arrive without one
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeRequestUuid)
}

/// Copy the request ID onto the response
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER))
}

/// Re-render `AppError` responses with the request ID in the envelope
///
/// Must run inside [`set_request_id_layer`] so the header is present.
pub async fn stamp_error_request_id(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let mut response = next.run(request).await;
    let Some(request_id) = request_id else {
        return response;
    };
    let Some(envelope) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    let body = Json(envelope.with_request_id(request_id))
        .into_response()
        .into_body();
    Response::from_parts(parts, body)
}
