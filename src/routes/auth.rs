// ABOUTME: Token verification route for web and mobile clients
// ABOUTME: Exchanges a Firebase ID token for the user ID it was issued to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use crate::routes::JsonBody;

/// Body of `POST /verify-token`
#[derive(Debug, Deserialize)]
pub struct VerifyTokenRequest {
    /// ID token issued to the client
    #[serde(default)]
    pub token: Option<String>,
}

/// Successful verification
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    /// User ID from the token subject
    pub uid: String,
}

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create the token verification route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/verify-token", post(Self::handle_verify_token))
            .with_state(resources)
    }

    /// Handle POST /verify-token
    async fn handle_verify_token(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(body): JsonBody<VerifyTokenRequest>,
    ) -> AppResult<Json<VerifyTokenResponse>> {
        let token = body
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::auth_invalid("Request body must include a token"))?;

        let uid = resources.verifier.verify(token).await?;
        Ok(Json(VerifyTokenResponse { uid }))
    }
}
