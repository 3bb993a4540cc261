// ABOUTME: Authentication seam between HTTP handlers and the token verification backend
// ABOUTME: Defines TokenVerifier, bearer token extraction, and per-user ownership checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! # Authentication
//!
//! Token verification is a black box returning a user ID. Handlers call
//! [`authenticate`] with the request headers and then [`ensure_owner`] for
//! routes scoped to `/users/{uid}` or `/recommend/{uid}`.

/// Firebase ID token verification
pub mod firebase;

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::HeaderMap;
use tracing::{debug, warn};

/// Verifies an ID token and returns the user ID it was issued to
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify `token`
    ///
    /// # Errors
    ///
    /// Returns an auth error (`AUTH_INVALID`, `AUTH_EXPIRED`) when the token is
    /// rejected, or an internal error when verification could not run
    async fn verify(&self, token: &str) -> AppResult<String>;
}

/// Verifier used when no backend is configured; rejects every token
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTokenVerifier;

#[async_trait]
impl TokenVerifier for DisabledTokenVerifier {
    async fn verify(&self, _token: &str) -> AppResult<String> {
        warn!("Token verification requested but no verifier is configured");
        Err(AppError::auth_invalid("Token verification is not configured"))
    }
}

/// A request whose bearer token was verified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// User ID from the token subject
    pub uid: String,
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// # Errors
///
/// Returns `AUTH_REQUIRED` when the header is absent and `AUTH_INVALID` when
/// it is not a non-empty bearer credential
pub fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(AppError::auth_required)?
        .to_str()
        .map_err(|_| AppError::auth_invalid("Authorization header is not valid text"))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::auth_invalid("Authorization header must be a Bearer token"))
}

/// Verify the request's bearer token
///
/// # Errors
///
/// Propagates [`bearer_token`] and [`TokenVerifier::verify`] failures
pub async fn authenticate(
    headers: &HeaderMap,
    verifier: &dyn TokenVerifier,
) -> AppResult<AuthenticatedUser> {
    let token = bearer_token(headers)?;
    let uid = verifier.verify(token).await?;
    debug!(user.id = %uid, "Request authenticated");
    Ok(AuthenticatedUser { uid })
}

/// Require that the authenticated user owns the `{uid}` path segment
///
/// # Errors
///
/// Returns `PERMISSION_DENIED` when the IDs differ
pub fn ensure_owner(user: &AuthenticatedUser, uid: &str) -> AppResult<()> {
    if user.uid == uid {
        Ok(())
    } else {
        warn!(user.id = %user.uid, target.uid = %uid, "Cross-user access rejected");
        Err(AppError::permission_denied(
            "Authenticated user may only access their own data",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use vitalmotion_core::errors::ErrorCode;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(&headers_with("Bearer abc.def")).unwrap(), "abc.def");
        assert_eq!(
            bearer_token(&HeaderMap::new()).unwrap_err().code,
            ErrorCode::AuthRequired
        );
        assert_eq!(
            bearer_token(&headers_with("Basic dXNlcg==")).unwrap_err().code,
            ErrorCode::AuthInvalid
        );
        assert_eq!(
            bearer_token(&headers_with("Bearer   ")).unwrap_err().code,
            ErrorCode::AuthInvalid
        );
    }

    #[test]
    fn test_ensure_owner() {
        let user = AuthenticatedUser {
            uid: "alice".to_owned(),
        };
        assert!(ensure_owner(&user, "alice").is_ok());
        assert_eq!(
            ensure_owner(&user, "bob").unwrap_err().code,
            ErrorCode::PermissionDenied
        );
    }

    #[tokio::test]
    async fn test_disabled_verifier_rejects() {
        let err = DisabledTokenVerifier.verify("anything").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthInvalid);
    }
}
