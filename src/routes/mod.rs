// ABOUTME: Route module organization for the VitalMotion HTTP API
// ABOUTME: Each domain module defines its routes and thin handlers delegating to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! HTTP routes, one module per domain. Handlers authenticate, check
//! ownership of the `{uid}` path segment, and delegate.

use axum::extract::FromRequest;

use crate::errors::AppError;

/// Token verification route
pub mod auth;
/// Health and readiness routes
pub mod health;
/// Exercise and workout recommendation routes
pub mod recommendation;
/// Per-user data routes
pub mod users;

pub use auth::AuthRoutes;
pub use health::HealthRoutes;
pub use recommendation::RecommendationRoutes;
pub use users::UserRoutes;

/// JSON request body whose rejections render as the `INVALID_INPUT` envelope
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
