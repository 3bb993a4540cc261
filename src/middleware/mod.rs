// ABOUTME: HTTP middleware for the VitalMotion server
// ABOUTME: CORS configuration, request ID propagation, and request ID stamping of error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

/// CORS configuration
pub mod cors;

/// Request ID layers
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{propagate_request_id_layer, set_request_id_layer, stamp_error_request_id};
