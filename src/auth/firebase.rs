// ABOUTME: Firebase ID token verification against Google's rotating X.509 signing certificates
// ABOUTME: Decoded signing keys are cached for the lifetime advertised by the certificate endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! Firebase Authentication Token Validation
//!
//! Firebase ID tokens are RS256 JWTs whose `kid` header names one of the
//! certificates published at [`FIREBASE_CERTS_URL`]. A token is accepted when
//! its signature verifies against that certificate's key, `aud` equals the
//! project ID, `iss` is `https://securetoken.google.com/<project-id>`, it has
//! not expired, and `sub` (the user ID) is non-empty.
//!
//! Certificates are converted to [`DecodingKey`]s once per refresh. The cache is
//! refreshed when it expires or when a token names a `kid` it does not hold.
//!
//! ```rust,no_run
//! use vitalmotion_server::auth::firebase::FirebaseAuth;
//! use vitalmotion_server::config::FirebaseConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let firebase = FirebaseAuth::new(FirebaseConfig {
//!     project_id: Some("my-project".to_owned()),
//!     enabled: true,
//!     key_cache_ttl_secs: 3600,
//! });
//! let claims = firebase.validate_token("eyJ...").await?;
//! println!("User: {}", claims.sub);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use x509_parser::prelude::*;

use super::TokenVerifier;
use crate::config::FirebaseConfig;
use crate::errors::{AppError, AppResult};

/// Google's Firebase public key endpoint
pub const FIREBASE_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";

const ISSUER_PREFIX: &str = "https://securetoken.google.com/";

/// Service name used in upstream errors
const SERVICE: &str = "Firebase";

/// Bounds applied to the advertised cache lifetime, in seconds
const MIN_CACHE_TTL_SECS: i64 = 300;
const MAX_CACHE_TTL_SECS: i64 = 86_400;

/// Firebase ID token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseClaims {
    /// Issuer (`https://securetoken.google.com/<project-id>`)
    pub iss: String,
    /// Audience (the Firebase project ID)
    pub aud: String,
    /// Subject (Firebase user UID)
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// User email (if available)
    pub email: Option<String>,
    /// Firebase-specific claims
    #[serde(default)]
    pub firebase: FirebaseSpecificClaims,
}

/// The `firebase` claim object
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FirebaseSpecificClaims {
    /// Sign-in provider (e.g., "google.com", "password")
    pub sign_in_provider: Option<String>,
}

/// Signing keys from one certificate fetch
struct SigningKeys {
    by_kid: HashMap<String, DecodingKey>,
    expires_at: DateTime<Utc>,
}

impl SigningKeys {
    fn fresh_key(&self, kid: &str) -> Option<DecodingKey> {
        (self.expires_at > Utc::now())
            .then(|| self.by_kid.get(kid).cloned())
            .flatten()
    }
}

/// Verifies Firebase ID tokens for one project
pub struct FirebaseAuth {
    config: FirebaseConfig,
    /// `None` when Firebase is disabled or has no project ID
    validation: Option<Validation>,
    http_client: Client,
    certs_url: String,
    keys: RwLock<Option<SigningKeys>>,
}

impl FirebaseAuth {
    /// Create a verifier using Google's certificate endpoint
    #[must_use]
    pub fn new(config: FirebaseConfig) -> Self {
        Self::with_certs_url(config, FIREBASE_CERTS_URL)
    }

    /// Create a verifier fetching certificates from a custom endpoint
    /// (the Firebase Auth emulator or a local test server)
    #[must_use]
    pub fn with_certs_url(config: FirebaseConfig, certs_url: impl Into<String>) -> Self {
        let validation = config
            .project_id
            .as_deref()
            .filter(|_| config.enabled)
            .map(project_validation);

        Self {
            config,
            validation,
            http_client: Client::new(),
            certs_url: certs_url.into(),
            keys: RwLock::new(None),
        }
    }

    /// Whether tokens can be verified at all
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.validation.is_some()
    }

    /// Configured Firebase project ID
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.config.project_id.as_deref()
    }

    /// Validate a Firebase ID token and return its claims
    ///
    /// # Errors
    ///
    /// - `AuthInvalid` when Firebase is not configured, the token is
    ///   malformed, names an unknown key, fails signature, issuer or audience
    ///   checks, or has an empty subject
    /// - `AuthExpired` when the token has expired
    /// - `ExternalServiceUnavailable` when signing keys cannot be fetched
    pub async fn validate_token(&self, token: &str) -> AppResult<FirebaseClaims> {
        let validation = self
            .validation
            .as_ref()
            .ok_or_else(|| AppError::auth_invalid("Firebase authentication is not configured"))?;

        let kid = decode_header(token)
            .map_err(|e| {
                debug!(error = %e, "Failed to decode Firebase token header");
                AppError::auth_invalid("Invalid token format")
            })?
            .kid
            .ok_or_else(|| AppError::auth_invalid("Token missing key ID"))?;

        let key = self.signing_key(&kid).await?;

        let claims = decode::<FirebaseClaims>(token, &key, validation)
            .map_err(|e| {
                debug!(error = %e, "Firebase token rejected");
                match e.kind() {
                    ErrorKind::ExpiredSignature => AppError::auth_expired(),
                    ErrorKind::InvalidAudience => AppError::auth_invalid("Invalid token audience"),
                    ErrorKind::InvalidIssuer => AppError::auth_invalid("Invalid token issuer"),
                    _ => AppError::auth_invalid("Invalid token"),
                }
            })?
            .claims;

        if claims.sub.is_empty() {
            return Err(AppError::auth_invalid("Token subject is empty"));
        }

        debug!(
            user.id = %claims.sub,
            provider = claims.firebase.sign_in_provider.as_deref().unwrap_or("unknown"),
            "Firebase token verified"
        );
        Ok(claims)
    }

    async fn signing_key(&self, kid: &str) -> AppResult<DecodingKey> {
        if let Some(key) = self.cached_key(kid).await {
            return Ok(key);
        }

        let refreshed = self.fetch_signing_keys().await?;
        let key = refreshed.by_kid.get(kid).cloned();
        *self.keys.write().await = Some(refreshed);

        key.ok_or_else(|| {
            debug!(kid, "No Firebase signing key for kid");
            AppError::auth_invalid("Unknown token signing key")
        })
    }

    async fn cached_key(&self, kid: &str) -> Option<DecodingKey> {
        self.keys
            .read()
            .await
            .as_ref()
            .and_then(|keys| keys.fresh_key(kid))
    }

    async fn fetch_signing_keys(&self) -> AppResult<SigningKeys> {
        info!(url = %self.certs_url, "Fetching Firebase signing certificates");

        let response = self
            .http_client
            .get(&self.certs_url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| {
                warn!(error = %e, "Firebase certificate fetch failed");
                AppError::external_unavailable(SERVICE, format!("certificate fetch failed: {e}"))
            })?;

        let ttl_secs = response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_max_age)
            .unwrap_or_else(|| i64::try_from(self.config.key_cache_ttl_secs).unwrap_or(i64::MAX))
            .clamp(MIN_CACHE_TTL_SECS, MAX_CACHE_TTL_SECS);

        let certificates: HashMap<String, String> = response.json().await.map_err(|e| {
            AppError::external_service(SERVICE, format!("invalid certificate response: {e}"))
        })?;

        let by_kid = decoding_keys(certificates)?;
        info!(keys = by_kid.len(), ttl_secs, "Firebase signing keys cached");

        Ok(SigningKeys {
            by_kid,
            expires_at: Utc::now() + Duration::seconds(ttl_secs),
        })
    }
}

#[async_trait]
impl TokenVerifier for FirebaseAuth {
    async fn verify(&self, token: &str) -> AppResult<String> {
        self.validate_token(token).await.map(|claims| claims.sub)
    }
}

fn project_validation(project_id: &str) -> Validation {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[project_id]);
    validation.set_issuer(&[format!("{ISSUER_PREFIX}{project_id}")]);
    validation
}

/// Certificates that fail to parse are skipped; an empty result is an error
fn decoding_keys(certificates: HashMap<String, String>) -> AppResult<HashMap<String, DecodingKey>> {
    let keys: HashMap<String, DecodingKey> = certificates
        .into_iter()
        .filter_map(|(kid, certificate)| match certificate_key(&certificate) {
            Ok(key) => Some((kid, key)),
            Err(e) => {
                warn!(kid = %kid, error = %e, "Skipping unusable Firebase certificate");
                None
            }
        })
        .collect();

    if keys.is_empty() {
        return Err(AppError::external_service(
            SERVICE,
            "no valid public keys in certificate response",
        ));
    }
    Ok(keys)
}

/// `public, max-age=3600, must-revalidate` yields 3600
fn parse_max_age(cache_control: &str) -> Option<i64> {
    cache_control
        .split(',')
        .map(str::trim)
        .find_map(|directive| directive.strip_prefix("max-age="))
        .and_then(|value| value.parse().ok())
}

/// RSA key of a PEM X.509 certificate
fn certificate_key(certificate_pem: &str) -> AppResult<DecodingKey> {
    let (_, pem) = parse_x509_pem(certificate_pem.as_bytes())
        .map_err(|e| AppError::internal(format!("Failed to parse X.509 PEM: {e}")))?;
    let (_, certificate) = X509Certificate::from_der(&pem.contents)
        .map_err(|e| AppError::internal(format!("Failed to parse X.509 certificate: {e}")))?;

    // SPKI is already DER; only the PEM armor is added
    let encoded = STANDARD.encode(certificate.public_key().raw);
    let lines: Vec<&str> = encoded
        .as_bytes()
        .chunks(64)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();
    let spki_pem = format!(
        "-----BEGIN PUBLIC KEY-----\n{}\n-----END PUBLIC KEY-----",
        lines.join("\n")
    );

    DecodingKey::from_rsa_pem(spki_pem.as_bytes())
        .map_err(|e| AppError::internal(format!("Unusable certificate key: {e}")))
}
