//! Permission-gating middleware
//!
//! Wraps a handler with the full authorization pipeline: bearer extraction,
//! a fresh key-set fetch, token validation, then the permission check. The
//! pipeline is linear with no retry; the first failure becomes the response
//! and the handler never runs. On success the decoded claims are placed in
//! the request extensions for the handler.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use greenroom_auth::{
    check_permission, extract_bearer_token, validate_token, Algorithm, KeyProvider,
};

use crate::error::ApiError;

/// Validation parameters shared by every guarded route. Built once at
/// startup from the server configuration.
pub struct AuthState {
    /// Source of the identity provider's signing keys
    pub key_provider: Arc<dyn KeyProvider>,
    /// Audience the token must be issued for
    pub audience: String,
    /// Issuer the token must come from
    pub issuer: String,
    /// Accepted signature algorithms
    pub algorithms: Vec<Algorithm>,
}

/// Per-route middleware state: the shared auth parameters plus the
/// permission this route requires.
#[derive(Clone)]
pub struct PermissionGuard {
    pub auth: Arc<AuthState>,
    pub permission: &'static str,
}

impl PermissionGuard {
    pub fn new(auth: Arc<AuthState>, permission: &'static str) -> Self {
        Self { auth, permission }
    }
}

/// Authorization middleware enforcing the guard's required permission.
///
/// # Errors
/// - 401 for a missing/malformed Authorization header or any token or
///   key-resolution failure
/// - 400 when the verified claims carry no permissions set at all
/// - 403 when the permissions set lacks the required permission
pub async fn require_permission(
    State(guard): State<PermissionGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let token = extract_bearer_token(auth_header.as_deref())?.to_owned();

    // A fresh key set per validation: always the provider's current keys
    let keys = guard.auth.key_provider.fetch_keys().await?;

    let claims = validate_token(
        &token,
        &keys,
        &guard.auth.audience,
        &guard.auth.issuer,
        &guard.auth.algorithms,
    )?;

    check_permission(guard.permission, &claims)?;

    debug!(sub = %claims.sub, permission = guard.permission, "request authorized");

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
