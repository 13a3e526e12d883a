//! Authorization error taxonomy
//!
//! Each variant is a distinct, terminal failure of the auth pipeline and
//! carries its own HTTP status. The web layer converts the first error
//! encountered into the response envelope; nothing here retries.

use thiserror::Error;

/// Errors produced by bearer extraction, token validation and the
/// permission check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No Authorization header on the request.
    #[error("authorization header is expected")]
    MissingAuthHeader,

    /// Authorization header present but the scheme is not "Bearer".
    #[error("authorization header must start with Bearer")]
    InvalidScheme,

    /// "Bearer" scheme with nothing after it.
    #[error("token not found")]
    MissingToken,

    /// More than one token-like part after the scheme.
    #[error("authorization header must be a single bearer token")]
    AmbiguousHeader,

    /// Key set could not be fetched or contained unusable key material.
    #[error("unable to resolve signing keys: {0}")]
    KeySetFetch(String),

    /// Token header carries no key id.
    #[error("authorization malformed")]
    MissingKeyId,

    /// No key in the fetched set matches the token's key id.
    #[error("unable to find the appropriate key")]
    KeyNotFound,

    /// Token expiry is in the past.
    #[error("token expired")]
    TokenExpired,

    /// Audience or issuer does not match the expected values.
    #[error("incorrect claims, check the audience and issuer")]
    ClaimsMismatch,

    /// Signature does not verify against the resolved key.
    #[error("token signature is invalid")]
    SignatureInvalid,

    /// Any other parse or decode failure.
    #[error("unable to parse authentication token")]
    TokenParse,

    /// Claims carry no permissions set at all. Distinct from an empty or
    /// non-matching set: this points at issuer misconfiguration.
    #[error("authorization header is missing permission information")]
    MissingPermissions,

    /// Permissions are present but the required one is not a member.
    #[error("authorization header is missing a required permission")]
    InsufficientPermission,
}

impl AuthError {
    /// HTTP status for this failure.
    ///
    /// Anything that prevents establishing who the caller is maps to 401;
    /// a verified token missing the permissions claim is 400; a verified
    /// token with insufficient permissions is 403.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::MissingAuthHeader
            | AuthError::InvalidScheme
            | AuthError::MissingToken
            | AuthError::AmbiguousHeader
            | AuthError::KeySetFetch(_)
            | AuthError::MissingKeyId
            | AuthError::KeyNotFound
            | AuthError::TokenExpired
            | AuthError::ClaimsMismatch
            | AuthError::SignatureInvalid
            | AuthError::TokenParse => 401,
            AuthError::MissingPermissions => 400,
            AuthError::InsufficientPermission => 403,
        }
    }
}
