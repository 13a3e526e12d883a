//! Token validation against a fetched key set

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use tracing::debug;

use crate::claims::Claims;
use crate::error::AuthError;

/// Algorithms accepted when the caller does not pin its own list.
pub const DEFAULT_ALGORITHMS: &[Algorithm] = &[Algorithm::RS256];

/// Validate a raw bearer token against a key set.
///
/// Resolves the signing key by the token header's `kid`, verifies the
/// signature with the pinned `algorithms`, and checks audience, issuer and
/// expiry. Returns the decoded claims on success. Every failure is terminal
/// and maps to a distinct [`AuthError`]; anything outside the named buckets
/// collapses into [`AuthError::TokenParse`].
pub fn validate_token(
    token: &str,
    keys: &JwkSet,
    audience: &str,
    issuer: &str,
    algorithms: &[Algorithm],
) -> Result<Claims, AuthError> {
    let header = decode_header(token).map_err(|_| AuthError::TokenParse)?;
    let kid = header.kid.ok_or(AuthError::MissingKeyId)?;

    let jwk = keys.find(&kid).ok_or(AuthError::KeyNotFound)?;
    let decoding_key = DecodingKey::from_jwk(jwk)
        .map_err(|e| AuthError::KeySetFetch(format!("unusable key material: {e}")))?;

    let mut validation = Validation::new(Algorithm::RS256);
    if !algorithms.is_empty() {
        validation.algorithms = algorithms.to_vec();
    }
    validation.set_audience(&[audience]);
    validation.set_issuer(&[issuer]);

    let data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => AuthError::ClaimsMismatch,
        ErrorKind::InvalidSignature => AuthError::SignatureInvalid,
        _ => AuthError::TokenParse,
    })?;

    debug!(sub = %data.claims.sub, "token validated");
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_keys::{
        encode_token, encode_token_with_kid, encode_token_without_kid, test_jwk_set,
    };
    use chrono::Utc;

    fn claims(exp_offset_secs: i64) -> Claims {
        Claims {
            sub: "auth0|cast-director".to_string(),
            iss: "https://greenroom.example.auth0.com/".to_string(),
            aud: "greenroom-api".to_string(),
            exp: Utc::now().timestamp() + exp_offset_secs,
            permissions: Some(vec!["get:actor".to_string()]),
        }
    }

    const AUDIENCE: &str = "greenroom-api";
    const ISSUER: &str = "https://greenroom.example.auth0.com/";

    #[test]
    fn test_valid_token_round_trip() {
        let keys = test_jwk_set();
        let token = encode_token(&claims(3600));

        let decoded =
            validate_token(&token, &keys, AUDIENCE, ISSUER, DEFAULT_ALGORITHMS).unwrap();
        assert_eq!(decoded.sub, "auth0|cast-director");
        assert_eq!(decoded.permissions, Some(vec!["get:actor".to_string()]));
    }

    #[test]
    fn test_expired_token() {
        let keys = test_jwk_set();
        let token = encode_token(&claims(-600));

        let err =
            validate_token(&token, &keys, AUDIENCE, ISSUER, DEFAULT_ALGORITHMS).unwrap_err();
        assert_eq!(err, AuthError::TokenExpired);
    }

    #[test]
    fn test_wrong_audience() {
        let keys = test_jwk_set();
        let mut c = claims(3600);
        c.aud = "some-other-api".to_string();
        let token = encode_token(&c);

        let err =
            validate_token(&token, &keys, AUDIENCE, ISSUER, DEFAULT_ALGORITHMS).unwrap_err();
        assert_eq!(err, AuthError::ClaimsMismatch);
    }

    #[test]
    fn test_wrong_issuer() {
        let keys = test_jwk_set();
        let mut c = claims(3600);
        c.iss = "https://intruder.example.com/".to_string();
        let token = encode_token(&c);

        let err =
            validate_token(&token, &keys, AUDIENCE, ISSUER, DEFAULT_ALGORITHMS).unwrap_err();
        assert_eq!(err, AuthError::ClaimsMismatch);
    }

    #[test]
    fn test_unknown_kid() {
        let keys = test_jwk_set();
        let token = encode_token_with_kid(&claims(3600), "some-rotated-away-kid");

        let err =
            validate_token(&token, &keys, AUDIENCE, ISSUER, DEFAULT_ALGORITHMS).unwrap_err();
        assert_eq!(err, AuthError::KeyNotFound);
    }

    #[test]
    fn test_missing_kid() {
        let keys = test_jwk_set();
        let token = encode_token_without_kid(&claims(3600));

        let err =
            validate_token(&token, &keys, AUDIENCE, ISSUER, DEFAULT_ALGORITHMS).unwrap_err();
        assert_eq!(err, AuthError::MissingKeyId);
    }

    #[test]
    fn test_tampered_signature() {
        let keys = test_jwk_set();
        let good = encode_token(&claims(3600));
        let other = encode_token(&claims(7200));

        // Body of one token with the signature of another
        let body = good.rsplit_once('.').unwrap().0;
        let foreign_sig = other.rsplit_once('.').unwrap().1;
        let forged = format!("{body}.{foreign_sig}");

        let err =
            validate_token(&forged, &keys, AUDIENCE, ISSUER, DEFAULT_ALGORITHMS).unwrap_err();
        assert_eq!(err, AuthError::SignatureInvalid);
    }

    #[test]
    fn test_garbage_token() {
        let keys = test_jwk_set();

        let err = validate_token(
            "not-even-close-to-a-jwt",
            &keys,
            AUDIENCE,
            ISSUER,
            DEFAULT_ALGORITHMS,
        )
        .unwrap_err();
        assert_eq!(err, AuthError::TokenParse);
    }
}
