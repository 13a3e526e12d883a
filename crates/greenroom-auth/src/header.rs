//! Bearer token extraction from the Authorization header
//!
//! # Format
//!
//! ```text
//! Authorization: Bearer <token>
//! ```

use crate::error::AuthError;

/// Extract the bearer token from an Authorization header value.
///
/// The scheme check is case-insensitive. Four distinct failures: the header
/// is absent, the scheme is not "Bearer", no token follows the scheme, or
/// more than one token-like part follows it.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingAuthHeader)?;

    let mut parts = header.split_whitespace();

    let scheme = parts.next().ok_or(AuthError::MissingToken)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidScheme);
    }

    let token = parts.next().ok_or(AuthError::MissingToken)?;
    if parts.next().is_some() {
        return Err(AuthError::AmbiguousHeader);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bearer_header() {
        assert_eq!(extract_bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_case_insensitive_scheme() {
        assert_eq!(extract_bearer_token(Some("bearer tok")), Ok("tok"));
        assert_eq!(extract_bearer_token(Some("BEARER tok")), Ok("tok"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer_token(None), Err(AuthError::MissingAuthHeader));
    }

    #[test]
    fn test_wrong_scheme() {
        assert_eq!(
            extract_bearer_token(Some("Basic dXNlcjpwYXNz")),
            Err(AuthError::InvalidScheme)
        );
    }

    #[test]
    fn test_scheme_without_token() {
        assert_eq!(extract_bearer_token(Some("Bearer")), Err(AuthError::MissingToken));
        assert_eq!(extract_bearer_token(Some("Bearer   ")), Err(AuthError::MissingToken));
    }

    #[test]
    fn test_ambiguous_header() {
        assert_eq!(
            extract_bearer_token(Some("Bearer one two")),
            Err(AuthError::AmbiguousHeader)
        );
    }

    #[test]
    fn test_empty_header_value() {
        assert_eq!(extract_bearer_token(Some("")), Err(AuthError::MissingToken));
    }
}
