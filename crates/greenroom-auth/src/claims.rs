//! Decoded token claims and the permission check

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Claims decoded from a verified token.
///
/// `permissions` stays `None` when the token carries no permissions claim at
/// all, which the permission check treats differently from an empty set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject as issued by the identity provider
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Expiration time (unix timestamp)
    pub exp: i64,
    /// Permission strings granted to the subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Claims {
    /// Whether the claims grant `permission` (exact string equality).
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .as_deref()
            .is_some_and(|granted| granted.iter().any(|g| g == permission))
    }
}

/// Check that verified claims grant a required permission.
///
/// A token with no permissions claim fails with [`AuthError::MissingPermissions`]
/// (issuer misconfiguration, 400); a present set lacking `required` fails
/// with [`AuthError::InsufficientPermission`] (ordinary denial, 403).
pub fn check_permission(required: &str, claims: &Claims) -> Result<(), AuthError> {
    let granted = claims
        .permissions
        .as_deref()
        .ok_or(AuthError::MissingPermissions)?;

    if !granted.iter().any(|g| g == required) {
        return Err(AuthError::InsufficientPermission);
    }

    Ok(())
}
