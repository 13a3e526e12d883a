//! Signing key resolution
//!
//! The identity provider publishes its signing keys as a JWKS document at a
//! well-known URL. `KeyProvider` is the seam between the auth pipeline and
//! that network call; the remote implementation fetches on every invocation.

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use tracing::debug;

use crate::error::AuthError;

/// Timeout for the key set fetch. A slow identity provider must not hold a
/// request open indefinitely; hitting it is a key-resolution failure.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of the identity provider's current signing keys.
#[async_trait]
pub trait KeyProvider: Send + Sync {
    /// Return the current key set. Any failure (network, non-success status,
    /// malformed document) must surface as [`AuthError::KeySetFetch`].
    async fn fetch_keys(&self) -> Result<JwkSet, AuthError>;
}

/// Fetches the key set from `https://{domain}/.well-known/jwks.json` on
/// every call. No caching: validation always sees the provider's current
/// keys, at the cost of one fetch per validated request.
pub struct RemoteKeyProvider {
    jwks_url: String,
    client: reqwest::Client,
}

impl RemoteKeyProvider {
    /// Create a provider for an identity-provider domain
    /// (e.g. `greenroom.example.auth0.com`).
    pub fn new(domain: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            jwks_url: format!("https://{domain}/.well-known/jwks.json"),
            client,
        }
    }

    /// Create a provider with a caller-supplied HTTP client.
    pub fn with_client(domain: &str, client: reqwest::Client) -> Self {
        Self {
            jwks_url: format!("https://{domain}/.well-known/jwks.json"),
            client,
        }
    }
}

#[async_trait]
impl KeyProvider for RemoteKeyProvider {
    async fn fetch_keys(&self) -> Result<JwkSet, AuthError> {
        debug!("fetching key set from {}", self.jwks_url);

        let response = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| AuthError::KeySetFetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| AuthError::KeySetFetch(e.to_string()))?;

        let keys: JwkSet = response
            .json()
            .await
            .map_err(|e| AuthError::KeySetFetch(e.to_string()))?;

        debug!("key set contains {} keys", keys.keys.len());
        Ok(keys)
    }
}

/// Serves a fixed key set. Used by tests and by deployments that pin keys
/// locally instead of fetching them.
pub struct StaticKeyProvider {
    keys: JwkSet,
}

impl StaticKeyProvider {
    pub fn new(keys: JwkSet) -> Self {
        Self { keys }
    }
}

#[async_trait]
impl KeyProvider for StaticKeyProvider {
    async fn fetch_keys(&self) -> Result<JwkSet, AuthError> {
        Ok(self.keys.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_provider_builds_well_known_url() {
        let provider = RemoteKeyProvider::new("greenroom.example.auth0.com");
        assert_eq!(
            provider.jwks_url,
            "https://greenroom.example.auth0.com/.well-known/jwks.json"
        );
    }

    #[tokio::test]
    async fn test_static_provider_returns_keys() {
        let keys: JwkSet = serde_json::from_str(r#"{"keys":[]}"#).unwrap();
        let provider = StaticKeyProvider::new(keys);

        let fetched = provider.fetch_keys().await.unwrap();
        assert!(fetched.keys.is_empty());
    }

    #[tokio::test]
    async fn test_unresolvable_host_is_key_set_fetch_error() {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let provider = RemoteKeyProvider::with_client("invalid.greenroom.test", client);

        let err = provider.fetch_keys().await.unwrap_err();
        assert!(matches!(err, AuthError::KeySetFetch(_)));
    }
}
