//! Authentication and authorization for the greenroom API
//!
//! Validates RS256 bearer tokens issued by a third-party identity provider
//! against the provider's published key set, and checks the permission
//! strings carried in their claims. Transport-free: the web layer composes
//! these pieces into its own middleware.

pub mod claims;
pub mod error;
pub mod header;
pub mod jwks;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_keys;

pub use claims::{check_permission, Claims};
pub use error::AuthError;
pub use header::extract_bearer_token;
pub use jwks::{KeyProvider, RemoteKeyProvider, StaticKeyProvider};
pub use validator::validate_token;

// Re-export useful types
pub use async_trait::async_trait;
pub use jsonwebtoken::jwk::JwkSet;
pub use jsonwebtoken::Algorithm;
