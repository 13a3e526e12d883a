//! API middleware
//!
//! Middleware components applied to routes at router-construction time.

pub mod auth;

pub use auth::{require_permission, AuthState, PermissionGuard};
