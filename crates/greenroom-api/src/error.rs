//! API error type and response-envelope rendering
//!
//! Every failure in a handler or the auth pipeline becomes an `ApiError`;
//! `IntoResponse` turns the first error encountered into the JSON envelope
//! `{"success": false, "error": <status>, "message": <text>}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use greenroom_auth::AuthError;

use crate::models::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Required input fields missing or request body unreadable.
    #[error("bad request")]
    BadRequest,

    /// Referenced resource does not exist.
    #[error("page not found")]
    NotFound,

    /// Known path, wrong method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Body parsed as JSON but the fields have the wrong shape.
    #[error("unprocessable entity")]
    Unprocessable,

    /// Authorization pipeline failure; status and message come from the
    /// underlying [`AuthError`].
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database failure.
    #[error("internal server error")]
    Database(#[from] sea_orm::DbErr),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Auth(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::UNAUTHORIZED)
            }
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref e) = self {
            error!("database error: {e}");
        }

        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Parsed as JSON, failed to fit the target type
            JsonRejection::JsonDataError(_) => ApiError::Unprocessable,
            // Missing body, wrong content type, or not JSON at all
            _ => ApiError::BadRequest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Unprocessable.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Auth(AuthError::TokenExpired).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Auth(AuthError::MissingPermissions).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Auth(AuthError::InsufficientPermission).status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_auth_error_keeps_its_message() {
        let err = ApiError::Auth(AuthError::TokenExpired);
        assert_eq!(err.to_string(), "token expired");
    }
}
