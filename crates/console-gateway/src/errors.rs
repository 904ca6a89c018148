//! Console gateway error types.
//!
//! All errors map to appropriate HTTP status codes via the
//! `IntoResponse` impl. Token-related messages returned to clients are
//! intentionally generic; detail is logged server-side at debug level.
//! Authorization outcomes (`Unauthenticated`, `InsufficientRole`) are
//! ordinary return values, never panics or control-flow exceptions.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Console gateway error type.
///
/// Maps to HTTP status codes:
/// - Unauthenticated, InvalidToken: 401 Unauthorized
/// - InsufficientRole: 403 Forbidden
/// - BadRequest: 400 Bad Request
/// - Internal: 500 Internal Server Error
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("No session established")]
    Unauthenticated,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Insufficient role: required one of {required:?}, provided {provided:?}")]
    InsufficientRole {
        required: Vec<String>,
        provided: Vec<String>,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal,
}

impl GatewayError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Unauthenticated | GatewayError::InvalidToken(_) => 401,
            GatewayError::InsufficientRole { .. } => 403,
            GatewayError::BadRequest(_) => 400,
            GatewayError::Internal => 500,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    required_roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provided_roles: Option<Vec<String>>,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, code, message, required_roles, provided_roles) = match &self {
            GatewayError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "No active session. Sign in to continue.".to_string(),
                None,
                None,
            ),
            GatewayError::InvalidToken(reason) => {
                // Log the actual reason server-side, return a generic message
                tracing::debug!(target: "gateway.errors", reason = %reason, "Token rejected");
                (
                    StatusCode::UNAUTHORIZED,
                    "INVALID_TOKEN",
                    "The access token is invalid or expired".to_string(),
                    None,
                    None,
                )
            }
            GatewayError::InsufficientRole { required, provided } => (
                StatusCode::FORBIDDEN,
                "INSUFFICIENT_ROLE",
                "Access denied for this area. Sign out to switch accounts.".to_string(),
                Some(required.clone()),
                Some(provided.clone()),
            ),
            GatewayError::BadRequest(reason) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                reason.clone(),
                None,
                None,
            ),
            GatewayError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
                None,
                None,
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                required_roles,
                provided_roles,
            },
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(GatewayError::Unauthenticated.status_code(), 401);
        assert_eq!(GatewayError::InvalidToken("x".to_string()).status_code(), 401);
        assert_eq!(
            GatewayError::InsufficientRole {
                required: vec!["admin".to_string()],
                provided: vec!["guest".to_string()],
            }
            .status_code(),
            403
        );
        assert_eq!(GatewayError::BadRequest("x".to_string()).status_code(), 400);
        assert_eq!(GatewayError::Internal.status_code(), 500);
    }

    #[test]
    fn test_invalid_token_response_is_generic() {
        let response =
            GatewayError::InvalidToken("payload segment empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_insufficient_role_response_carries_detail() {
        let err = GatewayError::InsufficientRole {
            required: vec!["admin".to_string()],
            provided: vec!["guest".to_string()],
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
