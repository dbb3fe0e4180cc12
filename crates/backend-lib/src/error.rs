// ============================
// reshelf-backend-lib/src/error.rs
// ============================
//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::auth::token::TokenError;

/// Application error taxonomy.
///
/// Variants are specific for testability; the externally visible payload is
/// always the sanitized `{ "error": message }` body produced by
/// [`IntoResponse`]. In particular, expired / malformed / bad-signature
/// tokens are indistinguishable opaque 401s on the wire.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("authentication required")]
    AuthenticationRequired,

    #[error("invalid token format")]
    InvalidTokenFormat,

    #[error("invalid token: {0}")]
    InvalidToken(#[from] TokenError),

    #[error("access denied")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthenticationRequired
            | AppError::InvalidTokenFormat
            | AppError::InvalidToken(_)
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a sanitized message suitable for the response body.
    pub fn public_message(&self) -> String {
        match self {
            AppError::AuthenticationRequired => "authentication required".to_string(),
            AppError::InvalidTokenFormat => "invalid token format".to_string(),
            // never reveals whether the token was malformed, expired or
            // carried a bad signature
            AppError::InvalidToken(_) => "invalid token".to_string(),
            AppError::Forbidden => "access denied".to_string(),
            AppError::NotFound(what) => format!("{what} not found"),
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidCredentials => "invalid email or password".to_string(),
            AppError::Internal(_) => "internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            // full detail stays in the logs, never in the response
            AppError::Internal(detail) => tracing::error!(%detail, "internal error"),
            AppError::InvalidToken(kind) => tracing::debug!(?kind, "token rejected"),
            _ => {},
        }

        let status = self.status_code();
        let body = serde_json::json!({ "error": self.public_message() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
