//! Error types for the resume intake service.
//!
//! - [`ConfigError`] - environment configuration errors
//! - [`IntakeError`] - uploaded payload rejected
//! - [`ServerError`] - top-level HTTP errors, rendered as JSON
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::api::types::error_response;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

// =============================================================================
// Intake Errors
// =============================================================================

/// Reasons an uploaded resume is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// The multipart body has no `resume` field.
    #[error("Missing multipart field '{0}'")]
    MissingField(&'static str),

    /// Zero-byte upload.
    #[error("Uploaded file is empty")]
    EmptyFile,

    /// Upload exceeds the configured limit.
    #[error("File is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    /// Payload does not carry the PDF signature.
    #[error("Invalid PDF file.")]
    NotPdf,
}

// =============================================================================
// Server Errors (top-level)
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Unknown or missing access token.
    #[error("Invalid token.")]
    InvalidToken,

    /// Payload rejected by intake validation.
    #[error("{0}")]
    Intake(#[from] IntakeError),

    /// Submission id not found (or owned by another token).
    #[error("Submission not found: {0}")]
    NotFound(String),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Configuration error at startup.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Socket / filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidToken => StatusCode::FORBIDDEN,
            ServerError::Intake(IntakeError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Intake(_) | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Config(_) | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status(), Json(error_response(&self.to_string()))).into_response()
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for intake validation.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intake_error_conversion() {
        let err: ServerError = IntakeError::NotPdf.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid PDF file.");

        let err: ServerError = IntakeError::TooLarge { size: 11, limit: 10 }.into();
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(err.to_string().contains("limit is 10"));
    }

    #[test]
    fn test_invalid_token_is_forbidden() {
        assert_eq!(ServerError::InvalidToken.status(), StatusCode::FORBIDDEN);
        assert_eq!(ServerError::InvalidToken.to_string(), "Invalid token.");
    }

    #[test]
    fn test_config_error_format() {
        let err = ConfigError::InvalidValue { key: "PORT", value: "eighty".into() };
        let msg = err.to_string();
        assert!(msg.contains("PORT"));
        assert!(msg.contains("eighty"));
    }
}
