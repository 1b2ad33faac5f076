// Error types for the cupola relay

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Missing imageBase64")]
    MissingImage,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Server misconfigured: missing GENAI_API_KEY")]
    MissingApiKey,

    #[error("Upstream error: HTTP {status}")]
    Upstream { status: u16, details: String },

    #[error("No image generated")]
    NoImage { raw: serde_json::Value },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Convert RelayError to HTTP responses for Axum.
//
// This is the single error boundary of the relay: every failure, expected or
// not, becomes exactly one JSON response here. Upstream failures keep their
// original status code and raw body text; everything unexpected collapses to
// a 500 with the error's own message.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            RelayError::MissingImage => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing imageBase64" }),
            ),
            RelayError::InvalidBody(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string() }),
            ),
            RelayError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
            RelayError::Upstream { status, details } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({ "error": "Upstream error", "details": details }),
            ),
            RelayError::NoImage { raw } => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": "No image generated", "raw": raw }),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, "relay error: {}", self);
        } else {
            tracing::warn!(status = %status, "relay error: {}", self);
        }

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
