//! Error types for the gateway
//!
//! Three user-visible failure classes: transport (the content store is
//! unreachable or misbehaving), not-found, and validation. Each maps to an
//! HTTP status and a JSON body; none is fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tekoa_client::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Content store unavailable: {0}")]
    Transport(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StoreError> for GatewayError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => GatewayError::NotFound(id),
            StoreError::Validation { field, message } => GatewayError::Validation {
                field: field.to_string(),
                message,
            },
            StoreError::Http(e) => GatewayError::Transport(e.to_string()),
            StoreError::Server { status, message } => {
                GatewayError::Transport(format!("HTTP {}: {}", status, message))
            }
            StoreError::Json(e) => GatewayError::Transport(e.to_string()),
        }
    }
}

/// JSON error body returned to the browser
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error, field) = match &self {
            GatewayError::Transport(_) => (StatusCode::BAD_GATEWAY, "transport", None),
            GatewayError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", None),
            GatewayError::Validation { field, .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation",
                Some(field.clone()),
            ),
            GatewayError::Io(_) | GatewayError::Json(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", None)
            }
        };

        let body = ErrorBody {
            error,
            message: self.to_string(),
            field,
        };
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_taxonomy() {
        let e: GatewayError = StoreError::NotFound("9".to_string()).into();
        assert!(matches!(e, GatewayError::NotFound(_)));

        let e: GatewayError = StoreError::Server {
            status: 500,
            message: "boom".to_string(),
        }
        .into();
        assert!(matches!(e, GatewayError::Transport(_)));

        let e: GatewayError = StoreError::Validation {
            field: "title",
            message: "Título é obrigatório".to_string(),
        }
        .into();
        match e {
            GatewayError::Validation { field, .. } => assert_eq!(field, "title"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
