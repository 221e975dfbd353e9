//! Error taxonomy for the service.
//!
//! [`ConfigError`] covers faults that are fatal at startup (route table and
//! container misconfiguration). [`AppError`] covers per-request failures and
//! knows how to render itself as a JSON error response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::validation::RuleViolation;

/// Startup configuration faults. All variants are fatal: the process refuses
/// to serve with a broken route table or container.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate route registration: {method} {path}")]
    DuplicateRoute { method: String, path: String },

    #[error("ambiguous route patterns for {method}: {first} overlaps {second}")]
    AmbiguousRoute {
        method: String,
        first: String,
        second: String,
    },

    #[error("invalid route pattern: {pattern} ({reason})")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    #[error("path placeholder {{{placeholder}}} does not exist on {dto}")]
    UnknownPlaceholder {
        placeholder: String,
        dto: &'static str,
    },

    #[error("no provider registered for capability {capability}")]
    MissingRegistration { capability: &'static str },

    #[error("HTTP method {method} is not routable")]
    UnsupportedMethod { method: String },
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Per-request failure surfaced to the client as a JSON error body.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Wraps rule violations into a 400 response listing (field, message)
    /// pairs. The handler must not run when this is returned.
    pub fn from_violations(violations: Vec<RuleViolation>) -> Self {
        let errors: Vec<Value> = violations
            .iter()
            .map(|v| json!({ "field": v.field, "message": v.message() }))
            .collect();

        Self::Validation {
            message: "Request validation failed".to_string(),
            details: json!({ "errors": errors }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
