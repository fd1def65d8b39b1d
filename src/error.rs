//! Application error type and its HTTP mapping.
//!
//! Every error carries a message suitable for direct display plus structured
//! `details` for API clients. The HTTP status is derived from the variant:
//!
//! | Variant          | Status | `code`              |
//! |------------------|--------|---------------------|
//! | `InvalidUrl`     | 400    | `invalid_url`       |
//! | `UnreachableUrl` | 400    | `unreachable_url`   |
//! | `NotFound`       | 404    | `not_found`         |
//! | `Conflict`       | 409    | `conflict`          |
//! | `Persistence`    | 500    | `persistence_error` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Message returned for every persistence failure.
pub const PERSISTENCE_MESSAGE: &str = "Unable to save the shortened URL. Please try again later.";

/// Response body: `{"message": ..., "error": {code, message, details}}`.
///
/// The top-level `message` repeats `error.message` for clients that only
/// read a flat message string.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    error: ErrorInfo,
}

/// Serializable error payload nested under `"error"` in responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or disallowed input.
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },

    /// Well-formed URL whose target did not answer successfully.
    #[error("{message}")]
    UnreachableUrl { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Unique constraint violation reported by a store.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Store failure or broken store invariant.
    #[error("{message}")]
    Persistence { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }

    /// Standard rejection for a URL that failed structural validation.
    pub fn invalid_url_for(url: &str, reason: impl Into<String>) -> Self {
        Self::invalid_url(
            format!(
                "The URL \"{}\" is not valid. Please provide a valid HTTP or HTTPS URL.",
                url
            ),
            json!({ "url": url, "reason": reason.into() }),
        )
    }

    pub fn unreachable_url(url: &str, reason: impl Into<String>) -> Self {
        Self::UnreachableUrl {
            message: format!(
                "The URL \"{}\" could not be reached. Please verify the URL is accessible and try again.",
                url
            ),
            details: json!({ "url": url, "reason": reason.into() }),
        }
    }

    pub fn short_code_not_found(code: &str) -> Self {
        Self::NotFound {
            message: format!(
                "The shortened URL \"{}\" was not found. Please check the code and try again.",
                code
            ),
            details: json!({ "code": code }),
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn persistence(details: Value) -> Self {
        Self::Persistence {
            message: PERSISTENCE_MESSAGE.to_string(),
            details,
        }
    }

    /// Stable machine-readable identifier of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidUrl { .. } => "invalid_url",
            AppError::UnreachableUrl { .. } => "unreachable_url",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Persistence { .. } => "persistence_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. } | AppError::UnreachableUrl { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::InvalidUrl { message, details }
            | AppError::UnreachableUrl { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Persistence { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_error_info();
        let body = ErrorBody {
            message: error.message.clone(),
            error,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "Database error");
        AppError::persistence(json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::invalid_url(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or(Value::Null),
        )
    }
}
