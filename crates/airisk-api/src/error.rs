//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every failure leaves the service as a JSON body of the form
//! `{"error": {"code", "message", "details"?}}`. The engine is infallible
//! once built, so every error the service returns is a client error.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use airisk_engine::AnalysisError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "ANALYSIS_FAILED").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional context, present only for client errors that carry it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application-level error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Unknown region or route parameter (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed body or query string (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// The payload parsed as JSON but is not an analysis request (422).
    #[error(transparent)]
    AnalysisFailed(#[from] AnalysisError),
}

impl AppError {
    /// HTTP status code and machine-readable error code.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::AnalysisFailed(_) => (StatusCode::UNPROCESSABLE_ENTITY, "ANALYSIS_FAILED"),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::AnalysisFailed(err) => Some(serde_json::json!({ "cause": err.message() })),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if let Self::AnalysisFailed(_) = &self {
            tracing::warn!(error = %self, "analysis rejected");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// A body that is not JSON at all is a validation error, not an analysis
/// failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
