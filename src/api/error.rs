//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use uuid::Uuid;

use crate::service::analysis::AnalysisError;
use crate::service::training::TrainingError;

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Session not found (404)
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    /// Session is terminal or busy (409)
    #[error("Session conflict: {0}")]
    SessionConflict(String),

    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Generation collaborator failure (502)
    #[error("Generation service error: {0}")]
    Generation(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::SessionConflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::SessionNotFound(_) => "session_not_found",
            ApiError::SessionConflict(_) => "session_conflict",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Generation(_) => "generation_error",
            ApiError::Internal(_) => "internal_error",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

// ============================================================================
// From conversions for service errors
// ============================================================================

impl From<TrainingError> for ApiError {
    fn from(err: TrainingError) -> Self {
        match err {
            TrainingError::SessionNotFound(id) => ApiError::SessionNotFound(id),
            TrainingError::SessionFinished(_) | TrainingError::TurnInProgress(_) => {
                ApiError::SessionConflict(err.to_string())
            }
            TrainingError::Generation(e) => ApiError::Generation(e.to_string()),
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Generation(e) => ApiError::Generation(e.to_string()),
            // The unstructured-output path is handled in the analyze
            // endpoint as a fallback response, not converted here.
            AnalysisError::Unstructured { .. } => ApiError::Internal(err.to_string()),
        }
    }
}
