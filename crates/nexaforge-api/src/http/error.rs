//! Application error type mapping to HTTP status codes.
//!
//! Forge failures never leak detail to the caller: whatever went wrong is
//! logged here and the body is always the same generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use nexaforge_types::error::{RepositoryError, ValidationError};

pub const FORGE_FAILURE_MESSAGE: &str = "Unable to generate blueprint";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The forge request body could not be decoded.
    MalformedRequest(String),
    /// The forge request failed an input constraint.
    Validation(ValidationError),
    /// No blueprint is stored under the slug.
    ProjectNotFound,
    /// Blueprint persistence is not configured.
    StorageDisabled,
    /// The blueprint store failed.
    Repository(RepositoryError),
    /// A handler panicked.
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Repository(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MalformedRequest(detail) => {
                tracing::warn!(%detail, "rejected malformed forge request");
                (StatusCode::INTERNAL_SERVER_ERROR, FORGE_FAILURE_MESSAGE)
            }
            AppError::Validation(e) => {
                tracing::warn!(error = %e, "rejected invalid forge request");
                (StatusCode::INTERNAL_SERVER_ERROR, FORGE_FAILURE_MESSAGE)
            }
            AppError::ProjectNotFound => (StatusCode::NOT_FOUND, "Project not found"),
            AppError::StorageDisabled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Project storage is not configured",
            ),
            AppError::Repository(e) => {
                tracing::error!(error = %e, "blueprint store lookup failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Unable to load project")
            }
            AppError::Internal(detail) => {
                tracing::error!(%detail, "request handler panicked");
                (StatusCode::INTERNAL_SERVER_ERROR, FORGE_FAILURE_MESSAGE)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
