//! Custom error types for the catalog service
//!
//! Read-path failures never reach this taxonomy: they are absorbed at the
//! store boundary and degrade to empty results. An absent single record is
//! `Option::None`, not an error. Only the write path surfaces errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the catalog service
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A listing was created without an authenticated principal
    #[error("Access denied: creating a listing requires an authenticated principal")]
    AccessDenied,

    /// The draft failed validation before any write was attempted
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Write-path storage failure, propagated so the caller can report it
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            CatalogError::AccessDenied => (StatusCode::UNAUTHORIZED, self.to_string()),
            CatalogError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            CatalogError::Storage(e) => {
                tracing::error!("Failed to persist listing: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for catalog results
pub type CatalogResult<T> = Result<T, CatalogError>;
