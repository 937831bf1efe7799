//! Response definitions
//!
//! Success envelope and error-to-status mapping for HTTP clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::error::InventoryError;
use crate::validation::FieldErrors;

/// Result type for handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Success envelope: `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body could not be parsed
    #[error("{0}")]
    BadRequest(String),

    /// Body parsed but failed field rules
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("server not found")]
    NotFound,

    #[error("the inventory is empty")]
    EmptyInventory,

    /// Storage, corruption or runtime failure
    #[error("{0}")]
    Internal(String),
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::Validation(errors) => ApiError::Validation(errors),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::CONFLICT,
            ApiError::NotFound | ApiError::EmptyInventory => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            ApiError::Validation(errors) => {
                tracing::warn!("Rejected request: {}", errors);
                json!({ "error": errors })
            }
            ApiError::Internal(message) => {
                tracing::error!("Request failed: {}", message);
                json!({ "error": message })
            }
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
