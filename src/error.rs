//! Application error types and their HTTP mapping

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;

/// Top-level application error
#[derive(Debug, Error)]
pub enum AppError {
    /// The caller supplied an incomplete or malformed request
    #[error("{0}")]
    Validation(String),

    /// The document store rejected or failed to complete an operation
    #[error("database error: {0}")]
    Storage(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::Validation(reason) => warn!(reason = %reason, "Rejected request"),
            other => error!(error = %other, "Request failed"),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Error body with an `error` key
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Error body with a `message` key, used by the chart endpoints
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Wrapper that renders an [`AppError`] as `{"message": ...}` instead of `{"error": ...}`
#[derive(Debug)]
pub struct MessageError(pub AppError);

impl From<AppError> for MessageError {
    fn from(err: AppError) -> Self {
        MessageError(err)
    }
}

impl IntoResponse for MessageError {
    fn into_response(self) -> Response {
        self.0.log();
        let status = self.0.status_code();
        (status, Json(MessageBody { message: self.0.to_string() })).into_response()
    }
}
