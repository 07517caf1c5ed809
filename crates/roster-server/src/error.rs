//! Handler error type
//!
//! Client mistakes carry a readable message back to the caller. Server-side
//! failures are logged here and answered with a fixed body.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_types::{Message, QueryError, StatusMessage};
use thiserror::Error;
use tracing::error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad input on a create endpoint, answered as `{message}`
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Bad input on an update endpoint, answered as `{Status: false, message}`
    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Query failed: {0:#}")]
    Query(#[from] anyhow::Error),

    #[error("Employee insert failed: {0:#}")]
    EmployeeInsert(anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::InvalidInput(message.into())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError::Rejected(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidInput(message) => {
                (StatusCode::BAD_REQUEST, Json(Message::new(message))).into_response()
            }
            ApiError::Rejected(message) => {
                (StatusCode::BAD_REQUEST, Json(StatusMessage::failed(message))).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(StatusMessage::failed(message))).into_response()
            }
            ApiError::Query(e) => {
                error!(target: "database", error = ?e, "Error executing query");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(QueryError::new("Query Error")),
                )
                    .into_response()
            }
            ApiError::EmployeeInsert(e) => {
                error!(target: "database", error = ?e, "Error inserting employee");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(Message::new("An error occurred while adding the employee")),
                )
                    .into_response()
            }
            ApiError::Internal(message) => {
                error!(target: "internal", error = %message, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(QueryError::new("Internal Error")),
                )
                    .into_response()
            }
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::rejected(format!("Invalid multipart request: {}", e))
    }
}
