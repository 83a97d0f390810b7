// src/error.rs

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

use crate::store::StoreError;

/// Wire-stable error envelope returned on every failure path.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Global application error enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Malformed body or a missing required field. Never reaches the
    /// repository.
    BadRequest(String),

    /// Any failure from the document store. The response carries only the
    /// generic `message`; the underlying cause is logged at the boundary.
    Store { message: String, source: StoreError },
}

impl AppError {
    pub fn store(source: StoreError) -> Self {
        AppError::Store {
            message: "Something went wrong".to_string(),
            source,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON response.
///
/// Every failure is classified as a client error: store-side causes are not
/// distinguished at the status-code level, only logged.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::BadRequest(msg) => msg,
            AppError::Store { message, source } => {
                tracing::error!("store error: {}", source);
                message
            }
        };
        let body = Json(ErrorResponse { message });

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Converts `StoreError` into the generic store failure.
/// Allows using `?` operator on repository calls.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::store(err)
    }
}

/// A body that fails to decode still yields the error envelope.
impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        tracing::debug!("request decode failed: {}", err);
        AppError::BadRequest("Invalid request".to_string())
    }
}
