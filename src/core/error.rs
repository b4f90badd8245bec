//! Typed error handling for the storefront API
//!
//! All errors are handled at the request boundary; nothing propagates to a
//! retry mechanism since none exists.
//!
//! # Error Categories
//!
//! - [`ApiError::Validation`]: missing or malformed required fields → 400
//! - [`ApiError::NotFound`]: unknown id → 404
//! - [`ApiError::Internal`]: anything else → 500, with the underlying message
//!   suppressed outside development mode

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::config::Environment;

/// The error type returned by every storefront handler
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required fields
    #[error("{0}")]
    Validation(String),

    /// Lookup by an id with no match
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure (lock poisoning, serialization, ...)
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body, matching the `{"error": ...}` wire shape
///
/// For 500s a `message` field is added, populated with the real error only
/// in development mode.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,

    /// Underlying cause, present on internal errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) => ErrorResponse {
                error: msg.clone(),
                message: None,
            },
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                let message = if Environment::from_env().is_development() {
                    err.to_string()
                } else {
                    "Something went wrong".to_string()
                };
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    message: Some(message),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// JSON extractor that rejects with the storefront error body
///
/// Axum's stock `Json` extractor answers malformed bodies with a 422 and a
/// plain-text message; the API contract wants 400 with `{"error": ...}`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
