//! # Error Types
//!
//! This module defines error types used throughout the stipplecard library.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Main error type for stipplecard operations
#[derive(Debug, Error)]
pub enum StippleError {
    /// Request body was not valid JSON
    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// Seed color could not be taken from the request
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// PNG encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Persisting the rendered image failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Server bind/serve errors
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for StippleError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
