// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types and the fallback error responder.
//!
//! Most handlers catch store failures themselves and answer with a JSON
//! error body, so this responder only fires for errors that propagate out
//! of a handler or an extractor.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application error type that converts to plain-text HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Per-field validation failures, in the order they were reported.
    #[error("Validation failed")]
    Validation(Vec<(String, String)>),

    /// An error carrying its own response status and message.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Database error: {0}")]
    Database(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Report the first field's message only.
            AppError::Validation(fields) => {
                let message = fields
                    .into_iter()
                    .next()
                    .map(|(_, message)| message)
                    .unwrap_or_else(|| "Bad Request".to_string());
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            AppError::Status { status, message } => (status, message).into_response(),
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
