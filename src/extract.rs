// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request body extraction.
//!
//! The API accepts POST bodies as either JSON or urlencoded form data.
//! Requests without a recognized content type deserialize to the target's
//! default value, so handlers see absent fields rather than a rejection.

use crate::error::AppError;
use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::header::CONTENT_TYPE;

/// Extractor that deserializes the body from JSON or form data based on
/// the request's content type.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        if content_type.starts_with("application/json") {
            let Json(value) =
                Json::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::Status {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    })?;
            return Ok(Self(value));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) =
                Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::Status {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    })?;
            return Ok(Self(value));
        }

        // No parseable body; all fields take their defaults.
        Ok(Self(T::default()))
    }
}
