// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod api;

use crate::AppState;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Directory of static assets served alongside the API.
const STATIC_DIR: &str = "public";
/// Landing page served at the root path.
const INDEX_PAGE: &str = "views/index.html";

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // The API is open to any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::routes())
        .route_service("/", ServeFile::new(INDEX_PAGE))
        .fallback_service(ServeDir::new(STATIC_DIR))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
