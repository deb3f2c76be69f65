//! Top-level router combining the shortener and resource routes.
//!
//! # Route Structure
//!
//! - `POST /submit-url`          - Shorten a URL
//! - `GET  /s/{code}`            - Short link redirect
//! - `GET/POST /users`           - Users
//! - `GET/POST /tasks`           - Tasks
//! - `GET/POST /tasks_contributors` - Task contributors
//! - `GET  /urls`                - Stored short links
//! - `GET  /health`              - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::shortener_routes())
        .merge(api::routes::resource_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
