//! API route table.

use crate::api::handlers::{
    create_task_contributor_handler, create_task_handler, create_user_handler,
    list_task_contributors_handler, list_tasks_handler, list_urls_handler, list_users_handler,
    redirect_handler, submit_url_handler,
};
use crate::application::services::SHORT_LINK_PREFIX;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortener routes.
///
/// # Endpoints
///
/// - `POST /submit-url` - Shorten a URL (form field `url`)
/// - `GET  /s/{code}`   - Redirect to the original URL
pub fn shortener_routes() -> Router<AppState> {
    Router::new()
        .route("/submit-url", post(submit_url_handler))
        .route(&format!("/{SHORT_LINK_PREFIX}/{{code}}"), get(redirect_handler))
}

/// Read/create routes over the stored tables.
///
/// # Endpoints
///
/// - `GET/POST /users`
/// - `GET/POST /tasks`
/// - `GET/POST /tasks_contributors`
/// - `GET      /urls`
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/tasks", get(list_tasks_handler).post(create_task_handler))
        .route(
            "/tasks_contributors",
            get(list_task_contributors_handler).post(create_task_contributor_handler),
        )
        .route("/urls", get(list_urls_handler))
}
