//! Handler for the URL submission endpoint.

use axum::{Form, extract::State};

use crate::api::dto::submit::SubmitForm;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL submitted as a form.
///
/// # Endpoint
///
/// `POST /submit-url`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded` with field `url` and an optional
/// `user_creator_id`.
///
/// # Response
///
/// `200 OK`, `text/plain`:
///
/// ```text
/// Shortened URL: http://localhost:1337/s/aB3xZ
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is not an absolute http/https URL, or
/// if `user_creator_id` is present but not an integer.
/// Returns 500 Internal Server Error if the link cannot be stored.
pub async fn submit_url_handler(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Result<String, AppError> {
    let creator_id = form.creator_id()?;

    let submission = state
        .shortener_service
        .submit(&form.url, creator_id)
        .await?;

    Ok(format!("Shortened URL: {}", submission.short_url))
}
