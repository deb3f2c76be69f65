//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL, byte for byte.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown, cannot be decoded, or the
/// lookup failed.
pub async fn redirect_handler(
    code: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Ok(Path(code)) = code else {
        return Err(AppError::not_found("Shortened URL not found", json!({})));
    };

    match state.redirect_service.resolve(&code).await {
        Some(original_url) => Ok((StatusCode::FOUND, [(header::LOCATION, original_url)])),
        None => Err(AppError::not_found(
            "Shortened URL not found",
            json!({ "code": code }),
        )),
    }
}
