//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists users.
///
/// # Endpoint
///
/// `GET /users?page=1&page_size=100`
pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let (offset, limit) = pagination.offset_limit()?;

    let users = state.user_service.list(limit, offset).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "user_name": "Ada", "user_email": "ada@example.com", "user_bdate": "1815-12-10" }
/// ```
///
/// # Response
///
/// The stored user including the assigned `user_id`.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state.user_service.create(payload.into()).await?;

    Ok(Json(user.into()))
}
