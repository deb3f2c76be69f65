//! Handlers for task and task contributor endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::task::{
    CreateTaskContributorRequest, CreateTaskRequest, TaskContributorResponse, TaskResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /tasks`
pub async fn list_tasks_handler(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<TaskResponse>>, AppError> {
    let (offset, limit) = pagination.offset_limit()?;

    let tasks = state.task_service.list_tasks(limit, offset).await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Creates a task.
///
/// # Endpoint
///
/// `POST /tasks`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the creator does not exist.
pub async fn create_task_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<Json<TaskResponse>, AppError> {
    payload.validate()?;

    let task = state.task_service.create_task(payload.into()).await?;

    Ok(Json(task.into()))
}

/// `GET /tasks_contributors`
pub async fn list_task_contributors_handler(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<TaskContributorResponse>>, AppError> {
    let (offset, limit) = pagination.offset_limit()?;

    let contributors = state.task_service.list_contributors(limit, offset).await?;

    Ok(Json(
        contributors
            .into_iter()
            .map(TaskContributorResponse::from)
            .collect(),
    ))
}

/// Assigns a user to a task.
///
/// # Endpoint
///
/// `POST /tasks_contributors`
///
/// # Errors
///
/// Returns 400 Bad Request if the user or task does not exist.
pub async fn create_task_contributor_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskContributorRequest>,
) -> Result<Json<TaskContributorResponse>, AppError> {
    let contributor = state.task_service.add_contributor(payload.into()).await?;

    Ok(Json(contributor.into()))
}
