//! Handler for listing stored short links.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::short_link::ShortLinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<ShortLinkResponse>>, AppError> {
    let (offset, limit) = pagination.offset_limit()?;

    let links = state.shortener_service.list(limit, offset).await?;

    Ok(Json(links.into_iter().map(ShortLinkResponse::from).collect()))
}
