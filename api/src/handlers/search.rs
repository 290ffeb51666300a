use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::ExplorerResult;
use crate::handlers::AppState;
use crate::models::{SearchQuery, SearchResponse};
use crate::services::search_service;

/// Handler for GET /search?type=&search= - Looks up a block, transaction, address or validator
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ExplorerResult<Json<SearchResponse>> {
    let response = search_service::search(&state, &query).await?;
    Ok(Json(response))
}
