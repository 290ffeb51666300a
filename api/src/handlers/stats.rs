use axum::{extract::State, Json};

use crate::error::ExplorerResult;
use crate::handlers::AppState;
use crate::models::StatsResponse;
use crate::services::stats_service;

/// Handler for GET /stats - Live network overview
pub async fn get_stats(State(state): State<AppState>) -> ExplorerResult<Json<StatsResponse>> {
    let response = stats_service::get_stats(&state).await?;
    Ok(Json(response))
}
