// Handlers for the persisted validator snapshot

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::ExplorerResult;
use crate::handlers::AppState;
use crate::models::{
    EpochResponse, HistoryQuery, StakersResponse, ValidatorDetailResponse, ValidatorsResponse,
};
use crate::services::validator_service;

/// Handler for GET /validators - Returns persisted validators by activated stake
pub async fn get_validators(State(state): State<AppState>) -> ExplorerResult<Json<ValidatorsResponse>> {
    let response = validator_service::list_validators(&state).await?;
    Ok(Json(response))
}

/// Handler for GET /validators/{vote_pubkey} - Returns a validator with its performance history
pub async fn get_validator(
    State(state): State<AppState>,
    Path(vote_pubkey): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> ExplorerResult<Json<ValidatorDetailResponse>> {
    let response = validator_service::get_validator(&state, &vote_pubkey, query.limit.as_deref()).await?;
    Ok(Json(response))
}

/// Handler for GET /validators/{vote_pubkey}/stakers
pub async fn get_validator_stakers(
    State(state): State<AppState>,
    Path(vote_pubkey): Path<String>,
) -> ExplorerResult<Json<StakersResponse>> {
    let response = validator_service::get_stakers(&state, &vote_pubkey).await?;
    Ok(Json(response))
}

/// Handler for GET /epochs/latest
pub async fn get_latest_epoch(State(state): State<AppState>) -> ExplorerResult<Json<EpochResponse>> {
    let response = validator_service::latest_epoch(&state).await?;
    Ok(Json(response))
}
