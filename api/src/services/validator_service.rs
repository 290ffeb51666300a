// Reads of the persisted snapshot

use crate::config::MAX_PERFORMANCE_HISTORY_LIMIT;
use crate::error::{ExplorerError, ExplorerResult};
use crate::handlers::AppState;
use crate::models::{EpochResponse, StakersResponse, ValidatorDetailResponse, ValidatorsResponse};

pub async fn list_validators(state: &AppState) -> ExplorerResult<ValidatorsResponse> {
    let validators = state.repositories.validator.list_by_stake().await?;
    Ok(ValidatorsResponse { validators })
}

/// Validator row plus its newest performance epochs
pub async fn get_validator(
    state: &AppState,
    vote_pubkey: &str,
    limit: Option<&str>,
) -> ExplorerResult<ValidatorDetailResponse> {
    let limit = match limit {
        Some(raw) => Some(
            raw.parse::<u64>()
                .map_err(|_| ExplorerError::InvalidRequest("Invalid limit".to_string()))?,
        ),
        None => None,
    };

    let validator = state
        .repositories
        .validator
        .find_by_vote_pubkey(vote_pubkey)
        .await?
        .ok_or(ExplorerError::NotFound)?;

    let limit = limit
        .unwrap_or(state.performance_history_limit)
        .clamp(1, MAX_PERFORMANCE_HISTORY_LIMIT);
    let performance = state.repositories.performance.history(vote_pubkey, limit).await?;

    Ok(ValidatorDetailResponse {
        validator,
        performance,
    })
}

pub async fn get_stakers(state: &AppState, vote_pubkey: &str) -> ExplorerResult<StakersResponse> {
    let stakers = state
        .repositories
        .snapshot
        .stakers_for_vote_account(vote_pubkey)
        .await?;
    let total_active_stake = stakers
        .iter()
        .map(|staker| staker.active_stake)
        .fold(0i64, i64::saturating_add);

    Ok(StakersResponse {
        vote_pubkey: vote_pubkey.to_string(),
        total_active_stake,
        stakers,
    })
}

pub async fn latest_epoch(state: &AppState) -> ExplorerResult<EpochResponse> {
    state
        .repositories
        .epoch
        .latest()
        .await?
        .ok_or(ExplorerError::NotFound)
}
