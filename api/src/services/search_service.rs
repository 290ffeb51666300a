// Type-dispatched lookups passed through to the node

use serde_json::{json, Value};

use crate::error::{ExplorerError, ExplorerResult};
use crate::handlers::AppState;
use crate::models::{SearchQuery, SearchResponse, ValidatorProfile};

pub async fn search(state: &AppState, query: &SearchQuery) -> ExplorerResult<SearchResponse> {
    let (search_type, value) = match (query.search_type.as_deref(), query.search.as_deref()) {
        (Some(search_type), Some(value)) if !search_type.is_empty() && !value.is_empty() => {
            (search_type, value.trim())
        }
        _ => {
            return Err(ExplorerError::InvalidRequest(
                "Missing type or search parameter".to_string(),
            ))
        }
    };

    let rpc = state.rpc.as_ref();
    let result = match search_type {
        "block" => {
            let slot = value
                .parse::<u64>()
                .map_err(|_| ExplorerError::InvalidRequest("Invalid block number".to_string()))?;
            found(rpc.get_block(slot).await?)?
        }
        "transaction" => found(rpc.get_transaction(value).await?)?,
        "address" => {
            let account = rpc.get_account_info(value).await?;
            let balance = rpc.get_balance(value).await?;
            if account.is_null() && balance.is_null() {
                return Err(ExplorerError::NotFound);
            }
            json!({ "account": account, "balance": balance })
        }
        "validator" => search_validator(state, value).await?,
        _ => return Err(ExplorerError::InvalidRequest("Invalid search type".to_string())),
    };

    Ok(SearchResponse { result })
}

async fn search_validator(state: &AppState, vote_pubkey: &str) -> ExplorerResult<Value> {
    let vote_accounts = state.rpc.get_vote_accounts().await?;
    let (account, delinquent) = vote_accounts
        .find(vote_pubkey)
        .ok_or(ExplorerError::NotFound)?;

    let performance = state.rpc.get_validator_performance(vote_pubkey).await?;
    let profile = state
        .repositories
        .validator
        .find_by_vote_pubkey(vote_pubkey)
        .await?
        .as_ref()
        .map(ValidatorProfile::from);

    Ok(json!({
        "validator": account,
        "delinquent": delinquent,
        "performance": performance,
        "profile": profile,
    }))
}

fn found(value: Value) -> ExplorerResult<Value> {
    if value.is_null() {
        Err(ExplorerError::NotFound)
    } else {
        Ok(value)
    }
}
