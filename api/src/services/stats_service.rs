// Network overview assembled from live RPC calls

use serde_json::Value;
use tracing::warn;

use nexscan_indexer::domain::services::{credit_window, skip_rate, total_active_stake, StakingYield};
use nexscan_indexer::infrastructure::rpc::{RpcClientError, VoteAccount};

use crate::error::{ExplorerError, ExplorerResult};
use crate::handlers::AppState;
use crate::models::{StatsResponse, SupplyView, ValidatorStats};

/// Epoch info and vote accounts are required; every other call degrades to defaults
pub async fn get_stats(state: &AppState) -> ExplorerResult<StatsResponse> {
    let rpc = state.rpc.as_ref();

    let epoch = rpc
        .get_epoch_info()
        .await?
        .ok_or_else(|| ExplorerError::Internal("getEpochInfo returned no result".to_string()))?;
    let vote_accounts = rpc.get_vote_accounts().await?;

    let supply = optional("getSupply", rpc.get_supply().await).unwrap_or_default();
    let inflation = optional("getInflationRate", rpc.get_inflation_rate().await).unwrap_or_default();
    let performance_history = optional(
        "getRecentPerformanceSamples",
        rpc.get_recent_performance_samples().await.map(Some),
    )
    .unwrap_or_default();

    let staking = StakingYield::estimate(&inflation, &supply, total_active_stake(&vote_accounts));

    let mut validators = Vec::with_capacity(vote_accounts.current.len() + vote_accounts.delinquent.len());
    for (account, delinquent) in vote_accounts.iter_all() {
        let performance = optional(
            "getValidatorPerformance",
            rpc.get_validator_performance(&account.vote_pubkey).await.map(Some),
        )
        .unwrap_or(Value::Null);
        validators.push(validator_stats(account, delinquent, epoch.epoch, epoch.slots_in_epoch, performance));
    }

    Ok(StatsResponse {
        epoch,
        supply: SupplyView {
            total: supply.total,
            circulating: supply.circulating,
            non_circulating: supply.non_circulating,
            effective: supply.total,
            inflation,
        },
        staking,
        validators,
        performance_history,
    })
}

fn validator_stats(
    account: &VoteAccount,
    delinquent: bool,
    epoch: u64,
    slots_in_epoch: u64,
    performance: Value,
) -> ValidatorStats {
    let earned = credit_window(&account.epoch_credits, epoch)
        .map(|window| window.earned())
        .unwrap_or(0);

    ValidatorStats {
        identity_pubkey: account.node_pubkey.clone(),
        vote_account_pubkey: account.vote_pubkey.clone(),
        commission: account.commission,
        last_vote: account.last_vote,
        root_slot: account.root_slot,
        activated_stake: account.activated_stake,
        delinquent,
        skip_rate: skip_rate(slots_in_epoch, earned),
        epoch_credits: account.epoch_credits.clone(),
        performance,
    }
}

/// A failed optional call is logged and treated as absent
fn optional<T>(method: &str, result: Result<Option<T>, RpcClientError>) -> Option<T> {
    match result {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            warn!("{} returned no result, using defaults", method);
            None
        }
        Err(e) => {
            warn!("{} failed, using defaults: {}", method, e);
            None
        }
    }
}
