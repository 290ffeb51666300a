//! Joins the command line datasets into the rows of one ingestion run.
//!
//! ## Join rules
//! 1. Staking aggregates count only delegations that name a vote account.
//! 2. Every validator yields exactly one stats row; a missing aggregate or a
//!    missing block-production entry contributes zeros.
//! 3. Stake accounts without an active stake never activated and are dropped.
//! 4. When a key repeats within one dataset the later entry wins.

use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::models::{
    CliValidator, ClusterInputs, LeaderProduction, ReconciledCluster, SkipRateUpdate,
    StakeAccount, StakeDelegation, StakingAggregate, StakingAggregates, StatsRow,
    ValidatorInfoEntry, ValidatorProfileUpdate, ValidatorRecord,
};

/// Join all command line datasets of one run
pub fn reconcile(inputs: &ClusterInputs) -> ReconciledCluster {
    let staking = build_staking_aggregates(&inputs.stakes);

    ReconciledCluster {
        stats: build_stats_rows(inputs.slot, &inputs.validators, &staking, &inputs.production),
        stake_accounts: build_stake_accounts(&inputs.stakes),
        validators: build_validator_records(&inputs.validators),
        profiles: build_profile_updates(&inputs.validator_info),
        skip_rates: build_skip_rate_updates(&inputs.validators),
    }
}

/// Count stakers and sum delegated stake per vote account
pub fn build_staking_aggregates(stakes: &[StakeDelegation]) -> StakingAggregates {
    let mut staking = StakingAggregates::new();

    for stake in stakes {
        let Some(vote_account) = &stake.delegated_vote_account_address else {
            continue;
        };
        let aggregate = staking.entry(vote_account.clone()).or_default();
        aggregate.staker_count += 1;
        aggregate.total_stake += stake.delegated_stake.unwrap_or(0);
    }

    staking
}

/// Compose one stats row per validator
pub fn build_stats_rows(
    slot: u64,
    validators: &[CliValidator],
    staking: &StakingAggregates,
    production: &[LeaderProduction],
) -> Vec<StatsRow> {
    let production_by_identity: HashMap<&str, &LeaderProduction> = production
        .iter()
        .map(|entry| (entry.identity_pubkey.as_str(), entry))
        .collect();

    let rows = validators
        .iter()
        .map(|validator| {
            let aggregate = staking
                .get(&validator.vote_account_pubkey)
                .copied()
                .unwrap_or_default();
            let leader = production_by_identity
                .get(validator.identity_pubkey.as_str())
                .copied()
                .cloned()
                .unwrap_or_default();

            StatsRow {
                slot,
                last_vote: validator.last_vote,
                root_slot: validator.root_slot,
                identity_pubkey: validator.identity_pubkey.clone(),
                vote_account_pubkey: validator.vote_account_pubkey.clone(),
                commission: validator.commission,
                skip_rate: validator.skip_rate.unwrap_or(0.0),
                stakers: aggregate.staker_count,
                stake: aggregate.total_stake,
                leader_slots: leader.leader_slots,
                blocks_produced: leader.blocks_produced,
                skipped_slots: leader.skipped_slots,
            }
        })
        .collect();

    dedup_last_wins(rows, |row| row.vote_account_pubkey.clone())
}

/// Normalize the stake accounts that carry an active stake
pub fn build_stake_accounts(stakes: &[StakeDelegation]) -> Vec<StakeAccount> {
    let accounts = stakes
        .iter()
        .filter_map(|stake| {
            let active_stake = stake.active_stake?;
            Some(StakeAccount {
                stake_pubkey: stake.stake_pubkey.clone(),
                stake_type: stake.stake_type.clone(),
                account_balance: stake.account_balance,
                credits_observed: stake.credits_observed,
                delegated_stake: stake.delegated_stake,
                delegated_vote_account_address: stake.delegated_vote_account_address.clone(),
                activation_epoch: stake.activation_epoch,
                deactivation_epoch: stake.deactivation_epoch,
                staker: stake.staker.clone(),
                withdrawer: stake.withdrawer.clone(),
                rent_exempt_reserve: stake.rent_exempt_reserve,
                active_stake,
                activating_stake: stake.activating_stake,
                deactivating_stake: stake.deactivating_stake,
            })
        })
        .collect();

    dedup_last_wins(accounts, |account| account.stake_pubkey.clone())
}

pub fn build_validator_records(validators: &[CliValidator]) -> Vec<ValidatorRecord> {
    let records = validators
        .iter()
        .map(|validator| ValidatorRecord {
            vote_pubkey: validator.vote_account_pubkey.clone(),
            identity_pubkey: validator.identity_pubkey.clone(),
            commission: validator.commission,
            activated_stake: validator.activated_stake,
            last_vote: validator.last_vote,
            root_slot: validator.root_slot,
        })
        .collect();

    dedup_last_wins(records, |record| record.vote_pubkey.clone())
}

pub fn build_profile_updates(validator_info: &[ValidatorInfoEntry]) -> Vec<ValidatorProfileUpdate> {
    let updates = validator_info
        .iter()
        .map(|entry| ValidatorProfileUpdate {
            identity_pubkey: entry.identity_pubkey.clone(),
            name: entry.info.name.clone(),
            website: entry.info.website.clone(),
        })
        .collect();

    dedup_last_wins(updates, |update| update.identity_pubkey.clone())
}

pub fn build_skip_rate_updates(validators: &[CliValidator]) -> Vec<SkipRateUpdate> {
    let updates = validators
        .iter()
        .map(|validator| SkipRateUpdate {
            identity_pubkey: validator.identity_pubkey.clone(),
            skip_rate: validator.skip_rate.unwrap_or(0.0),
        })
        .collect();

    dedup_last_wins(updates, |update| update.identity_pubkey.clone())
}

/// Keep one item per key: the last one seen, at the position of the first
fn dedup_last_wins<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::with_capacity(items.len());
    let mut kept: Vec<T> = Vec::with_capacity(items.len());

    for item in items {
        match positions.get(&key(&item)) {
            Some(&index) => kept[index] = item,
            None => {
                positions.insert(key(&item), kept.len());
                kept.push(item);
            }
        }
    }

    kept
}
