//! Rows produced by one ingestion run, ready to be written.

use serde::Serialize;
use std::collections::HashMap;

use crate::infrastructure::rpc::EpochInfo;

/// Delegation totals of one vote account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StakingAggregate {
    pub staker_count: u64,
    pub total_stake: u64,
}

/// Staking aggregates keyed by vote account
pub type StakingAggregates = HashMap<String, StakingAggregate>;

/// Flattened per-validator fact row of the `stats` table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsRow {
    pub slot: u64,
    pub last_vote: u64,
    pub root_slot: u64,
    pub identity_pubkey: String,
    pub vote_account_pubkey: String,
    pub commission: u32,
    pub skip_rate: f64,
    pub stakers: u64,
    pub stake: u64,
    pub leader_slots: u64,
    pub blocks_produced: u64,
    pub skipped_slots: u64,
}

/// Normalized stake account of the `stakers` table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StakeAccount {
    pub stake_pubkey: String,
    pub stake_type: String,
    pub account_balance: u64,
    pub credits_observed: Option<u64>,
    pub delegated_stake: Option<u64>,
    pub delegated_vote_account_address: Option<String>,
    pub activation_epoch: Option<u64>,
    pub deactivation_epoch: Option<u64>,
    pub staker: Option<String>,
    pub withdrawer: Option<String>,
    pub rent_exempt_reserve: Option<u64>,
    pub active_stake: u64,
    pub activating_stake: Option<u64>,
    pub deactivating_stake: Option<u64>,
}

/// Latest known state of a validator
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidatorRecord {
    pub vote_pubkey: String,
    pub identity_pubkey: String,
    pub commission: u32,
    pub activated_stake: u64,
    pub last_vote: u64,
    pub root_slot: u64,
}

/// Targeted update of a validator's published name and website
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidatorProfileUpdate {
    pub identity_pubkey: String,
    pub name: Option<String>,
    pub website: Option<String>,
}

/// Targeted update of a validator's skip rate
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkipRateUpdate {
    pub identity_pubkey: String,
    pub skip_rate: f64,
}

/// One validator's vote credits over one epoch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceRecord {
    pub vote_pubkey: String,
    pub epoch: u64,
    pub credits: u64,
    pub credits_start: u64,
    pub credits_end: u64,
    pub skip_rate: f64,
}

/// The joined command line datasets
#[derive(Debug, Clone, Default)]
pub struct ReconciledCluster {
    pub stats: Vec<StatsRow>,
    pub stake_accounts: Vec<StakeAccount>,
    pub validators: Vec<ValidatorRecord>,
    pub profiles: Vec<ValidatorProfileUpdate>,
    pub skip_rates: Vec<SkipRateUpdate>,
}

/// Everything one ingestion run writes, in one transaction
#[derive(Debug, Clone, Default)]
pub struct IngestionSnapshot {
    pub epoch: EpochInfo,
    pub performance: Vec<PerformanceRecord>,
    pub cluster: ReconciledCluster,
}
