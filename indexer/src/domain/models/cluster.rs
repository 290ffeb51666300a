//! Payloads emitted by the validator tooling command line (`--output json`).

use serde::{Deserialize, Serialize};

/// One entry of `stakes --output json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeDelegation {
    pub stake_pubkey: String,
    #[serde(default)]
    pub stake_type: String,
    #[serde(default)]
    pub account_balance: u64,
    pub credits_observed: Option<u64>,
    pub delegated_stake: Option<u64>,
    pub delegated_vote_account_address: Option<String>,
    pub activation_epoch: Option<u64>,
    pub deactivation_epoch: Option<u64>,
    pub staker: Option<String>,
    pub withdrawer: Option<String>,
    pub rent_exempt_reserve: Option<u64>,
    pub active_stake: Option<u64>,
    pub activating_stake: Option<u64>,
    pub deactivating_stake: Option<u64>,
}

/// Per-leader slot counts of `block-production --output json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderProduction {
    pub identity_pubkey: String,
    pub leader_slots: u64,
    pub blocks_produced: u64,
    pub skipped_slots: u64,
}

/// `block-production` prints a report object; older tooling printed the bare leader list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BlockProduction {
    Report { leaders: Vec<LeaderProduction> },
    Leaders(Vec<LeaderProduction>),
}

impl BlockProduction {
    pub fn into_leaders(self) -> Vec<LeaderProduction> {
        match self {
            BlockProduction::Report { leaders } => leaders,
            BlockProduction::Leaders(leaders) => leaders,
        }
    }
}

/// One validator of `validators --output json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliValidator {
    pub identity_pubkey: String,
    pub vote_account_pubkey: String,
    #[serde(default)]
    pub commission: u32,
    #[serde(default)]
    pub last_vote: u64,
    #[serde(default)]
    pub root_slot: u64,
    #[serde(default)]
    pub activated_stake: u64,
    pub skip_rate: Option<f64>,
    #[serde(default)]
    pub delinquent: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidatorList {
    #[serde(default)]
    pub validators: Vec<CliValidator>,
}

/// Published identity metadata of one validator (`validator-info get`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorInfoEntry {
    pub identity_pubkey: String,
    #[serde(default)]
    pub info_pubkey: String,
    #[serde(default)]
    pub info: ValidatorInfoDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorInfoDetails {
    pub name: Option<String>,
    pub website: Option<String>,
    pub details: Option<String>,
    pub keybase_username: Option<String>,
    pub icon_url: Option<String>,
}

/// Everything one ingestion run reads from the command line
#[derive(Debug, Clone, Default)]
pub struct ClusterInputs {
    pub stakes: Vec<StakeDelegation>,
    pub production: Vec<LeaderProduction>,
    pub slot: u64,
    pub validators: Vec<CliValidator>,
    pub validator_info: Vec<ValidatorInfoEntry>,
}
