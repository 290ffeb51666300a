// API request/response models
use serde::{Deserialize, Serialize};
use serde_json::Value;

use nexscan_indexer::domain::services::StakingYield;
use nexscan_indexer::infrastructure::persistence::entities::{
    epoch_info, stakers, validator_performance, validators,
};
use nexscan_indexer::infrastructure::rpc::{EpochCredits, EpochInfo, InflationRate, PerformanceSample};

/// Query parameters for GET /search
#[derive(Debug, Deserialize, Default)]
pub struct SearchQuery {
    #[serde(rename = "type")]
    pub search_type: Option<String>,
    pub search: Option<String>,
}

/// Envelope of a successful search
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub result: Value,
}

/// Query parameters for GET /validators/{vote_pubkey}
#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    pub limit: Option<String>,
}

/// Response structure for GET /stats
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub epoch: EpochInfo,
    pub supply: SupplyView,
    pub staking: StakingYield,
    pub validators: Vec<ValidatorStats>,
    pub performance_history: Vec<PerformanceSample>,
}

#[derive(Debug, Default, Serialize)]
pub struct SupplyView {
    pub total: u64,
    pub circulating: u64,
    pub non_circulating: u64,
    pub effective: u64,
    pub inflation: InflationRate,
}

/// One vote account of GET /stats
#[derive(Debug, Serialize)]
pub struct ValidatorStats {
    #[serde(rename = "identityPubkey")]
    pub identity_pubkey: String,
    #[serde(rename = "voteAccountPubkey")]
    pub vote_account_pubkey: String,
    pub commission: u32,
    #[serde(rename = "lastVote")]
    pub last_vote: u64,
    #[serde(rename = "rootSlot")]
    pub root_slot: u64,
    pub activated_stake: u64,
    pub delinquent: bool,
    pub skip_rate: f64,
    pub epoch_credits: Vec<EpochCredits>,
    pub performance: Value,
}

/// Published identity attached to a validator search result
#[derive(Debug, Serialize)]
pub struct ValidatorProfile {
    pub name: Option<String>,
    pub website: Option<String>,
}

impl From<&validators::Model> for ValidatorProfile {
    fn from(model: &validators::Model) -> Self {
        Self {
            name: model.name.clone(),
            website: model.website.clone(),
        }
    }
}

/// Response structure for GET /validators
#[derive(Debug, Serialize)]
pub struct ValidatorsResponse {
    pub validators: Vec<validators::Model>,
}

/// Response structure for GET /validators/{vote_pubkey}
#[derive(Debug, Serialize)]
pub struct ValidatorDetailResponse {
    pub validator: validators::Model,
    pub performance: Vec<validator_performance::Model>,
}

/// Response structure for GET /validators/{vote_pubkey}/stakers
#[derive(Debug, Serialize)]
pub struct StakersResponse {
    pub vote_pubkey: String,
    pub total_active_stake: i64,
    pub stakers: Vec<stakers::Model>,
}

/// Response structure for GET /epochs/latest
pub type EpochResponse = epoch_info::Model;
