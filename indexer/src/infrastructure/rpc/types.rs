//! Typed result payloads of the JSON-RPC methods the explorer consumes.
//!
//! Every field defaults when absent so a partially populated answer from the
//! node still decodes; callers treat the defaults as zero values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EpochInfo {
    pub epoch: u64,
    pub slot_index: u64,
    pub slots_in_epoch: u64,
    pub absolute_slot: u64,
    pub block_height: u64,
    pub transaction_count: u64,
}

/// `[epoch, credits, previous_credits]`
pub type EpochCredits = (u64, u64, u64);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoteAccount {
    pub node_pubkey: String,
    pub vote_pubkey: String,
    pub commission: u32,
    pub last_vote: u64,
    pub root_slot: u64,
    pub activated_stake: u64,
    pub epoch_vote_account: bool,
    pub epoch_credits: Vec<EpochCredits>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteAccounts {
    pub current: Vec<VoteAccount>,
    pub delinquent: Vec<VoteAccount>,
}

impl VoteAccounts {
    /// Current accounts followed by delinquent ones, tagged with their delinquency
    pub fn iter_all(&self) -> impl Iterator<Item = (&VoteAccount, bool)> {
        self.current
            .iter()
            .map(|account| (account, false))
            .chain(self.delinquent.iter().map(|account| (account, true)))
    }

    /// Find a vote account by vote key among current and delinquent accounts
    pub fn find(&self, vote_pubkey: &str) -> Option<(&VoteAccount, bool)> {
        self.iter_all()
            .find(|(account, _)| account.vote_pubkey == vote_pubkey)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supply {
    pub total: u64,
    pub circulating: u64,
    pub non_circulating: u64,
}

/// `getSupply` wraps its value in an RPC context; some nodes answer bare
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SupplyResponse {
    Wrapped { value: Supply },
    Bare(Supply),
}

impl From<SupplyResponse> for Supply {
    fn from(response: SupplyResponse) -> Self {
        match response {
            SupplyResponse::Wrapped { value } => value,
            SupplyResponse::Bare(supply) => supply,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InflationRate {
    pub total: f64,
    pub validator: f64,
    pub foundation: f64,
    pub epoch: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceSample {
    pub slot: u64,
    pub num_transactions: u64,
    pub num_slots: u64,
    pub sample_period_secs: u64,
}
