#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

use nexscan_indexer::config::DatabaseConfig;
use nexscan_indexer::domain::models::{
    CliValidator, ClusterInputs, LeaderProduction, StakeDelegation, ValidatorInfoDetails,
    ValidatorInfoEntry,
};
use nexscan_indexer::infrastructure::cli::{CliError, ClusterDataSource};
use nexscan_indexer::infrastructure::persistence::DbPool;
use nexscan_indexer::infrastructure::rpc::{ChainRpc, RpcClientError};

/// Fresh in-memory SQLite database with the schema applied
pub async fn migrated_db() -> DatabaseConnection {
    let pool = DbPool::new(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
    })
    .await
    .unwrap();
    let conn = pool.get_connection().clone();
    Migrator::up(&conn, None).await.unwrap();
    conn
}

/// Answers each method with a canned result, `null` for anything else
#[derive(Default)]
pub struct StubRpc {
    results: HashMap<String, Value>,
    pub calls: Mutex<Vec<String>>,
}

impl StubRpc {
    pub fn with(mut self, method: &str, result: Value) -> Self {
        self.results.insert(method.to_string(), result);
        self
    }
}

#[async_trait]
impl ChainRpc for StubRpc {
    async fn call(&self, method: &str, _params: Value) -> Result<Value, RpcClientError> {
        self.calls.lock().unwrap().push(method.to_string());
        Ok(self.results.get(method).cloned().unwrap_or(Value::Null))
    }
}

/// Serves fixed cluster inputs; `fail_validator_info` makes that fetch exit nonzero
#[derive(Default)]
pub struct StubSource {
    pub inputs: ClusterInputs,
    pub fail_validator_info: bool,
}

#[async_trait]
impl ClusterDataSource for StubSource {
    async fn fetch_stakes(&self) -> Result<Vec<StakeDelegation>, CliError> {
        Ok(self.inputs.stakes.clone())
    }

    async fn fetch_block_production(&self) -> Result<Vec<LeaderProduction>, CliError> {
        Ok(self.inputs.production.clone())
    }

    async fn fetch_slot(&self) -> Result<u64, CliError> {
        Ok(self.inputs.slot)
    }

    async fn fetch_validators(&self) -> Result<Vec<CliValidator>, CliError> {
        Ok(self.inputs.validators.clone())
    }

    async fn fetch_validator_info(&self) -> Result<Vec<ValidatorInfoEntry>, CliError> {
        if self.fail_validator_info {
            return Err(CliError::NonZeroExit {
                command: "nexis validator-info get --output json".to_string(),
                status: Some(1),
                stderr: "Error: RPC request error".to_string(),
            });
        }
        Ok(self.inputs.validator_info.clone())
    }
}

pub fn chain_rpc(epoch: u64) -> StubRpc {
    StubRpc::default()
        .with(
            "getEpochInfo",
            json!({
                "epoch": epoch,
                "slotIndex": 120,
                "slotsInEpoch": 1000,
                "absoluteSlot": epoch * 1000 + 120,
                "blockHeight": epoch * 990 + 118,
                "transactionCount": 5_000_000
            }),
        )
        .with(
            "getVoteAccounts",
            json!({
                "current": [{
                    "nodePubkey": "identity-a",
                    "votePubkey": "vote-a",
                    "commission": 5,
                    "activatedStake": 15,
                    "epochCredits": [[epoch - 1, 400, 100], [epoch, 1200, 400]]
                }],
                "delinquent": [{
                    "nodePubkey": "identity-b",
                    "votePubkey": "vote-b",
                    "commission": 10,
                    "activatedStake": 0,
                    "epochCredits": []
                }]
            }),
        )
}

pub fn stake(pubkey: &str, vote: Option<&str>, delegated: u64, active: Option<u64>) -> StakeDelegation {
    StakeDelegation {
        stake_pubkey: pubkey.to_string(),
        stake_type: "Stake".to_string(),
        account_balance: delegated + 2_282_880,
        delegated_stake: Some(delegated),
        delegated_vote_account_address: vote.map(str::to_string),
        activation_epoch: Some(3),
        deactivation_epoch: Some(u64::MAX),
        staker: Some(format!("staker-{pubkey}")),
        withdrawer: Some(format!("withdrawer-{pubkey}")),
        rent_exempt_reserve: Some(2_282_880),
        active_stake: active,
        ..Default::default()
    }
}

pub fn validator(identity: &str, vote: &str, skip_rate: Option<f64>) -> CliValidator {
    CliValidator {
        identity_pubkey: identity.to_string(),
        vote_account_pubkey: vote.to_string(),
        commission: 5,
        last_vote: 10_118,
        root_slot: 10_087,
        activated_stake: 15,
        skip_rate,
        delinquent: false,
    }
}

/// Two validators, three stake accounts (one never activated), one leader
pub fn cluster_inputs() -> ClusterInputs {
    ClusterInputs {
        stakes: vec![
            stake("stake-1", Some("vote-a"), 10, Some(100)),
            stake("stake-2", Some("vote-a"), 5, Some(50)),
            stake("stake-3", Some("vote-b"), 1, None),
        ],
        production: vec![LeaderProduction {
            identity_pubkey: "identity-a".to_string(),
            leader_slots: 40,
            blocks_produced: 38,
            skipped_slots: 2,
        }],
        slot: 10_120,
        validators: vec![
            validator("identity-a", "vote-a", Some(5.0)),
            validator("identity-b", "vote-b", None),
        ],
        validator_info: vec![ValidatorInfoEntry {
            identity_pubkey: "identity-a".to_string(),
            info_pubkey: "info-a".to_string(),
            info: ValidatorInfoDetails {
                name: Some("Alpha Validator".to_string()),
                website: Some("https://alpha.example".to_string()),
                ..Default::default()
            },
        }],
    }
}
