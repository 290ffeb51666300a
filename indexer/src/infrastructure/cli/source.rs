use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{CliConfig, RpcConfig};
use crate::domain::models::{
    BlockProduction, CliValidator, ClusterInputs, LeaderProduction, StakeDelegation,
    ValidatorInfoEntry, ValidatorList,
};
use crate::infrastructure::cli::error::CliError;
use crate::infrastructure::cli::runner::CliRunner;

/// Source of the cluster datasets the ingestion job joins
#[async_trait]
pub trait ClusterDataSource: Send + Sync {
    async fn fetch_stakes(&self) -> Result<Vec<StakeDelegation>, CliError>;

    async fn fetch_block_production(&self) -> Result<Vec<LeaderProduction>, CliError>;

    async fn fetch_slot(&self) -> Result<u64, CliError>;

    async fn fetch_validators(&self) -> Result<Vec<CliValidator>, CliError>;

    async fn fetch_validator_info(&self) -> Result<Vec<ValidatorInfoEntry>, CliError>;

    /// Fetch every dataset; the first failure aborts
    async fn fetch_all(&self) -> Result<ClusterInputs, CliError> {
        Ok(ClusterInputs {
            stakes: self.fetch_stakes().await?,
            production: self.fetch_block_production().await?,
            slot: self.fetch_slot().await?,
            validators: self.fetch_validators().await?,
            validator_info: self.fetch_validator_info().await?,
        })
    }
}

/// The `nexis` validator tooling, pointed at one RPC endpoint
#[derive(Debug, Clone)]
pub struct NexisCli {
    runner: CliRunner,
    rpc_url: String,
}

impl NexisCli {
    pub fn new(cli: &CliConfig, rpc: &RpcConfig) -> Self {
        Self {
            runner: CliRunner::new(cli.binary.clone()),
            rpc_url: rpc.endpoint.clone(),
        }
    }

    async fn json_command<T: DeserializeOwned>(&self, command: &[&str]) -> Result<T, CliError> {
        let mut args: Vec<&str> = command.to_vec();
        args.extend(["--output", "json", "-u", self.rpc_url.as_str()]);
        let value = self.runner.run(&args).await?;
        decode(value, &args.join(" "))
    }
}

#[async_trait]
impl ClusterDataSource for NexisCli {
    async fn fetch_stakes(&self) -> Result<Vec<StakeDelegation>, CliError> {
        self.json_command(&["stakes"]).await
    }

    async fn fetch_block_production(&self) -> Result<Vec<LeaderProduction>, CliError> {
        let production: BlockProduction = self.json_command(&["block-production"]).await?;
        Ok(production.into_leaders())
    }

    async fn fetch_slot(&self) -> Result<u64, CliError> {
        let args = ["slot", "-u", self.rpc_url.as_str()];
        let value = self.runner.run(&args).await?;
        decode(value, &args.join(" "))
    }

    async fn fetch_validators(&self) -> Result<Vec<CliValidator>, CliError> {
        let list: ValidatorList = self.json_command(&["validators"]).await?;
        Ok(list.validators)
    }

    async fn fetch_validator_info(&self) -> Result<Vec<ValidatorInfoEntry>, CliError> {
        self.json_command(&["validator-info", "get"]).await
    }
}

fn decode<T: DeserializeOwned>(value: Value, command: &str) -> Result<T, CliError> {
    serde_json::from_value(value).map_err(|e| CliError::Decode {
        command: command.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_shape_mismatch_is_decode_error() {
        let err = decode::<u64>(json!({"slot": 5}), "nexis slot").unwrap_err();
        assert!(matches!(err, CliError::Decode { .. }));
        assert_eq!(err.command(), "nexis slot");
    }

    #[test]
    fn test_decode_validator_list() {
        let list: ValidatorList = decode(
            json!({
                "totalActiveStake": 100,
                "validators": [{
                    "identityPubkey": "id1",
                    "voteAccountPubkey": "vote1",
                    "commission": 8,
                    "lastVote": 10,
                    "rootSlot": 2,
                    "activatedStake": 100,
                    "skipRate": 1.5,
                    "delinquent": true
                }]
            }),
            "nexis validators",
        )
        .unwrap();

        assert_eq!(list.validators.len(), 1);
        assert!(list.validators[0].delinquent);
        assert_eq!(list.validators[0].skip_rate, Some(1.5));
    }
}
