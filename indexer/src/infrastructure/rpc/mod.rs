//! JSON-RPC access to the chain node
//!
//! [`ChainRpc`] is the seam the ingestion job and the API depend on: the only
//! required method is the raw `call`, the typed accessors are provided on top
//! of it so alternative transports (and test stubs) implement one method.

pub mod client;
pub mod error;
pub mod types;

pub use client::RpcClient;
pub use error::RpcClientError;
pub use types::{EpochCredits, EpochInfo, InflationRate, PerformanceSample, Supply, VoteAccount, VoteAccounts};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use types::SupplyResponse;

/// Source of chain state over JSON-RPC
#[async_trait]
pub trait ChainRpc: Send + Sync {
    /// Issue one JSON-RPC request and return its `result`, `Value::Null` when absent
    async fn call(&self, method: &str, params: Value) -> Result<Value, RpcClientError>;

    async fn get_epoch_info(&self) -> Result<Option<EpochInfo>, RpcClientError> {
        decode_result(self.call("getEpochInfo", json!([])).await?)
    }

    /// Vote accounts; an absent result is an empty set
    async fn get_vote_accounts(&self) -> Result<VoteAccounts, RpcClientError> {
        Ok(decode_result::<VoteAccounts>(self.call("getVoteAccounts", json!([])).await?)?.unwrap_or_default())
    }

    async fn get_supply(&self) -> Result<Option<Supply>, RpcClientError> {
        let result = self
            .call(
                "getSupply",
                json!([{ "excludeNonCirculatingAccountsList": true }]),
            )
            .await?;
        Ok(decode_result::<SupplyResponse>(result)?.map(Supply::from))
    }

    async fn get_inflation_rate(&self) -> Result<Option<InflationRate>, RpcClientError> {
        decode_result(self.call("getInflationRate", json!([])).await?)
    }

    async fn get_recent_performance_samples(
        &self,
    ) -> Result<Vec<PerformanceSample>, RpcClientError> {
        Ok(
            decode_result::<Vec<PerformanceSample>>(
                self.call("getRecentPerformanceSamples", json!([])).await?,
            )?
                .unwrap_or_default(),
        )
    }

    async fn get_block(&self, slot: u64) -> Result<Value, RpcClientError> {
        self.call(
            "getBlock",
            json!([slot, { "maxSupportedTransactionVersion": 0 }]),
        )
        .await
    }

    async fn get_transaction(&self, signature: &str) -> Result<Value, RpcClientError> {
        self.call(
            "getTransaction",
            json!([signature, { "encoding": "json", "maxSupportedTransactionVersion": 0 }]),
        )
        .await
    }

    async fn get_account_info(&self, address: &str) -> Result<Value, RpcClientError> {
        self.call("getAccountInfo", json!([address, { "encoding": "jsonParsed" }]))
            .await
    }

    async fn get_balance(&self, address: &str) -> Result<Value, RpcClientError> {
        self.call("getBalance", json!([address])).await
    }

    /// Node-specific extension; not part of the standard method set
    async fn get_validator_performance(&self, vote_pubkey: &str) -> Result<Value, RpcClientError> {
        self.call("getValidatorPerformance", json!([vote_pubkey])).await
    }
}

/// Decode a `result` payload, mapping `null` to `None`
pub fn decode_result<T: DeserializeOwned>(value: Value) -> Result<Option<T>, RpcClientError> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| RpcClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_result_null_is_none() {
        let decoded: Option<EpochInfo> = decode_result(Value::Null).unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn test_decode_result_wrong_shape_is_error() {
        let decoded = decode_result::<Vec<PerformanceSample>>(json!({"slot": 1}));
        assert!(matches!(decoded, Err(RpcClientError::Decode(_))));
    }
}
