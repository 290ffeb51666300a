use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::config::RpcConfig;
use crate::infrastructure::rpc::error::RpcClientError;
use crate::infrastructure::rpc::ChainRpc;

/// JSON-RPC 2.0 client for a single node endpoint
#[derive(Debug)]
pub struct RpcClient {
    client: Client,
    endpoint: String,
    request_id: AtomicU64,
}

impl RpcClient {
    /// Create a new RPC client
    pub fn new(config: &RpcConfig) -> Result<Self, RpcClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            request_id: AtomicU64::new(1),
        })
    }

    /// Endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChainRpc for RpcClient {
    async fn call(&self, method: &str, params: Value) -> Result<Value, RpcClientError> {
        let id = self.request_id.fetch_add(1, Ordering::Relaxed);
        let request_body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params
        });

        debug!("RPC request {} #{}", method, id);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcClientError::Status(status.as_u16()));
        }

        let response_text = response.text().await?;
        let mut response_json: Value = serde_json::from_str(&response_text)
            .map_err(|e| RpcClientError::Decode(format!("{} response is not JSON: {}", method, e)))?;

        // A node-side error carries no result; callers see it as absent data
        if let Some(error) = response_json.get("error") {
            warn!("RPC {} returned error: {}", method, error);
        }

        Ok(response_json
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }
}
