// Configuration management from environment variables

use dotenv::dotenv;
use std::env;

use nexscan_indexer::config::{DatabaseConfig, RpcConfig, DEFAULT_RPC_ENDPOINT};

pub const MAX_PERFORMANCE_HISTORY_LIMIT: u64 = 100;

/// Configuration settings for the explorer API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Upstream node
    pub rpc: RpcConfig,

    // Database configuration
    pub database_url: String,
    pub db_pool_max: u32,
    pub db_pool_min: u32,

    /// Default page size of a validator's performance history
    pub performance_history_limit: u64,
}

impl ApiConfig {
    /// Creates configuration instance from environment variables with defaults
    pub fn from_env() -> Self {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env_or("PORT", 3001);

        let rpc = RpcConfig {
            endpoint: env::var("RPC_ENDPOINT").unwrap_or_else(|_| DEFAULT_RPC_ENDPOINT.to_string()),
            timeout_secs: env_or("RPC_TIMEOUT_SECS", 30),
        };

        Self {
            host,
            port,
            rpc,
            database_url: DatabaseConfig::from_env().url,
            db_pool_max: env_or("DB_POOL_MAX", 10),
            db_pool_min: env_or("DB_POOL_MIN", 1),
            performance_history_limit: env_or("PERFORMANCE_HISTORY_LIMIT", 10u64)
                .clamp(1, MAX_PERFORMANCE_HISTORY_LIMIT),
        }
    }

    /// Returns formatted server address string (host:port)
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
