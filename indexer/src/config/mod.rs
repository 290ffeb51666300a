use dotenv::dotenv;
use std::env;

/// Configuration for the JSON-RPC client
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// JSON-RPC endpoint of the node
    pub endpoint: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

/// Configuration for the validator tooling command line
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Executable name or path
    pub binary: String,
}

/// Configuration for the database
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
}

impl DatabaseConfig {
    /// Resolve the database URL from the environment.
    ///
    /// `DATABASE_URL` wins; otherwise `DB_PATH` selects a SQLite file;
    /// otherwise a PostgreSQL URL is assembled from the `DB_*` parts.
    pub fn from_env() -> Self {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Self { url };
        }

        if let Ok(path) = env::var("DB_PATH") {
            return Self {
                url: format!("sqlite://{}?mode=rwc", path),
            };
        }

        let name = env::var("DB_NAME").unwrap_or_else(|_| "nexscan".to_string());
        let user = env::var("DB_USER").unwrap_or_else(|_| "nexscan".to_string());
        let password = env::var("DB_PASSWORD").unwrap_or_else(|_| "nexscan".to_string());
        let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());

        Self {
            url: format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name),
        }
    }
}

/// Configuration for the housekeeping job
#[derive(Debug, Clone)]
pub struct HousekeepingConfig {
    /// Stats rows older than this many days are deleted
    pub retention_days: i64,
    /// Materialized views refreshed on every run, in order
    pub materialized_views: Vec<String>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON-RPC client configuration
    pub rpc: RpcConfig,
    /// Command line data source configuration
    pub cli: CliConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Housekeeping configuration
    pub housekeeping: HousekeepingConfig,
}

pub const DEFAULT_RPC_ENDPOINT: &str = "https://api.testnet.nexis.network";
pub const DEFAULT_RETENTION_DAYS: i64 = 91;

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Ensure .env file is loaded
        dotenv().ok();

        let rpc_config = RpcConfig {
            endpoint: env::var("RPC_ENDPOINT").unwrap_or_else(|_| DEFAULT_RPC_ENDPOINT.to_string()),
            timeout_secs: env::var("RPC_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .unwrap_or(30),
        };

        let cli_config = CliConfig {
            binary: env::var("NEXIS_CLI").unwrap_or_else(|_| "nexis".to_string()),
        };

        let housekeeping_config = HousekeepingConfig {
            retention_days: env::var("RETENTION_DAYS")
                .unwrap_or_else(|_| DEFAULT_RETENTION_DAYS.to_string())
                .parse::<i64>()
                .unwrap_or(DEFAULT_RETENTION_DAYS),
            materialized_views: parse_view_list(
                &env::var("MATERIALIZED_VIEWS")
                    .unwrap_or_else(|_| "stats_stake,stats_performance".to_string()),
            ),
        };

        Self {
            rpc: rpc_config,
            cli: cli_config,
            database: DatabaseConfig::from_env(),
            housekeeping: housekeeping_config,
        }
    }
}

fn parse_view_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
