// API endpoint handlers and shared state

pub mod health;
pub mod search;
pub mod stats;
pub mod validators;

use std::sync::Arc;

use nexscan_indexer::infrastructure::rpc::ChainRpc;

use crate::db::Repositories;

pub use health::health_check;
pub use search::search;
pub use stats::get_stats;
pub use validators::{get_latest_epoch, get_validator, get_validator_stakers, get_validators};

/// State shared by every request
pub struct ApiState {
    pub repositories: Repositories,
    pub rpc: Arc<dyn ChainRpc>,
    pub performance_history_limit: u64,
}

// Type alias for the application state
pub type AppState = Arc<ApiState>;
