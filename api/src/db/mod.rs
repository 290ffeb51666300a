// Database access: a tuned connection pool over the shared repositories

pub mod pool;

pub use nexscan_indexer::infrastructure::persistence::Repositories;
pub use pool::DbPool;
