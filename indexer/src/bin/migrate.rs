use log::info;
use migration::{Migrator, MigratorTrait};

use nexscan_indexer::config::DatabaseConfig;
use nexscan_indexer::infrastructure::persistence::DbPool;
use nexscan_indexer::utils::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger
    logging::init_logger();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let db_pool = DbPool::new(&DatabaseConfig::from_env()).await?;

    info!("Running database migrations...");

    Migrator::up(db_pool.get_connection(), None).await?;

    info!("Migrations completed successfully!");

    Ok(())
}
