use std::process::ExitCode;

use log::{error, info};

use nexscan_indexer::application::HousekeepingJob;
use nexscan_indexer::config::AppConfig;
use nexscan_indexer::infrastructure::persistence::{DbPool, RepositoryFactory};
use nexscan_indexer::utils::logging;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logger();

    let config = AppConfig::from_env();

    let db_pool = match DbPool::new(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Housekeeping aborted: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let repositories = RepositoryFactory::create_repositories(&db_pool);
    let job = HousekeepingJob::new(repositories.maintenance, config.housekeeping.clone());
    let report = job.run().await;

    let failed = report.failures().count();
    if failed > 0 {
        error!("Housekeeping finished with {} failed task(s)", failed);
        return ExitCode::FAILURE;
    }

    info!("Housekeeping finished: {} task(s) succeeded", report.outcomes.len());
    ExitCode::SUCCESS
}
