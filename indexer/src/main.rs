use std::process::ExitCode;

use anyhow::Context;
use log::{error, info};

use nexscan_indexer::application::IngestionJob;
use nexscan_indexer::config::AppConfig;
use nexscan_indexer::infrastructure::cli::NexisCli;
use nexscan_indexer::infrastructure::persistence::DbPool;
use nexscan_indexer::infrastructure::rpc::RpcClient;
use nexscan_indexer::utils::logging;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logger();

    info!("nexscan-indexer {}", env!("CARGO_PKG_VERSION"));

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Ingestion run failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    let db_pool = DbPool::new(&config.database)
        .await
        .context("connecting to the database")?;
    let rpc = RpcClient::new(&config.rpc).context("building the RPC client")?;
    let source = NexisCli::new(&config.cli, &config.rpc);

    info!("Using RPC endpoint {} and CLI `{}`", rpc.endpoint(), config.cli.binary);

    let job = IngestionJob::new(source, rpc, db_pool.get_connection().clone());
    let summary = job.run().await?;

    info!(
        "Epoch {}: {} validators, {} performance rows, {} stats rows, {} stake accounts",
        summary.epoch, summary.validators, summary.performance, summary.stats, summary.stakers
    );

    Ok(())
}
