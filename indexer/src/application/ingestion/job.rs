//! One ingestion run: fetch, reconcile, write.
//!
//! Every input is fetched before anything is written. The writes of a run
//! share one database transaction, so either all five tables move to the new
//! snapshot or none of them changes.

use chrono::Utc;
use log::{error, info};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Serialize;

use crate::domain::errors::IngestionError;
use crate::domain::models::IngestionSnapshot;
use crate::domain::services::{performance_records, reconcile};
use crate::infrastructure::cli::ClusterDataSource;
use crate::infrastructure::persistence::repositories::{
    EpochRepository, PerformanceRepository, SnapshotRepository, ValidatorRepository,
};
use crate::infrastructure::rpc::ChainRpc;

/// Row counts written by one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestionSummary {
    pub epoch: u64,
    pub validators: u64,
    pub profile_updates: u64,
    pub skip_rate_updates: u64,
    pub performance: u64,
    pub stats: u64,
    pub stakers: u64,
}

/// Joins the command line and RPC datasets into the persisted snapshot
pub struct IngestionJob<S, R> {
    source: S,
    rpc: R,
    conn: DatabaseConnection,
}

impl<S, R> IngestionJob<S, R>
where
    S: ClusterDataSource,
    R: ChainRpc,
{
    pub fn new(source: S, rpc: R, conn: DatabaseConnection) -> Self {
        Self { source, rpc, conn }
    }

    /// Run once; any failure leaves the database untouched
    pub async fn run(&self) -> Result<IngestionSummary, IngestionError> {
        let snapshot = self.collect().await?;
        self.write(&snapshot).await.map_err(|e| {
            error!("Ingestion write rolled back: {}", e);
            e
        })
    }

    /// Fetch every input and reconcile it in memory
    pub async fn collect(&self) -> Result<IngestionSnapshot, IngestionError> {
        info!("Fetching cluster data from the command line");
        let inputs = self.source.fetch_all().await?;
        info!(
            "Fetched {} stake accounts, {} leaders, {} validators, {} validator-info entries at slot {}",
            inputs.stakes.len(),
            inputs.production.len(),
            inputs.validators.len(),
            inputs.validator_info.len(),
            inputs.slot
        );

        info!("Fetching epoch and vote accounts over RPC");
        let epoch = self
            .rpc
            .get_epoch_info()
            .await?
            .ok_or_else(|| IngestionError::MissingData("getEpochInfo returned no result".to_string()))?;
        let vote_accounts = self.rpc.get_vote_accounts().await?;

        Ok(IngestionSnapshot {
            performance: performance_records(&vote_accounts, &epoch),
            cluster: reconcile(&inputs),
            epoch,
        })
    }

    /// Write one snapshot in a single transaction
    pub async fn write(&self, snapshot: &IngestionSnapshot) -> Result<IngestionSummary, IngestionError> {
        let now = Utc::now();
        let txn = self.conn.begin().await?;
        let cluster = &snapshot.cluster;

        EpochRepository::upsert(&txn, &snapshot.epoch, now).await?;
        let validators = ValidatorRepository::upsert_many(&txn, &cluster.validators, now).await?;
        let profile_updates =
            ValidatorRepository::apply_profile_updates(&txn, &cluster.profiles, now).await?;
        let skip_rate_updates =
            ValidatorRepository::apply_skip_rate_updates(&txn, &cluster.skip_rates, now).await?;
        let performance = PerformanceRepository::upsert_many(&txn, &snapshot.performance, now).await?;
        let stats = SnapshotRepository::replace_stats(&txn, &cluster.stats, now).await?;
        let stakers = SnapshotRepository::replace_stakers(&txn, &cluster.stake_accounts, now).await?;

        txn.commit().await?;

        let summary = IngestionSummary {
            epoch: snapshot.epoch.epoch,
            validators,
            profile_updates,
            skip_rate_updates,
            performance,
            stats,
            stakers,
        };
        info!("Ingestion committed: {:?}", summary);

        Ok(summary)
    }
}
