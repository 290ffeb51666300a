use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::domain::models::PerformanceRecord;
use crate::infrastructure::persistence::entities::validator_performance;
use crate::infrastructure::persistence::error::DbError;
use crate::infrastructure::persistence::repositories::{db_int, BATCH_SIZE};

/// Repository for per-epoch validator performance
#[derive(Clone, Debug)]
pub struct PerformanceRepository {
    conn: DatabaseConnection,
}

impl PerformanceRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Most recent epochs of one validator, newest first
    pub async fn history(
        &self,
        vote_pubkey: &str,
        limit: u64,
    ) -> Result<Vec<validator_performance::Model>, DbError> {
        Ok(validator_performance::Entity::find()
            .filter(validator_performance::Column::VotePubkey.eq(vote_pubkey))
            .order_by_desc(validator_performance::Column::Epoch)
            .limit(limit)
            .all(&self.conn)
            .await?)
    }

    /// Insert or overwrite performance rows by (vote key, epoch)
    pub async fn upsert_many<C: ConnectionTrait>(
        db: &C,
        records: &[PerformanceRecord],
        now: DateTime<Utc>,
    ) -> Result<u64, DbError> {
        let mut written = 0;

        for chunk in records.chunks(BATCH_SIZE) {
            let models: Vec<validator_performance::ActiveModel> = chunk
                .iter()
                .map(|record| validator_performance::ActiveModel {
                    vote_pubkey: Set(record.vote_pubkey.clone()),
                    epoch: Set(db_int(record.epoch)),
                    credits: Set(db_int(record.credits)),
                    credits_start: Set(db_int(record.credits_start)),
                    credits_end: Set(db_int(record.credits_end)),
                    skip_rate: Set(record.skip_rate),
                    updated_at: Set(now),
                })
                .collect();

            written += validator_performance::Entity::insert_many(models)
                .on_conflict(
                    OnConflict::columns([
                        validator_performance::Column::VotePubkey,
                        validator_performance::Column::Epoch,
                    ])
                    .update_columns([
                        validator_performance::Column::Credits,
                        validator_performance::Column::CreditsStart,
                        validator_performance::Column::CreditsEnd,
                        validator_performance::Column::SkipRate,
                        validator_performance::Column::UpdatedAt,
                    ])
                    .to_owned(),
                )
                .exec_without_returning(db)
                .await?;
        }

        Ok(written)
    }
}
