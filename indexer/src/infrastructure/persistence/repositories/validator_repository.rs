use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::models::{SkipRateUpdate, ValidatorProfileUpdate, ValidatorRecord};
use crate::infrastructure::persistence::entities::validators;
use crate::infrastructure::persistence::error::DbError;
use crate::infrastructure::persistence::repositories::{db_int, BATCH_SIZE};

/// Repository for validator operations
#[derive(Clone, Debug)]
pub struct ValidatorRepository {
    conn: DatabaseConnection,
}

impl ValidatorRepository {
    /// Create a new ValidatorRepository
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Find a validator by vote key
    pub async fn find_by_vote_pubkey(
        &self,
        vote_pubkey: &str,
    ) -> Result<Option<validators::Model>, DbError> {
        Ok(validators::Entity::find_by_id(vote_pubkey.to_string())
            .one(&self.conn)
            .await?)
    }

    /// All validators, largest activated stake first
    pub async fn list_by_stake(&self) -> Result<Vec<validators::Model>, DbError> {
        Ok(validators::Entity::find()
            .order_by_desc(validators::Column::ActivatedStake)
            .order_by_asc(validators::Column::VotePubkey)
            .all(&self.conn)
            .await?)
    }

    /// Insert or overwrite validators by vote key.
    ///
    /// Name, website and skip rate are left to the targeted updates.
    pub async fn upsert_many<C: ConnectionTrait>(
        db: &C,
        records: &[ValidatorRecord],
        now: DateTime<Utc>,
    ) -> Result<u64, DbError> {
        let mut written = 0;

        for chunk in records.chunks(BATCH_SIZE) {
            let models: Vec<validators::ActiveModel> = chunk
                .iter()
                .map(|record| validators::ActiveModel {
                    vote_pubkey: Set(record.vote_pubkey.clone()),
                    identity_pubkey: Set(record.identity_pubkey.clone()),
                    commission: Set(record.commission as i32),
                    activated_stake: Set(db_int(record.activated_stake)),
                    last_vote: Set(db_int(record.last_vote)),
                    root_slot: Set(db_int(record.root_slot)),
                    updated_at: Set(now),
                    ..Default::default()
                })
                .collect();

            written += validators::Entity::insert_many(models)
                .on_conflict(
                    OnConflict::column(validators::Column::VotePubkey)
                        .update_columns([
                            validators::Column::IdentityPubkey,
                            validators::Column::Commission,
                            validators::Column::ActivatedStake,
                            validators::Column::LastVote,
                            validators::Column::RootSlot,
                            validators::Column::UpdatedAt,
                        ])
                        .to_owned(),
                )
                .exec_without_returning(db)
                .await?;
        }

        Ok(written)
    }

    /// Set name and website on the validators with a matching identity key
    pub async fn apply_profile_updates<C: ConnectionTrait>(
        db: &C,
        updates: &[ValidatorProfileUpdate],
        now: DateTime<Utc>,
    ) -> Result<u64, DbError> {
        let mut affected = 0;

        for update in updates {
            affected += validators::Entity::update_many()
                .col_expr(validators::Column::Name, Expr::value(update.name.clone()))
                .col_expr(validators::Column::Website, Expr::value(update.website.clone()))
                .col_expr(validators::Column::UpdatedAt, Expr::value(now))
                .filter(validators::Column::IdentityPubkey.eq(update.identity_pubkey.as_str()))
                .exec(db)
                .await?
                .rows_affected;
        }

        Ok(affected)
    }

    /// Set the skip rate on the validators with a matching identity key
    pub async fn apply_skip_rate_updates<C: ConnectionTrait>(
        db: &C,
        updates: &[SkipRateUpdate],
        now: DateTime<Utc>,
    ) -> Result<u64, DbError> {
        let mut affected = 0;

        for update in updates {
            affected += validators::Entity::update_many()
                .col_expr(validators::Column::SkipRate, Expr::value(update.skip_rate))
                .col_expr(validators::Column::UpdatedAt, Expr::value(now))
                .filter(validators::Column::IdentityPubkey.eq(update.identity_pubkey.as_str()))
                .exec(db)
                .await?
                .rows_affected;
        }

        Ok(affected)
    }
}
