use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::models::{StakeAccount, StatsRow};
use crate::infrastructure::persistence::entities::{stakers, stats};
use crate::infrastructure::persistence::error::DbError;
use crate::infrastructure::persistence::repositories::{db_epoch, db_int, BATCH_SIZE};

/// Repository for the replace-all snapshot tables `stats` and `stakers`
#[derive(Clone, Debug)]
pub struct SnapshotRepository {
    conn: DatabaseConnection,
}

impl SnapshotRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Current stake accounts delegated to one vote account, largest first
    pub async fn stakers_for_vote_account(
        &self,
        vote_pubkey: &str,
    ) -> Result<Vec<stakers::Model>, DbError> {
        Ok(stakers::Entity::find()
            .filter(stakers::Column::DelegatedVoteAccountAddress.eq(vote_pubkey))
            .order_by_desc(stakers::Column::ActiveStake)
            .all(&self.conn)
            .await?)
    }

    /// Empty `stats`, restarting its id sequence, then load `rows`
    pub async fn replace_stats<C: ConnectionTrait>(
        db: &C,
        rows: &[StatsRow],
        now: DateTime<Utc>,
    ) -> Result<u64, DbError> {
        match db.get_database_backend() {
            DbBackend::Postgres => {
                db.execute_unprepared("TRUNCATE TABLE stats RESTART IDENTITY")
                    .await?;
            }
            DbBackend::Sqlite => {
                stats::Entity::delete_many().exec(db).await?;
                db.execute_unprepared("DELETE FROM sqlite_sequence WHERE name = 'stats'")
                    .await?;
            }
            DbBackend::MySql => {
                db.execute_unprepared("TRUNCATE TABLE stats").await?;
            }
        }

        let mut written = 0;
        for chunk in rows.chunks(BATCH_SIZE) {
            let models: Vec<stats::ActiveModel> = chunk
                .iter()
                .map(|row| stats::ActiveModel {
                    slot: Set(db_int(row.slot)),
                    last_vote: Set(db_int(row.last_vote)),
                    root_slot: Set(db_int(row.root_slot)),
                    identity_pubkey: Set(row.identity_pubkey.clone()),
                    vote_account_pubkey: Set(row.vote_account_pubkey.clone()),
                    commission: Set(row.commission as i32),
                    skip_rate: Set(row.skip_rate),
                    stakers: Set(db_int(row.stakers)),
                    stake: Set(db_int(row.stake)),
                    leader_slots: Set(db_int(row.leader_slots)),
                    blocks_produced: Set(db_int(row.blocks_produced)),
                    skipped_slots: Set(db_int(row.skipped_slots)),
                    created_at: Set(now),
                    ..Default::default()
                })
                .collect();

            written += stats::Entity::insert_many(models)
                .exec_without_returning(db)
                .await?;
        }

        Ok(written)
    }

    /// Empty `stakers`, then load `accounts`
    pub async fn replace_stakers<C: ConnectionTrait>(
        db: &C,
        accounts: &[StakeAccount],
        now: DateTime<Utc>,
    ) -> Result<u64, DbError> {
        match db.get_database_backend() {
            DbBackend::Postgres | DbBackend::MySql => {
                db.execute_unprepared("TRUNCATE TABLE stakers").await?;
            }
            DbBackend::Sqlite => {
                stakers::Entity::delete_many().exec(db).await?;
            }
        }

        let mut written = 0;
        for chunk in accounts.chunks(BATCH_SIZE) {
            let models: Vec<stakers::ActiveModel> = chunk
                .iter()
                .map(|account| stakers::ActiveModel {
                    stake_pubkey: Set(account.stake_pubkey.clone()),
                    stake_type: Set(account.stake_type.clone()),
                    account_balance: Set(db_int(account.account_balance)),
                    credits_observed: Set(account.credits_observed.map(db_int)),
                    delegated_stake: Set(account.delegated_stake.map(db_int)),
                    delegated_vote_account_address: Set(
                        account.delegated_vote_account_address.clone(),
                    ),
                    activation_epoch: Set(db_epoch(account.activation_epoch)),
                    deactivation_epoch: Set(db_epoch(account.deactivation_epoch)),
                    staker: Set(account.staker.clone()),
                    withdrawer: Set(account.withdrawer.clone()),
                    rent_exempt_reserve: Set(account.rent_exempt_reserve.map(db_int)),
                    active_stake: Set(db_int(account.active_stake)),
                    activating_stake: Set(account.activating_stake.map(db_int)),
                    deactivating_stake: Set(account.deactivating_stake.map(db_int)),
                    created_at: Set(now),
                })
                .collect();

            written += stakers::Entity::insert_many(models)
                .exec_without_returning(db)
                .await?;
        }

        Ok(written)
    }
}
