use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::infrastructure::persistence::entities::epoch_info;
use crate::infrastructure::persistence::error::DbError;
use crate::infrastructure::persistence::repositories::db_int;
use crate::infrastructure::rpc::EpochInfo;

/// Repository for epoch snapshots
#[derive(Clone, Debug)]
pub struct EpochRepository {
    conn: DatabaseConnection,
}

impl EpochRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Highest stored epoch
    pub async fn latest(&self) -> Result<Option<epoch_info::Model>, DbError> {
        Ok(epoch_info::Entity::find()
            .order_by_desc(epoch_info::Column::Epoch)
            .one(&self.conn)
            .await?)
    }

    /// Insert or overwrite the row of `epoch.epoch`
    pub async fn upsert<C: ConnectionTrait>(
        db: &C,
        epoch: &EpochInfo,
        now: DateTime<Utc>,
    ) -> Result<(), DbError> {
        let model = epoch_info::ActiveModel {
            epoch: Set(db_int(epoch.epoch)),
            slot_index: Set(db_int(epoch.slot_index)),
            slots_in_epoch: Set(db_int(epoch.slots_in_epoch)),
            absolute_slot: Set(db_int(epoch.absolute_slot)),
            block_height: Set(db_int(epoch.block_height)),
            transaction_count: Set(db_int(epoch.transaction_count)),
            updated_at: Set(now),
        };

        epoch_info::Entity::insert(model)
            .on_conflict(
                OnConflict::column(epoch_info::Column::Epoch)
                    .update_columns([
                        epoch_info::Column::SlotIndex,
                        epoch_info::Column::SlotsInEpoch,
                        epoch_info::Column::AbsoluteSlot,
                        epoch_info::Column::BlockHeight,
                        epoch_info::Column::TransactionCount,
                        epoch_info::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Ok(())
    }
}
