//! SeaORM Entity for the stats table

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub slot: i64,
    pub last_vote: i64,
    pub root_slot: i64,
    pub identity_pubkey: String,
    pub vote_account_pubkey: String,
    pub commission: i32,
    pub skip_rate: f64,
    pub stakers: i64,
    pub stake: i64,
    pub leader_slots: i64,
    pub blocks_produced: i64,
    pub skipped_slots: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
