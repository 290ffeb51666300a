//! SeaORM Entity for the validators table

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "validators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vote_pubkey: String,
    pub identity_pubkey: String,
    pub commission: i32,
    pub activated_stake: i64,
    pub last_vote: i64,
    pub root_slot: i64,
    pub name: Option<String>,
    pub website: Option<String>,
    pub skip_rate: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
