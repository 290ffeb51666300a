//! SeaORM Entity for the validator_performance table

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "validator_performance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vote_pubkey: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub epoch: i64,
    pub credits: i64,
    pub credits_start: i64,
    pub credits_end: i64,
    pub skip_rate: f64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
