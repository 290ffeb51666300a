//! SeaORM Entity for the stakers table

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stakers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub stake_pubkey: String,
    pub stake_type: String,
    pub account_balance: i64,
    pub credits_observed: Option<i64>,
    pub delegated_stake: Option<i64>,
    pub delegated_vote_account_address: Option<String>,
    pub activation_epoch: Option<i64>,
    pub deactivation_epoch: Option<i64>,
    pub staker: Option<String>,
    pub withdrawer: Option<String>,
    pub rent_exempt_reserve: Option<i64>,
    pub active_stake: i64,
    pub activating_stake: Option<i64>,
    pub deactivating_stake: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
