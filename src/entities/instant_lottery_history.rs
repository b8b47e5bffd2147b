use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 即时开奖记录，每次游玩一条
/// - lottery_type 玩法标识 (pirate-treasure / mystic-oracle / jungle-adventure)
/// - amount 下注金额
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "instant_lottery_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub lottery_type: String,
    pub amount: i64,
    pub is_win: bool,
    pub winnings: i64,
    pub played_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
