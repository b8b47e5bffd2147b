use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// AR 彩票，开奖结果在创建时确定
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "ar_lottery_tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub is_win: bool,
    pub win_amount: i64,
    pub viewed: bool,
    /// treasure_chest / empty_chest
    pub ar_model: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
