use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// VIP 商城购买流水
/// reward_name 冗余存储，商品目录调整后仍可回溯
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "reward_purchases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub reward_id: i32,
    pub reward_name: String,
    /// 花费水晶
    pub price: i64,
    pub purchased_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
