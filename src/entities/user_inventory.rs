use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 用户背包（商城购买所得）
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user_inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    /// 商品目录ID
    pub item_id: i32,
    pub item_name: String,
    /// 商品分类 (tickets / discounts / merch / travel / bonuses / vip)
    pub item_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// None = 永久有效
    pub expires_at: Option<DateTime<Utc>>,
    pub quantity: i32,
    pub acquired_at: DateTime<Utc>,
    pub used: bool,
    pub used_at: Option<DateTime<Utc>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    /// 票券兑换码，如 TICKET-1A2B3C4D
    pub code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

impl ActiveModelBehavior for ActiveModel {}
