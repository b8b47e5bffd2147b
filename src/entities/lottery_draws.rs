use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 开奖期次
/// winning_numbers 结算后写入，格式 "3,7,12,19,28,36"
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "lottery_draws")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub prize_pool: i64,
    pub ticket_price: i64,
    pub draw_date: DateTime<Utc>,
    pub is_completed: bool,
    pub winning_numbers: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tickets::Entity")]
    Tickets,
}

impl Related<super::tickets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
