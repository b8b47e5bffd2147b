use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 彩票
/// numbers 为逗号分隔文本，同一期内不同彩票的号码允许重复
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub lottery_draw_id: i64,
    pub numbers: Option<String>,
    pub is_winning: bool,
    pub purchased_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::lottery_draws::Entity",
        from = "Column::LotteryDrawId",
        to = "super::lottery_draws::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    LotteryDraw,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::lottery_draws::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LotteryDraw.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
