use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{lottery_draw_entity as draw_entity, ticket_entity};
use crate::rules::numbers::parse_lenient;

/// 开奖期次
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DrawResponse {
    pub id: i64,
    pub name: String,
    pub prize_pool: i64,
    pub ticket_price: i64,
    pub draw_date: DateTime<Utc>,
    pub is_completed: bool,
    /// 未开奖时为 None
    pub winning_numbers: Option<Vec<i64>>,
    pub created_at: DateTime<Utc>,
}

impl From<draw_entity::Model> for DrawResponse {
    fn from(m: draw_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            prize_pool: m.prize_pool,
            ticket_price: m.ticket_price,
            draw_date: m.draw_date,
            is_completed: m.is_completed,
            winning_numbers: m.winning_numbers.as_deref().map(parse_lenient),
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketResponse {
    pub id: i64,
    pub user_id: i64,
    pub lottery_draw_id: i64,
    pub numbers: Vec<i64>,
    pub is_winning: bool,
    pub purchased_at: DateTime<Utc>,
}

impl From<ticket_entity::Model> for TicketResponse {
    fn from(m: ticket_entity::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            lottery_draw_id: m.lottery_draw_id,
            numbers: m.numbers.as_deref().map(parse_lenient).unwrap_or_default(),
            is_winning: m.is_winning,
            purchased_at: m.purchased_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BuyTicketRequest {
    /// 6 个 1..=36 之间不重复的号码
    #[schema(example = json!([3, 7, 12, 19, 28, 36]))]
    pub numbers: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BuyTicketResponse {
    pub ticket: TicketResponse,
    pub balance: i64,
    pub crystals: i64,
    /// 用于补足余额差额的水晶
    pub crystals_spent: i64,
}
