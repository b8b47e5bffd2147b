use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::ar_ticket_entity;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArTicketResponse {
    pub id: i64,
    pub is_win: bool,
    pub win_amount: i64,
    pub viewed: bool,
    #[schema(example = "treasure_chest")]
    pub ar_model: String,
    pub created_at: DateTime<Utc>,
}

impl From<ar_ticket_entity::Model> for ArTicketResponse {
    fn from(m: ar_ticket_entity::Model) -> Self {
        Self {
            id: m.id,
            is_win: m.is_win,
            win_amount: m.win_amount,
            viewed: m.viewed,
            ar_model: m.ar_model,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArPurchaseResponse {
    pub ticket: ArTicketResponse,
    /// 结算后余额
    pub balance: i64,
}
