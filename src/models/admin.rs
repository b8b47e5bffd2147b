use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::rules::PrizeTier;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct AdminStatsResponse {
    pub total_users: i64,
    pub total_tickets: i64,
    /// 所有期次奖池之和
    pub total_prize_pool: i64,
    pub completed_draws: i64,
    pub active_draws: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateDrawRequest {
    #[schema(example = "Weekly Mega Draw")]
    pub name: String,
    #[schema(example = 100000)]
    pub prize_pool: i64,
    /// 默认 100
    #[schema(example = 100)]
    pub ticket_price: Option<i64>,
    pub draw_date: DateTime<Utc>,
}

/// 单张中奖彩票的结算结果
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SettledWinner {
    pub ticket_id: i64,
    pub user_id: i64,
    pub matches: usize,
    pub tier: PrizeTier,
    pub payout: i64,
    pub vip_bonus: i32,
    pub crystal_bonus: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SettlementResponse {
    pub draw_id: i64,
    pub winning_numbers: Vec<i64>,
    /// 参与比对的彩票数（号码为空的不计）
    pub tickets_checked: usize,
    pub winners: Vec<SettledWinner>,
    pub total_paid: i64,
}
