use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::instant_history_entity;
use crate::rules::InstantGame;

/// 即时开奖玩法
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InstantGameResponse {
    /// 玩法标识，作为 play 接口的路径参数
    pub id: InstantGame,
    pub title: String,
    pub description: String,
    pub price: i64,
    /// 中奖概率 (0..1)
    pub win_chance: f64,
    pub max_win: i64,
}

impl From<InstantGame> for InstantGameResponse {
    fn from(game: InstantGame) -> Self {
        let odds = game.odds();
        Self {
            id: game,
            title: game.title().to_string(),
            description: game.description().to_string(),
            price: odds.price,
            win_chance: odds.win_chance,
            max_win: odds.max_win,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InstantPlayResponse {
    pub lottery_type: InstantGame,
    pub is_win: bool,
    pub winnings: i64,
    pub amount: i64,
    /// 结算后余额
    pub balance: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InstantHistoryResponse {
    pub id: i64,
    pub lottery_type: String,
    pub amount: i64,
    pub is_win: bool,
    pub winnings: i64,
    pub played_at: DateTime<Utc>,
}

impl From<instant_history_entity::Model> for InstantHistoryResponse {
    fn from(m: instant_history_entity::Model) -> Self {
        Self {
            id: m.id,
            lottery_type: m.lottery_type,
            amount: m.amount,
            is_win: m.is_win,
            winnings: m.winnings,
            played_at: m.played_at,
        }
    }
}
