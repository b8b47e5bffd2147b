use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::user_entity;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "player@example.com")]
    pub email: String,
    #[schema(example = "lucky_player")]
    pub username: String,
    #[schema(example = "Password123")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "player@example.com")]
    pub email: String,
    #[schema(example = "Password123")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "lucky_player")]
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub balance: i64,
    pub crystals: i64,
    pub vip_level: i32,
    pub created_at: DateTime<Utc>,
}

impl From<user_entity::Model> for UserResponse {
    fn from(m: user_entity::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            username: m.username,
            balance: m.balance,
            crystals: m.crystals,
            vip_level: m.vip_level,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserStatistics {
    /// 购买彩票数
    pub tickets_bought: i64,
    /// 中奖彩票数
    pub winning_tickets: i64,
    /// 即时开奖次数
    pub instant_plays: i64,
    /// 即时开奖累计奖金
    pub instant_winnings: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub statistics: UserStatistics,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepositRequest {
    #[schema(example = 500)]
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepositResponse {
    pub amount: i64,
    /// 充值赠送的水晶
    pub bonus_crystals: i64,
    pub balance: i64,
    pub crystals: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VipBenefit {
    pub level: i32,
    pub description: String,
}

impl From<(i32, &'static str)> for VipBenefit {
    fn from((level, description): (i32, &'static str)) -> Self {
        Self {
            level,
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VipStatusResponse {
    pub level: i32,
    pub max_level: i32,
    /// 满级时为 None
    pub next_level: Option<i32>,
    pub crystals: i64,
    /// 升到下一级所需水晶（满级时为 None）
    pub crystals_required: Option<i64>,
    pub current_benefits: Vec<VipBenefit>,
    pub next_benefits: Vec<VipBenefit>,
}
