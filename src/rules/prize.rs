//! 开奖结算的奖级规则
//!
//! | 命中 | 奖池比例 | VIP 提升 | 水晶奖励 |
//! |------|----------|----------|----------|
//! | 3    | 10%      | 0        | 0        |
//! | 4    | 20%      | +1       | 0        |
//! | 5    | 30%      | +1       | +50      |
//! | 6    | 40%      | +2       | +50      |

use serde::Serialize;
use utoipa::ToSchema;

/// 最少命中个数
pub const MIN_WINNING_MATCHES: usize = 3;

/// 5 个及以上命中的水晶奖励
pub const BIG_WIN_CRYSTALS: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PrizeTier {
    Three,
    Four,
    Five,
    Six,
}

impl PrizeTier {
    /// 命中个数 -> 奖级；少于 3 个不中奖
    pub fn from_matches(matches: usize) -> Option<Self> {
        match matches {
            3 => Some(PrizeTier::Three),
            4 => Some(PrizeTier::Four),
            5 => Some(PrizeTier::Five),
            6 => Some(PrizeTier::Six),
            _ => None,
        }
    }

    pub fn matches(&self) -> usize {
        match self {
            PrizeTier::Three => 3,
            PrizeTier::Four => 4,
            PrizeTier::Five => 5,
            PrizeTier::Six => 6,
        }
    }

    /// 奖池百分比
    pub fn pool_percent(&self) -> i64 {
        match self {
            PrizeTier::Three => 10,
            PrizeTier::Four => 20,
            PrizeTier::Five => 30,
            PrizeTier::Six => 40,
        }
    }

    /// 奖金（向下取整）
    pub fn payout(&self, prize_pool: i64) -> i64 {
        prize_pool * self.pool_percent() / 100
    }

    pub fn vip_bonus(&self) -> i32 {
        match self {
            PrizeTier::Three => 0,
            PrizeTier::Four | PrizeTier::Five => 1,
            PrizeTier::Six => 2,
        }
    }

    pub fn crystal_bonus(&self) -> i64 {
        match self {
            PrizeTier::Five | PrizeTier::Six => BIG_WIN_CRYSTALS,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_matches() {
        for m in 0..MIN_WINNING_MATCHES {
            assert_eq!(PrizeTier::from_matches(m), None);
        }
        assert_eq!(PrizeTier::from_matches(3), Some(PrizeTier::Three));
        assert_eq!(PrizeTier::from_matches(6), Some(PrizeTier::Six));
        assert_eq!(PrizeTier::from_matches(7), None);
        for m in 3..=6 {
            assert_eq!(PrizeTier::from_matches(m).unwrap().matches(), m);
        }
    }

    #[test]
    fn test_payout_fractions() {
        assert_eq!(PrizeTier::Three.payout(1000), 100);
        assert_eq!(PrizeTier::Four.payout(1000), 200);
        assert_eq!(PrizeTier::Five.payout(1000), 300);
        assert_eq!(PrizeTier::Six.payout(1000), 400);
        // 向下取整
        assert_eq!(PrizeTier::Three.payout(1005), 100);
        assert_eq!(PrizeTier::Six.payout(0), 0);
    }

    #[test]
    fn test_bonuses() {
        assert_eq!(PrizeTier::Three.vip_bonus(), 0);
        assert_eq!(PrizeTier::Four.vip_bonus(), 1);
        assert_eq!(PrizeTier::Five.vip_bonus(), 1);
        assert_eq!(PrizeTier::Six.vip_bonus(), 2);

        assert_eq!(PrizeTier::Four.crystal_bonus(), 0);
        assert_eq!(PrizeTier::Five.crystal_bonus(), 50);
        assert_eq!(PrizeTier::Six.crystal_bonus(), 50);
    }
}
