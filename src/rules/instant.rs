//! 即时开奖：固定中奖概率 + 区间内均匀随机奖金

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// 一种玩法的赔率配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Odds {
    /// 单次下注金额
    pub price: i64,
    /// 中奖概率 (0..1)
    pub win_chance: f64,
    /// 最低奖金
    pub min_win: i64,
    /// 最高奖金
    pub max_win: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Outcome {
    pub is_win: bool,
    /// 未中奖为 0
    pub winnings: i64,
}

impl Odds {
    /// 先按概率判定是否中奖，中奖后在 [min_win, max_win] 内均匀取奖金
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        let is_win = rng.gen_bool(self.win_chance.clamp(0.0, 1.0));
        let winnings = if is_win {
            rng.gen_range(self.min_win..=self.max_win)
        } else {
            0
        };
        Outcome { is_win, winnings }
    }

    /// 结算后余额（先扣本金再加奖金）
    pub fn settle_balance(&self, balance: i64, outcome: &Outcome) -> i64 {
        balance - self.price + outcome.winnings
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum InstantGame {
    /// 黄金宝箱：三选一
    PirateTreasure,
    /// 神秘预言：五张卡牌
    MysticOracle,
    /// 丛林探险：三条路径
    JungleAdventure,
}

impl InstantGame {
    pub const ALL: [InstantGame; 3] = [
        InstantGame::PirateTreasure,
        InstantGame::MysticOracle,
        InstantGame::JungleAdventure,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            InstantGame::PirateTreasure => "pirate-treasure",
            InstantGame::MysticOracle => "mystic-oracle",
            InstantGame::JungleAdventure => "jungle-adventure",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            InstantGame::PirateTreasure => "Golden Chest",
            InstantGame::MysticOracle => "Mystic Oracle",
            InstantGame::JungleAdventure => "Jungle Adventure",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InstantGame::PirateTreasure => "Pick one of three chests and win up to 500!",
            InstantGame::MysticOracle => "Pick a magic card and win up to 1,000!",
            InstantGame::JungleAdventure => "Choose the right path and win up to 3,000!",
        }
    }

    pub fn odds(&self) -> Odds {
        match self {
            InstantGame::PirateTreasure => Odds {
                price: 50,
                win_chance: 0.30,
                min_win: 50,
                max_win: 500,
            },
            InstantGame::MysticOracle => Odds {
                price: 100,
                win_chance: 0.25,
                min_win: 100,
                max_win: 1000,
            },
            InstantGame::JungleAdventure => Odds {
                price: 200,
                win_chance: 0.20,
                min_win: 200,
                max_win: 3000,
            },
        }
    }
}

impl FromStr for InstantGame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstantGame::ALL
            .into_iter()
            .find(|g| g.slug() == s)
            .ok_or_else(|| format!("Unknown instant lottery type: {s}"))
    }
}

impl std::fmt::Display for InstantGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// AR 彩票：75 一张，25% 中奖，奖金 100..=1000
pub const AR_LOTTERY: Odds = Odds {
    price: 75,
    win_chance: 0.25,
    min_win: 100,
    max_win: 1000,
};

pub const AR_MODEL_WIN: &str = "treasure_chest";
pub const AR_MODEL_LOSE: &str = "empty_chest";
