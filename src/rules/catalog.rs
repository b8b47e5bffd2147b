//! VIP 商城商品目录（价格单位：水晶）

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// 折扣 / 票券类商品的有效期
pub const EXPIRING_ITEM_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Tickets,
    Discounts,
    Merch,
    Travel,
    Bonuses,
    Vip,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Tickets => "tickets",
            ItemCategory::Discounts => "discounts",
            ItemCategory::Merch => "merch",
            ItemCategory::Travel => "travel",
            ItemCategory::Bonuses => "bonuses",
            ItemCategory::Vip => "vip",
        }
    }

    /// 票券与折扣 30 天后过期，其它永久
    pub fn expires_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            ItemCategory::Tickets | ItemCategory::Discounts => {
                Some(now + Duration::days(EXPIRING_ITEM_DAYS))
            }
            _ => None,
        }
    }
}

impl FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tickets" => Ok(ItemCategory::Tickets),
            "discounts" => Ok(ItemCategory::Discounts),
            "merch" => Ok(ItemCategory::Merch),
            "travel" => Ok(ItemCategory::Travel),
            "bonuses" => Ok(ItemCategory::Bonuses),
            "vip" => Ok(ItemCategory::Vip),
            other => Err(format!("Unknown item category: {other}")),
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 购买后立即生效的效果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardEffect {
    None,
    BalanceBonus(i64),
    VipLevelUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardItem {
    pub id: i32,
    pub name: &'static str,
    pub description: &'static str,
    pub price: i64,
    pub min_vip_level: i32,
    pub category: ItemCategory,
    pub effect: RewardEffect,
}

impl RewardItem {
    /// 立即生效类商品购买时即视为已使用
    pub fn is_instant(&self) -> bool {
        !matches!(self.effect, RewardEffect::None)
    }
}

const fn item(
    id: i32,
    name: &'static str,
    description: &'static str,
    price: i64,
    min_vip_level: i32,
    category: ItemCategory,
    effect: RewardEffect,
) -> RewardItem {
    RewardItem {
        id,
        name,
        description,
        price,
        min_vip_level,
        category,
        effect,
    }
}

#[rustfmt::skip]
pub const CATALOG: [RewardItem; 15] = [
    item(1, "Free lottery ticket", "One free ticket for any lottery.", 100, 1, ItemCategory::Tickets, RewardEffect::None),
    item(2, "Premium lottery ticket", "A ticket with improved winning chances.", 300, 2, ItemCategory::Tickets, RewardEffect::None),
    item(3, "5 free tickets", "A bundle of five free tickets for any lottery.", 450, 3, ItemCategory::Tickets, RewardEffect::None),
    item(4, "5% off all lotteries", "5% discount on all lottery tickets for a week.", 200, 1, ItemCategory::Discounts, RewardEffect::None),
    item(5, "10% off all lotteries", "10% discount on all lottery tickets for a week.", 500, 3, ItemCategory::Discounts, RewardEffect::None),
    item(6, "15% off all lotteries", "15% discount on all lottery tickets for a week.", 1000, 5, ItemCategory::Discounts, RewardEffect::None),
    item(7, "Branded mug", "A stylish mug with the FutureWin logo.", 500, 2, ItemCategory::Merch, RewardEffect::None),
    item(8, "FutureWin T-shirt", "An exclusive T-shirt with the service logo.", 1000, 4, ItemCategory::Merch, RewardEffect::None),
    item(9, "Logo hoodie", "A premium hoodie with an embroidered FutureWin logo.", 2000, 6, ItemCategory::Merch, RewardEffect::None),
    item(10, "10% off a trip", "A partner travel discount certificate.", 5000, 7, ItemCategory::Travel, RewardEffect::None),
    item(11, "15% off a trip", "An upgraded travel discount certificate.", 7500, 8, ItemCategory::Travel, RewardEffect::None),
    item(12, "25% off a trip", "The top travel discount certificate.", 10000, 10, ItemCategory::Travel, RewardEffect::None),
    item(13, "Balance bonus +500", "Instantly adds 500 to your balance.", 750, 3, ItemCategory::Bonuses, RewardEffect::BalanceBonus(500)),
    item(14, "Balance bonus +1000", "Instantly adds 1000 to your balance.", 1400, 5, ItemCategory::Bonuses, RewardEffect::BalanceBonus(1000)),
    item(15, "VIP status +1 level", "Instantly raises your VIP level by one.", 5000, 5, ItemCategory::Vip, RewardEffect::VipLevelUp),
];

pub fn find(id: i32) -> Option<&'static RewardItem> {
    CATALOG.iter().find(|i| i.id == id)
}

pub fn by_category(category: Option<ItemCategory>) -> Vec<&'static RewardItem> {
    CATALOG
        .iter()
        .filter(|i| category.is_none_or(|c| i.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique_and_findable() {
        for (idx, it) in CATALOG.iter().enumerate() {
            assert_eq!(it.id, idx as i32 + 1);
            assert_eq!(find(it.id).map(|f| f.name), Some(it.name));
        }
        assert!(find(0).is_none());
        assert!(find(16).is_none());
    }

    #[test]
    fn test_filter_by_category() {
        assert_eq!(by_category(None).len(), 15);
        assert_eq!(by_category(Some(ItemCategory::Tickets)).len(), 3);
        assert_eq!(by_category(Some(ItemCategory::Vip)).len(), 1);
    }

    #[test]
    fn test_instant_effect_items() {
        assert_eq!(find(13).unwrap().effect, RewardEffect::BalanceBonus(500));
        assert_eq!(find(14).unwrap().effect, RewardEffect::BalanceBonus(1000));
        assert_eq!(find(15).unwrap().effect, RewardEffect::VipLevelUp);
        assert!(!find(1).unwrap().is_instant());
    }

    #[test]
    fn test_expiry_by_category() {
        let now = Utc::now();
        assert_eq!(
            ItemCategory::Tickets.expires_at(now),
            Some(now + Duration::days(30))
        );
        assert!(ItemCategory::Discounts.expires_at(now).is_some());
        assert!(ItemCategory::Merch.expires_at(now).is_none());
        assert_eq!("travel".parse::<ItemCategory>(), Ok(ItemCategory::Travel));
    }
}
