use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::inventory_entity;
use crate::rules::{ItemCategory, RewardItem};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ShopItemQuery {
    pub category: Option<ItemCategory>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShopItemResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// 价格（水晶）
    pub price: i64,
    pub min_vip_level: i32,
    pub category: ItemCategory,
}

impl From<&RewardItem> for ShopItemResponse {
    fn from(item: &RewardItem) -> Self {
        Self {
            id: item.id,
            name: item.name.to_string(),
            description: item.description.to_string(),
            price: item.price,
            min_vip_level: item.min_vip_level,
            category: item.category,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PurchaseRequest {
    #[schema(example = 1)]
    pub item_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InventoryItemResponse {
    pub id: i64,
    pub item_id: i32,
    pub item_name: String,
    pub item_type: String,
    pub description: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub quantity: i32,
    pub acquired_at: DateTime<Utc>,
    pub used: bool,
    pub used_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub code: Option<String>,
}

impl From<inventory_entity::Model> for InventoryItemResponse {
    fn from(m: inventory_entity::Model) -> Self {
        Self {
            id: m.id,
            item_id: m.item_id,
            item_name: m.item_name,
            item_type: m.item_type,
            description: m.description,
            expires_at: m.expires_at,
            quantity: m.quantity,
            acquired_at: m.acquired_at,
            used: m.used,
            used_at: m.used_at,
            notes: m.notes,
            code: m.code,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PurchaseResponse {
    pub item: InventoryItemResponse,
    pub crystals: i64,
    pub balance: i64,
    pub vip_level: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct InventoryQuery {
    /// 按分类过滤
    pub item_type: Option<ItemCategory>,
}
