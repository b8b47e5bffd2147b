use crate::entities::{inventory_entity as inventory, reward_purchase_entity as purchases};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::rules::catalog;
use crate::rules::{ItemCategory, RewardEffect, RewardItem, vip};
use crate::services::user_service::load_user;
use crate::utils::generate_ticket_code;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ShopService {
    pool: Arc<DatabaseConnection>,
}

impl ShopService {
    pub fn new(pool: Arc<DatabaseConnection>) -> Self {
        Self { pool }
    }

    pub fn list_items(&self, category: Option<ItemCategory>) -> Vec<ShopItemResponse> {
        catalog::by_category(category)
            .into_iter()
            .map(ShopItemResponse::from)
            .collect()
    }

    /// 购买商品
    ///
    /// 1. 商品存在；水晶足够；VIP 等级达标
    /// 2. 扣水晶，立即生效类商品同时加余额 / 提升 VIP
    /// 3. 写购买流水与背包记录
    pub async fn purchase(&self, user_id: i64, request: PurchaseRequest) -> AppResult<PurchaseResponse> {
        let item = catalog::find(request.item_id)
            .ok_or_else(|| AppError::NotFound("Shop item not found".to_string()))?;

        let txn = self.pool.begin().await?;

        let user = load_user(&txn, user_id).await?;
        if user.crystals < item.price {
            return Err(AppError::InsufficientFunds(format!(
                "{} costs {} crystals, you have {}",
                item.name, item.price, user.crystals
            )));
        }
        if user.vip_level < item.min_vip_level {
            return Err(AppError::Forbidden(format!(
                "{} requires VIP level {}",
                item.name, item.min_vip_level
            )));
        }

        let (balance, vip_level) = apply_effect(item, user.balance, user.vip_level);
        let crystals = user.crystals - item.price;
        let now = Utc::now();

        let mut am = user.into_active_model();
        am.crystals = Set(crystals);
        am.balance = Set(balance);
        am.vip_level = Set(vip_level);
        am.updated_at = Set(now);
        am.update(&txn).await?;

        purchases::ActiveModel {
            user_id: Set(user_id),
            reward_id: Set(item.id),
            reward_name: Set(item.name.to_string()),
            price: Set(item.price),
            purchased_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let instant = item.is_instant();
        let code = (item.category == ItemCategory::Tickets).then(generate_ticket_code);
        let stored = inventory::ActiveModel {
            user_id: Set(user_id),
            item_id: Set(item.id),
            item_name: Set(item.name.to_string()),
            item_type: Set(item.category.as_str().to_string()),
            description: Set(Some(item.description.to_string())),
            expires_at: Set(item.category.expires_at(now)),
            quantity: Set(1),
            acquired_at: Set(now),
            used: Set(instant),
            used_at: Set(instant.then_some(now)),
            notes: Set(instant.then(|| "Applied on purchase".to_string())),
            code: Set(code),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        log::info!(
            "User {user_id} purchased shop item {} for {} crystals",
            item.id,
            item.price
        );

        Ok(PurchaseResponse {
            item: stored.into(),
            crystals,
            balance,
            vip_level,
        })
    }

    /// 背包：未使用且未过期，最新在前
    pub async fn list_inventory(
        &self,
        user_id: i64,
        item_type: Option<ItemCategory>,
    ) -> AppResult<Vec<InventoryItemResponse>> {
        let mut query = inventory::Entity::find()
            .filter(inventory::Column::UserId.eq(user_id))
            .filter(inventory::Column::Used.eq(false))
            .filter(
                Condition::any()
                    .add(inventory::Column::ExpiresAt.is_null())
                    .add(inventory::Column::ExpiresAt.gt(Utc::now())),
            );
        if let Some(category) = item_type {
            query = query.filter(inventory::Column::ItemType.eq(category.as_str()));
        }

        let list = query
            .order_by_desc(inventory::Column::AcquiredAt)
            .all(&*self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 使用背包物品
    pub async fn use_item(&self, user_id: i64, inventory_id: i64) -> AppResult<InventoryItemResponse> {
        let item = inventory::Entity::find_by_id(inventory_id)
            .filter(inventory::Column::UserId.eq(user_id))
            .one(&*self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Inventory item not found".to_string()))?;

        let now = Utc::now();
        if item.used {
            return Err(AppError::Conflict("Item has already been used".to_string()));
        }
        if item.is_expired(now) {
            return Err(AppError::ValidationError("Item has expired".to_string()));
        }

        let mut am = item.into_active_model();
        am.used = Set(true);
        am.used_at = Set(Some(now));
        let updated = am.update(&*self.pool).await?;

        log::info!("User {user_id} used inventory item {inventory_id}");
        Ok(updated.into())
    }
}

/// 立即生效类商品的效果，返回 (余额, VIP 等级)
fn apply_effect(item: &RewardItem, balance: i64, vip_level: i32) -> (i64, i32) {
    match item.effect {
        RewardEffect::None => (balance, vip_level),
        RewardEffect::BalanceBonus(amount) => (balance + amount, vip_level),
        RewardEffect::VipLevelUp => (balance, vip::raise(vip_level, 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{IntoPool, transaction_log, updates_of, user};
    use chrono::{DateTime, Duration};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn stored_item(id: i64, used: bool, expires_at: Option<DateTime<Utc>>) -> inventory::Model {
        inventory::Model {
            id,
            user_id: 1,
            item_id: 1,
            item_name: "Free lottery ticket".to_string(),
            item_type: "tickets".to_string(),
            description: None,
            expires_at,
            quantity: 1,
            acquired_at: Utc::now(),
            used,
            used_at: None,
            notes: None,
            code: Some("TICKET-ABCDEF12".to_string()),
        }
    }

    fn purchase_row(item: &RewardItem) -> purchases::Model {
        purchases::Model {
            id: 1,
            user_id: 1,
            reward_id: item.id,
            reward_name: item.name.to_string(),
            price: item.price,
            purchased_at: Utc::now(),
        }
    }

    #[test]
    fn test_apply_effect() {
        let bonus = catalog::find(13).unwrap();
        assert_eq!(apply_effect(bonus, 100, 3), (600, 3));
        let vip_up = catalog::find(15).unwrap();
        assert_eq!(apply_effect(vip_up, 100, 10), (100, 10));
        assert_eq!(apply_effect(vip_up, 100, 5), (100, 6));
        let mug = catalog::find(7).unwrap();
        assert_eq!(apply_effect(mug, 100, 5), (100, 5));
    }

    #[test]
    fn test_list_items_by_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_pool();
        let service = ShopService::new(db);
        assert_eq!(service.list_items(None).len(), 15);
        assert_eq!(service.list_items(Some(ItemCategory::Merch)).len(), 3);
    }

    #[tokio::test]
    async fn test_purchase_unknown_item() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_pool();
        let err = ShopService::new(db)
            .purchase(1, PurchaseRequest { item_id: 99 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_purchase_insufficient_crystals() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(1, 0, 99, 10)]])
            .into_pool();
        let err = ShopService::new(db)
            .purchase(1, PurchaseRequest { item_id: 1 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InsufficientFunds(_)));
    }

    #[tokio::test]
    async fn test_purchase_vip_gate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(1, 0, 10_000, 2)]])
            .into_pool();
        let err = ShopService::new(db)
            .purchase(1, PurchaseRequest { item_id: 14 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_purchase_balance_bonus() {
        let item = catalog::find(13).unwrap();
        let mut applied = stored_item(5, true, None);
        applied.item_id = 13;
        applied.item_type = "bonuses".to_string();
        applied.code = None;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(1, 100, 800, 3)]])
            .append_query_results([vec![user(1, 600, 50, 3)]])
            .append_query_results([vec![purchase_row(item)]])
            .append_query_results([vec![applied]])
            .into_pool();
        let service = ShopService::new(db.clone());
        let resp = service
            .purchase(1, PurchaseRequest { item_id: 13 })
            .await
            .unwrap();
        assert_eq!(resp.crystals, 50);
        assert_eq!(resp.balance, 600);
        assert_eq!(resp.vip_level, 3);
        assert!(resp.item.used);

        drop(service);
        // 800 - 750 水晶，余额 100 + 500
        let user_updates = updates_of(&transaction_log(db), "users");
        assert_eq!(user_updates.len(), 1);
        assert!(user_updates[0].contains("BigInt(Some(600))"));
        assert!(user_updates[0].contains("BigInt(Some(50))"));
    }

    #[tokio::test]
    async fn test_use_item_twice_conflicts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_item(5, true, None)]])
            .into_pool();
        let err = ShopService::new(db).use_item(1, 5).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_use_expired_item() {
        let expired = stored_item(5, false, Some(Utc::now() - Duration::days(1)));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![expired]])
            .into_pool();
        let err = ShopService::new(db).use_item(1, 5).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_use_foreign_item_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<inventory::Model>::new()])
            .into_pool();
        let err = ShopService::new(db).use_item(2, 5).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
