use crate::entities::{
    instant_history_entity as history, ticket_entity as tickets, user_entity as users,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::rules::{vip, wallet};
use crate::utils::validate_username;
use chrono::Utc;
use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;

/// 读取用户，不存在返回 NotFound（事务内外通用）
pub(crate) async fn load_user<C: ConnectionTrait>(db: &C, user_id: i64) -> AppResult<users::Model> {
    users::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

#[derive(Clone)]
pub struct UserService {
    pool: Arc<DatabaseConnection>,
}

impl UserService {
    pub fn new(pool: Arc<DatabaseConnection>) -> Self {
        Self { pool }
    }

    /// 获取用户个人资料和统计信息
    pub async fn get_profile(&self, user_id: i64) -> AppResult<ProfileResponse> {
        let user = load_user(&*self.pool, user_id).await?;
        let statistics = self.get_user_statistics(user_id).await?;

        Ok(ProfileResponse {
            user: user.into(),
            statistics,
        })
    }

    /// 修改用户名
    pub async fn update_profile(
        &self,
        user_id: i64,
        request: UpdateProfileRequest,
    ) -> AppResult<UserResponse> {
        validate_username(&request.username)?;

        let mut model = load_user(&*self.pool, user_id).await?.into_active_model();
        model.username = Set(request.username.trim().to_string());
        model.updated_at = Set(Utc::now());
        let updated = model.update(&*self.pool).await?;

        Ok(updated.into())
    }

    /// 充值：余额增加，按金额赠送水晶
    pub async fn deposit(&self, user_id: i64, request: DepositRequest) -> AppResult<DepositResponse> {
        if request.amount <= 0 {
            return Err(AppError::ValidationError(
                "Deposit amount must be positive".to_string(),
            ));
        }
        let bonus_crystals = wallet::deposit_bonus_crystals(request.amount);

        let txn = self.pool.begin().await?;
        let user = load_user(&txn, user_id).await?;
        let balance = user.balance + request.amount;
        let crystals = user.crystals + bonus_crystals;

        let mut am = user.into_active_model();
        am.balance = Set(balance);
        am.crystals = Set(crystals);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;
        txn.commit().await?;

        log::info!(
            "User {user_id} deposited {}, bonus crystals {bonus_crystals}",
            request.amount
        );

        Ok(DepositResponse {
            amount: request.amount,
            bonus_crystals,
            balance,
            crystals,
        })
    }

    /// VIP 状态与权益
    pub async fn vip_status(&self, user_id: i64) -> AppResult<VipStatusResponse> {
        let user = load_user(&*self.pool, user_id).await?;
        Ok(build_vip_status(user.vip_level, user.crystals))
    }

    /// 获取用户统计信息
    async fn get_user_statistics(&self, user_id: i64) -> AppResult<UserStatistics> {
        #[derive(Debug, sea_orm::FromQueryResult)]
        struct TicketStatsRow {
            total: i64,
            winning: Option<i64>,
        }
        let ticket_stats = tickets::Entity::find()
            .filter(tickets::Column::UserId.eq(user_id))
            .select_only()
            .column_as(Expr::val(1).count(), "total")
            .column_as(
                Expr::cust("CAST(SUM(CASE WHEN is_winning THEN 1 ELSE 0 END) AS BIGINT)"),
                "winning",
            )
            .into_model::<TicketStatsRow>()
            .one(&*self.pool)
            .await?;

        #[derive(Debug, sea_orm::FromQueryResult)]
        struct InstantStatsRow {
            plays: i64,
            winnings: Option<i64>,
        }
        let instant_stats = history::Entity::find()
            .filter(history::Column::UserId.eq(user_id))
            .select_only()
            .column_as(Expr::val(1).count(), "plays")
            .column_as(
                SimpleExpr::from(Func::cast_as(
                    Func::sum(Expr::col(history::Column::Winnings)),
                    Alias::new("BIGINT"),
                )),
                "winnings",
            )
            .into_model::<InstantStatsRow>()
            .one(&*self.pool)
            .await?;

        Ok(UserStatistics {
            tickets_bought: ticket_stats.as_ref().map(|r| r.total).unwrap_or(0),
            winning_tickets: ticket_stats.and_then(|r| r.winning).unwrap_or(0),
            instant_plays: instant_stats.as_ref().map(|r| r.plays).unwrap_or(0),
            instant_winnings: instant_stats.and_then(|r| r.winnings).unwrap_or(0),
        })
    }
}

fn build_vip_status(level: i32, crystals: i64) -> VipStatusResponse {
    let at_max = level >= vip::MAX_VIP_LEVEL;
    VipStatusResponse {
        level,
        max_level: vip::MAX_VIP_LEVEL,
        next_level: (!at_max).then(|| vip::next_level(level)),
        crystals,
        crystals_required: (!at_max).then(|| vip::crystals_required_for_next(level)),
        current_benefits: vip::benefits_up_to(level)
            .into_iter()
            .map(VipBenefit::from)
            .collect(),
        next_benefits: vip::benefits_at_next(level)
            .into_iter()
            .map(VipBenefit::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{IntoPool, transaction_log, updates_of, user};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn test_vip_status_mid_level() {
        let status = build_vip_status(3, 250);
        assert_eq!(status.next_level, Some(4));
        assert_eq!(status.crystals_required, Some(400));
        assert_eq!(status.current_benefits.len(), 3);
        assert_eq!(status.next_benefits.len(), 1);
        assert_eq!(status.next_benefits[0].level, 4);
    }

    #[test]
    fn test_vip_status_max_level() {
        let status = build_vip_status(10, 0);
        assert_eq!(status.next_level, None);
        assert_eq!(status.crystals_required, None);
        assert_eq!(status.current_benefits.len(), 10);
        assert!(status.next_benefits.is_empty());
    }

    #[tokio::test]
    async fn test_deposit_rejects_non_positive_amount() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_pool();
        let service = UserService::new(db);
        let err = service
            .deposit(1, DepositRequest { amount: 0 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_deposit_credits_balance_and_bonus() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(1, 40, 5, 0)]])
            .append_query_results([vec![user(1, 290, 25, 0)]])
            .into_pool();
        let service = UserService::new(db.clone());

        let resp = service
            .deposit(1, DepositRequest { amount: 250 })
            .await
            .unwrap();
        assert_eq!(resp.bonus_crystals, 20);
        assert_eq!(resp.balance, 290);
        assert_eq!(resp.crystals, 25);

        drop(service);
        let user_updates = updates_of(&transaction_log(db), "users");
        assert_eq!(user_updates.len(), 1);
        assert!(user_updates[0].contains("BigInt(Some(290))"));
        assert!(user_updates[0].contains("BigInt(Some(25))"));
    }

    #[tokio::test]
    async fn test_vip_status_unknown_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_pool();
        let service = UserService::new(db);
        let err = service.vip_status(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
