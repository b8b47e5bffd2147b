use crate::config::GameConfig;
use crate::entities::{lottery_draw_entity as draws, ticket_entity as tickets, user_entity as users};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::LotteryService;
use crate::services::user_service::load_user;
use chrono::Utc;
use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;

/// 后台列表的条数上限
const RECENT_LIMIT: u64 = 20;

const DEFAULT_TICKET_PRICE: i64 = 100;

/// 管理接口，所有方法先校验调用者 VIP 等级
#[derive(Clone)]
pub struct AdminService {
    pool: Arc<DatabaseConnection>,
    lottery_service: LotteryService,
    min_vip_level: i32,
}

impl AdminService {
    pub fn new(pool: Arc<DatabaseConnection>, lottery_service: LotteryService, game: &GameConfig) -> Self {
        Self {
            pool,
            lottery_service,
            min_vip_level: game.admin_min_vip_level,
        }
    }

    async fn ensure_admin(&self, user_id: i64) -> AppResult<()> {
        let user = load_user(&*self.pool, user_id).await?;
        if user.vip_level < self.min_vip_level {
            log::warn!(
                "User {user_id} (VIP {}) tried to access the admin panel",
                user.vip_level
            );
            return Err(AppError::Forbidden(format!(
                "Admin panel requires VIP level {}",
                self.min_vip_level
            )));
        }
        Ok(())
    }

    pub async fn stats(&self, user_id: i64) -> AppResult<AdminStatsResponse> {
        self.ensure_admin(user_id).await?;

        let total_users = users::Entity::find().count(&*self.pool).await? as i64;
        let total_tickets = tickets::Entity::find().count(&*self.pool).await? as i64;
        let completed_draws = draws::Entity::find()
            .filter(draws::Column::IsCompleted.eq(true))
            .count(&*self.pool)
            .await? as i64;
        let active_draws = draws::Entity::find()
            .filter(draws::Column::IsCompleted.eq(false))
            .count(&*self.pool)
            .await? as i64;

        #[derive(Debug, sea_orm::FromQueryResult)]
        struct PoolRow {
            total: Option<i64>,
        }
        let total_prize_pool = draws::Entity::find()
            .select_only()
            .column_as(
                SimpleExpr::from(Func::cast_as(
                    Func::sum(Expr::col(draws::Column::PrizePool)),
                    Alias::new("BIGINT"),
                )),
                "total",
            )
            .into_model::<PoolRow>()
            .one(&*self.pool)
            .await?
            .and_then(|r| r.total)
            .unwrap_or(0);

        Ok(AdminStatsResponse {
            total_users,
            total_tickets,
            total_prize_pool,
            completed_draws,
            active_draws,
        })
    }

    /// 所有期次，开奖时间倒序
    pub async fn list_draws(&self, user_id: i64) -> AppResult<Vec<DrawResponse>> {
        self.ensure_admin(user_id).await?;
        let list = draws::Entity::find()
            .order_by_desc(draws::Column::DrawDate)
            .all(&*self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn create_draw(&self, user_id: i64, request: CreateDrawRequest) -> AppResult<DrawResponse> {
        let ticket_price = validate_new_draw(&request)?;
        self.ensure_admin(user_id).await?;

        let draw = draws::ActiveModel {
            name: Set(request.name.trim().to_string()),
            prize_pool: Set(request.prize_pool),
            ticket_price: Set(ticket_price),
            draw_date: Set(request.draw_date),
            is_completed: Set(false),
            winning_numbers: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&*self.pool)
        .await?;

        log::info!("User {user_id} created lottery draw {} ({})", draw.id, draw.name);
        Ok(draw.into())
    }

    pub async fn settle_draw(&self, user_id: i64, draw_id: i64) -> AppResult<SettlementResponse> {
        self.ensure_admin(user_id).await?;
        log::info!("User {user_id} is settling draw {draw_id}");
        self.lottery_service.settle_draw(draw_id).await
    }

    pub async fn recent_users(&self, user_id: i64) -> AppResult<Vec<UserResponse>> {
        self.ensure_admin(user_id).await?;
        let list = users::Entity::find()
            .order_by_desc(users::Column::CreatedAt)
            .limit(RECENT_LIMIT)
            .all(&*self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn recent_tickets(&self, user_id: i64) -> AppResult<Vec<TicketResponse>> {
        self.ensure_admin(user_id).await?;
        let list = tickets::Entity::find()
            .order_by_desc(tickets::Column::PurchasedAt)
            .limit(RECENT_LIMIT)
            .all(&*self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}

/// 校验新期次参数，返回最终票价
fn validate_new_draw(request: &CreateDrawRequest) -> AppResult<i64> {
    if request.name.trim().is_empty() {
        return Err(AppError::ValidationError("Draw name is required".to_string()));
    }
    if request.prize_pool <= 0 {
        return Err(AppError::ValidationError(
            "Prize pool must be positive".to_string(),
        ));
    }
    let ticket_price = request.ticket_price.unwrap_or(DEFAULT_TICKET_PRICE);
    if ticket_price <= 0 {
        return Err(AppError::ValidationError(
            "Ticket price must be positive".to_string(),
        ));
    }
    Ok(ticket_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{IntoPool, user};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn service(db: Arc<DatabaseConnection>) -> AdminService {
        AdminService::new(db.clone(), LotteryService::new(db), &GameConfig::default())
    }

    fn request(name: &str, prize_pool: i64, ticket_price: Option<i64>) -> CreateDrawRequest {
        CreateDrawRequest {
            name: name.to_string(),
            prize_pool,
            ticket_price,
            draw_date: Utc::now(),
        }
    }

    #[test]
    fn test_validate_new_draw() {
        assert_eq!(validate_new_draw(&request("Weekly", 1000, None)).unwrap(), 100);
        assert_eq!(validate_new_draw(&request("Weekly", 1000, Some(50))).unwrap(), 50);
        assert!(validate_new_draw(&request("  ", 1000, None)).is_err());
        assert!(validate_new_draw(&request("Weekly", 0, None)).is_err());
        assert!(validate_new_draw(&request("Weekly", 1000, Some(0))).is_err());
    }

    #[tokio::test]
    async fn test_low_vip_is_forbidden() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(1, 0, 0, 4)]])
            .into_pool();
        let err = service(db).settle_draw(1, 1).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_admin_lists_draws() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(1, 0, 0, 5)]])
            .append_query_results([vec![crate::services::test_support::draw(3, 5000, 100)]])
            .into_pool();
        let list = service(db).list_draws(1).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].prize_pool, 5000);
    }
}
