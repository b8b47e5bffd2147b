use crate::entities::ar_ticket_entity as ar_tickets;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::rules::instant::{AR_MODEL_LOSE, AR_MODEL_WIN};
use crate::rules::{AR_LOTTERY, Outcome};
use crate::services::user_service::load_user;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ArLotteryService {
    pool: Arc<DatabaseConnection>,
}

impl ArLotteryService {
    pub fn new(pool: Arc<DatabaseConnection>) -> Self {
        Self { pool }
    }

    /// 购买一张 AR 彩票，结果在购买时确定
    pub async fn purchase(&self, user_id: i64) -> AppResult<ArPurchaseResponse> {
        let outcome = {
            let mut rng = rand::thread_rng();
            AR_LOTTERY.resolve(&mut rng)
        };
        self.purchase_with(user_id, outcome).await
    }

    pub(crate) async fn purchase_with(
        &self,
        user_id: i64,
        outcome: Outcome,
    ) -> AppResult<ArPurchaseResponse> {
        let txn = self.pool.begin().await?;

        let user = load_user(&txn, user_id).await?;
        if user.balance < AR_LOTTERY.price {
            return Err(AppError::InsufficientFunds(format!(
                "AR ticket costs {}, current balance is {}",
                AR_LOTTERY.price, user.balance
            )));
        }

        let balance = AR_LOTTERY.settle_balance(user.balance, &outcome);
        let mut am = user.into_active_model();
        am.balance = Set(balance);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        let ar_model = if outcome.is_win {
            AR_MODEL_WIN
        } else {
            AR_MODEL_LOSE
        };
        let ticket = ar_tickets::ActiveModel {
            user_id: Set(user_id),
            is_win: Set(outcome.is_win),
            win_amount: Set(outcome.winnings),
            viewed: Set(false),
            ar_model: Set(ar_model.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        log::info!(
            "User {user_id} bought AR ticket {} (win={}, amount={})",
            ticket.id,
            outcome.is_win,
            outcome.winnings
        );

        Ok(ArPurchaseResponse {
            ticket: ticket.into(),
            balance,
        })
    }

    pub async fn list_tickets(&self, user_id: i64) -> AppResult<Vec<ArTicketResponse>> {
        let list = ar_tickets::Entity::find()
            .filter(ar_tickets::Column::UserId.eq(user_id))
            .order_by_desc(ar_tickets::Column::CreatedAt)
            .all(&*self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn get_ticket(&self, user_id: i64, ticket_id: i64) -> AppResult<ArTicketResponse> {
        Ok(self.find_owned(user_id, ticket_id).await?.into())
    }

    /// 标记已查看（重复调用无副作用）
    pub async fn mark_viewed(&self, user_id: i64, ticket_id: i64) -> AppResult<ArTicketResponse> {
        let ticket = self.find_owned(user_id, ticket_id).await?;
        if ticket.viewed {
            return Ok(ticket.into());
        }

        let mut am = ticket.into_active_model();
        am.viewed = Set(true);
        let updated = am.update(&*self.pool).await?;
        Ok(updated.into())
    }

    /// 其他用户的彩票同样返回 NotFound
    async fn find_owned(&self, user_id: i64, ticket_id: i64) -> AppResult<ar_tickets::Model> {
        ar_tickets::Entity::find_by_id(ticket_id)
            .filter(ar_tickets::Column::UserId.eq(user_id))
            .one(&*self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("AR ticket not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{IntoPool, transaction_log, updates_of, user};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn ar_ticket(id: i64, user_id: i64, viewed: bool) -> ar_tickets::Model {
        ar_tickets::Model {
            id,
            user_id,
            is_win: true,
            win_amount: 400,
            viewed,
            ar_model: AR_MODEL_WIN.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_purchase_requires_price() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(1, 74, 0, 0)]])
            .into_pool();
        let err = ArLotteryService::new(db)
            .purchase(1)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InsufficientFunds(_)));
    }

    #[tokio::test]
    async fn test_winning_purchase() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(1, 100, 0, 0)]])
            .append_query_results([vec![user(1, 425, 0, 0)]])
            .append_query_results([vec![ar_ticket(3, 1, false)]])
            .into_pool();
        let outcome = Outcome {
            is_win: true,
            winnings: 400,
        };
        let service = ArLotteryService::new(db.clone());
        let resp = service.purchase_with(1, outcome).await.unwrap();
        assert_eq!(resp.balance, 425);
        assert_eq!(resp.ticket.ar_model, "treasure_chest");

        drop(service);
        // 100 - 75 + 400
        let user_updates = updates_of(&transaction_log(db), "users");
        assert_eq!(user_updates.len(), 1);
        assert!(user_updates[0].contains("BigInt(Some(425))"));
    }

    #[tokio::test]
    async fn test_foreign_ticket_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<ar_tickets::Model>::new()])
            .into_pool();
        let err = ArLotteryService::new(db).get_ticket(2, 3).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_mark_viewed_is_idempotent() {
        // 已查看的彩票不再写库，只需一条查询结果
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![ar_ticket(3, 1, true)]])
            .into_pool();
        let resp = ArLotteryService::new(db).mark_viewed(1, 3).await.unwrap();
        assert!(resp.viewed);
    }
}
