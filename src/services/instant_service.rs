use crate::config::GameConfig;
use crate::entities::instant_history_entity as history;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::rules::{InstantGame, Outcome};
use crate::services::user_service::load_user;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct InstantLotteryService {
    pool: Arc<DatabaseConnection>,
    cooldown_secs: i64,
}

impl InstantLotteryService {
    pub fn new(pool: Arc<DatabaseConnection>, game: &GameConfig) -> Self {
        Self {
            pool,
            cooldown_secs: game.instant_cooldown_secs,
        }
    }

    /// 所有即时开奖玩法
    pub fn list_games(&self) -> Vec<InstantGameResponse> {
        InstantGame::ALL.into_iter().map(Into::into).collect()
    }

    /// 游玩一次，玩法标识不存在返回 NotFound
    pub async fn play(&self, user_id: i64, lottery_type: &str) -> AppResult<InstantPlayResponse> {
        let game: InstantGame = lottery_type.parse().map_err(AppError::NotFound)?;

        // 结果与数据库读写无关，先抽取；校验失败时直接丢弃
        let outcome = {
            let mut rng = rand::thread_rng();
            game.odds().resolve(&mut rng)
        };
        self.play_with(user_id, game, outcome).await
    }

    /// 1. 冷却校验（同一用户同一玩法，以最近一条记录为准）
    /// 2. 余额 >= 单价
    /// 3. 余额 = 余额 - 单价 + 奖金
    /// 4. 写游玩记录
    pub(crate) async fn play_with(
        &self,
        user_id: i64,
        game: InstantGame,
        outcome: Outcome,
    ) -> AppResult<InstantPlayResponse> {
        let odds = game.odds();
        let txn = self.pool.begin().await?;

        let user = load_user(&txn, user_id).await?;

        let last_played = history::Entity::find()
            .filter(history::Column::UserId.eq(user_id))
            .filter(history::Column::LotteryType.eq(game.slug()))
            .order_by_desc(history::Column::PlayedAt)
            .one(&txn)
            .await?
            .map(|h| h.played_at);
        if let Some(retry_after_secs) = cooldown_remaining(last_played, Utc::now(), self.cooldown_secs)
        {
            return Err(AppError::TooManyRequests { retry_after_secs });
        }

        if user.balance < odds.price {
            return Err(AppError::InsufficientFunds(format!(
                "{} costs {}, current balance is {}",
                game.title(),
                odds.price,
                user.balance
            )));
        }

        let balance = odds.settle_balance(user.balance, &outcome);
        let mut am = user.into_active_model();
        am.balance = Set(balance);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        history::ActiveModel {
            user_id: Set(user_id),
            lottery_type: Set(game.slug().to_string()),
            amount: Set(odds.price),
            is_win: Set(outcome.is_win),
            winnings: Set(outcome.winnings),
            played_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        if outcome.is_win {
            log::info!("User {user_id} won {} on {game}", outcome.winnings);
        }

        Ok(InstantPlayResponse {
            lottery_type: game,
            is_win: outcome.is_win,
            winnings: outcome.winnings,
            amount: odds.price,
            balance,
        })
    }

    /// 游玩记录（分页，倒序）
    pub async fn history(
        &self,
        user_id: i64,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<InstantHistoryResponse>> {
        let base_query = history::Entity::find().filter(history::Column::UserId.eq(user_id));

        let total = base_query.clone().count(&*self.pool).await? as i64;

        let items = base_query
            .order_by_desc(history::Column::PlayedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&*self.pool)
            .await?;

        Ok(PaginatedResponse::from_params(
            items.into_iter().map(Into::into).collect(),
            params,
            total,
        ))
    }
}

/// 距冷却结束还剩多少秒；None 表示可以游玩
fn cooldown_remaining(
    last_played: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    cooldown_secs: i64,
) -> Option<i64> {
    let elapsed = (now - last_played?).num_seconds();
    let remaining = cooldown_secs - elapsed;
    (remaining > 0).then_some(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{IntoPool, transaction_log, updates_of, user};
    use chrono::Duration;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn played(user_id: i64, game: InstantGame, at: DateTime<Utc>) -> history::Model {
        history::Model {
            id: 1,
            user_id,
            lottery_type: game.slug().to_string(),
            amount: game.odds().price,
            is_win: false,
            winnings: 0,
            played_at: at,
        }
    }

    fn service(db: Arc<DatabaseConnection>) -> InstantLotteryService {
        InstantLotteryService::new(db, &GameConfig::default())
    }

    #[test]
    fn test_cooldown_remaining() {
        let now = Utc::now();
        assert_eq!(cooldown_remaining(None, now, 60), None);
        assert_eq!(
            cooldown_remaining(Some(now - Duration::seconds(20)), now, 60),
            Some(40)
        );
        assert_eq!(cooldown_remaining(Some(now - Duration::seconds(60)), now, 60), None);
        assert_eq!(cooldown_remaining(Some(now), now, 0), None);
    }

    #[test]
    fn test_list_games() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_pool();
        let games = service(db).list_games();
        assert_eq!(games.len(), 3);
        assert_eq!(games[0].price, 50);
        assert_eq!(games[2].max_win, 3000);
    }

    #[tokio::test]
    async fn test_unknown_game_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_pool();
        let err = service(db).play(1, "roulette").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_cooldown_blocks_replay() {
        let game = InstantGame::MysticOracle;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(1, 1000, 0, 0)]])
            .append_query_results([vec![played(1, game, Utc::now() - Duration::seconds(10))]])
            .into_pool();
        let outcome = Outcome {
            is_win: false,
            winnings: 0,
        };
        let err = service(db).play_with(1, game, outcome).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::TooManyRequests { retry_after_secs } if (49..=50).contains(&retry_after_secs)
        ));
    }

    #[tokio::test]
    async fn test_insufficient_balance() {
        let game = InstantGame::JungleAdventure;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(1, 199, 0, 0)]])
            .append_query_results([Vec::<history::Model>::new()])
            .into_pool();
        let outcome = Outcome {
            is_win: false,
            winnings: 0,
        };
        let err = service(db).play_with(1, game, outcome).await.unwrap_err();
        assert!(matches!(err, AppError::InsufficientFunds(_)));
    }

    #[tokio::test]
    async fn test_win_settles_balance() {
        let game = InstantGame::PirateTreasure;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(1, 100, 0, 0)]])
            .append_query_results([vec![played(1, game, Utc::now() - Duration::minutes(5))]])
            .append_query_results([vec![user(1, 350, 0, 0)]])
            .append_query_results([vec![played(1, game, Utc::now())]])
            .into_pool();
        let outcome = Outcome {
            is_win: true,
            winnings: 300,
        };
        let instant = service(db.clone());
        let resp = instant.play_with(1, game, outcome).await.unwrap();
        assert!(resp.is_win);
        assert_eq!(resp.amount, 50);
        assert_eq!(resp.balance, 350);

        drop(instant);
        // 100 - 50 + 300
        let user_updates = updates_of(&transaction_log(db), "users");
        assert_eq!(user_updates.len(), 1);
        assert!(user_updates[0].contains("BigInt(Some(350))"));
    }
}
