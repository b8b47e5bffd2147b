pub mod admin_service;
pub mod ar_lottery_service;
pub mod auth_service;
pub mod instant_service;
pub mod lottery_service;
pub mod shop_service;
pub mod user_service;

pub use admin_service::*;
pub use ar_lottery_service::*;
pub use auth_service::*;
pub use instant_service::*;
pub use lottery_service::*;
pub use shop_service::*;
pub use user_service::*;

/// 服务层单测共用的实体构造
#[cfg(test)]
pub(crate) mod test_support {
    use crate::entities::{lottery_draw_entity as draws, ticket_entity as tickets, user_entity as users};
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseConnection, MockDatabase, Transaction};
    use std::sync::Arc;

    pub trait IntoPool {
        fn into_pool(self) -> Arc<DatabaseConnection>;
    }

    impl IntoPool for MockDatabase {
        fn into_pool(self) -> Arc<DatabaseConnection> {
            Arc::new(self.into_connection())
        }
    }

    /// 取出 mock 连接记录的全部语句；调用前须先 drop 持有连接的服务
    pub fn transaction_log(pool: Arc<DatabaseConnection>) -> Vec<Transaction> {
        Arc::try_unwrap(pool)
            .ok()
            .expect("pool is still shared")
            .into_transaction_log()
    }

    /// 作用于某张表的 UPDATE 语句（Debug 文本，含绑定参数）
    pub fn updates_of(log: &[Transaction], table: &str) -> Vec<String> {
        let marker = format!("UPDATE \\\"{table}\\\"");
        format!("{log:?}")
            .split("Statement {")
            .filter(|stmt| stmt.contains(&marker))
            .map(str::to_string)
            .collect()
    }

    pub fn user(id: i64, balance: i64, crystals: i64, vip_level: i32) -> users::Model {
        users::Model {
            id,
            email: format!("user{id}@example.com"),
            username: format!("user{id}"),
            password_hash: "hash".to_string(),
            balance,
            crystals,
            vip_level,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    pub fn draw(id: i64, prize_pool: i64, ticket_price: i64) -> draws::Model {
        draws::Model {
            id,
            name: format!("Draw #{id}"),
            prize_pool,
            ticket_price,
            draw_date: Utc::now() + Duration::days(7),
            is_completed: false,
            winning_numbers: None,
            created_at: Utc::now(),
        }
    }

    pub fn ticket(id: i64, user_id: i64, draw_id: i64, numbers: Option<&str>) -> tickets::Model {
        tickets::Model {
            id,
            user_id,
            lottery_draw_id: draw_id,
            numbers: numbers.map(str::to_string),
            is_winning: false,
            purchased_at: Utc::now(),
        }
    }
}
