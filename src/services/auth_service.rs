use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::user_service::load_user;
use crate::utils::*;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthService {
    pool: Arc<DatabaseConnection>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: Arc<DatabaseConnection>, jwt_service: JwtService) -> Self {
        Self { pool, jwt_service }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        // 验证输入参数
        let email = normalize_email(&request.email);
        validate_email(&email)?;
        validate_username(&request.username)?;
        validate_password(&request.password)?;

        // 检查邮箱是否已注册
        if self.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let password_hash = hash_password(&request.password)?;
        let now = Utc::now();

        // 新用户余额、水晶、VIP 等级均从 0 开始
        let user = users::ActiveModel {
            email: Set(email),
            username: Set(request.username.trim().to_string()),
            password_hash: Set(password_hash),
            balance: Set(0),
            crystals: Set(0),
            vip_level: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&*self.pool)
        .await
        // 并发注册同一邮箱时由唯一索引兜底
        .map_err(|e| AppError::conflict_on_unique(e, "Email is already registered"))?;

        log::info!("New user registered: id={}", user.id);

        self.issue_tokens(user)
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let email = normalize_email(&request.email);

        let user = self
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::AuthError("Invalid email or password".to_string()));
        }

        self.issue_tokens(user)
    }

    /// 用刷新令牌换取新的令牌对
    pub async fn refresh_token(&self, refresh_token: &str) -> AppResult<AuthResponse> {
        let claims = self.jwt_service.verify_refresh_token(refresh_token)?;
        let user = load_user(&*self.pool, claims.user_id()?)
            .await
            .map_err(|_| AppError::AuthError("User no longer exists".to_string()))?;

        self.issue_tokens(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<users::Model>> {
        Ok(users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&*self.pool)
            .await?)
    }

    fn issue_tokens(&self, user: users::Model) -> AppResult<AuthResponse> {
        let access_token = self.jwt_service.generate_access_token(user.id, &user.email)?;
        let refresh_token = self.jwt_service.generate_refresh_token(user.id, &user.email)?;

        Ok(AuthResponse {
            user: user.into(),
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{IntoPool, user};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn jwt() -> JwtService {
        JwtService::new("test-secret", 3600, 86400)
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            username: "lucky".to_string(),
            password: "Password123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_email_before_querying() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_pool();
        let service = AuthService::new(db, jwt());
        let err = service
            .register(register_request("not-an-email"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(1, 0, 0, 0)]])
            .into_pool();
        let service = AuthService::new(db, jwt());
        let err = service
            .register(register_request("user1@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_insert_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_pool();
        let service = AuthService::new(db, jwt());
        let err = service
            .register(register_request("new@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_pool();
        let service = AuthService::new(db, jwt());
        let err = service
            .login(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "Password123".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AuthError(_)));
    }

    #[tokio::test]
    async fn test_refresh_issues_new_tokens() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user(5, 0, 0, 0)]])
            .into_pool();
        let service = AuthService::new(db, jwt());
        let refresh = jwt().generate_refresh_token(5, "user5@example.com").unwrap();

        let resp = service.refresh_token(&refresh).await.unwrap();
        assert_eq!(resp.user.id, 5);
        let claims = jwt().verify_access_token(&resp.access_token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 5);
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_pool();
        let service = AuthService::new(db, jwt());
        let access = jwt().generate_access_token(5, "user5@example.com").unwrap();
        assert!(service.refresh_token(&access).await.is_err());
    }
}
