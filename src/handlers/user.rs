use crate::middlewares::current_user_id;
use crate::models::*;
use crate::services::UserService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/user/profile",
    tag = "user",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "获取用户资料成功", body = ProfileResponse),
        (status = 401, description = "未授权")
    )
)]
/// 用户资料与统计（购票数 / 中奖票数 / 即时开奖次数与奖金）
pub async fn get_profile(
    user_service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match user_service.get_profile(user_id).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/user/profile",
    tag = "user",
    request_body = UpdateProfileRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "更新成功", body = UserResponse),
        (status = 400, description = "用户名不合法"),
        (status = 401, description = "未授权")
    )
)]
pub async fn update_profile(
    user_service: web::Data<UserService>,
    req: HttpRequest,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match user_service
        .update_profile(user_id, request.into_inner())
        .await
    {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/user/deposit",
    tag = "user",
    request_body = DepositRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "充值成功", body = DepositResponse),
        (status = 400, description = "金额不合法"),
        (status = 401, description = "未授权")
    )
)]
/// 充值，每满 100 赠送 10 水晶
pub async fn deposit(
    user_service: web::Data<UserService>,
    req: HttpRequest,
    request: web::Json<DepositRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match user_service.deposit(user_id, request.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            data,
            "Deposit successful",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/user/vip",
    tag = "user",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "VIP 状态", body = VipStatusResponse),
        (status = 401, description = "未授权")
    )
)]
pub async fn get_vip_status(
    user_service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match user_service.vip_status(user_id).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .route("/profile", web::get().to(get_profile))
            .route("/profile", web::put().to(update_profile))
            .route("/deposit", web::post().to(deposit))
            .route("/vip", web::get().to(get_vip_status)),
    );
}
