use crate::middlewares::current_user_id;
use crate::models::*;
use crate::services::AdminService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = "admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "平台统计", body = AdminStatsResponse),
        (status = 403, description = "VIP 等级不足")
    )
)]
pub async fn get_stats(service: web::Data<AdminService>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.stats(user_id).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/lotteries",
    tag = "admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "所有期次（开奖时间倒序）", body = [DrawResponse]),
        (status = 403, description = "VIP 等级不足")
    )
)]
pub async fn list_draws(service: web::Data<AdminService>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.list_draws(user_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/lotteries",
    tag = "admin",
    request_body = CreateDrawRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "创建成功", body = DrawResponse),
        (status = 400, description = "参数错误"),
        (status = 403, description = "VIP 等级不足")
    )
)]
pub async fn create_draw(
    service: web::Data<AdminService>,
    req: HttpRequest,
    request: web::Json<CreateDrawRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.create_draw(user_id, request.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/lotteries/{id}/complete",
    tag = "admin",
    params(
        ("id" = i64, Path, description = "期次ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "开奖结算结果", body = SettlementResponse),
        (status = 403, description = "VIP 等级不足"),
        (status = 404, description = "期次不存在"),
        (status = 409, description = "期次已开奖")
    )
)]
/// 开奖：生成中奖号码，比对所有彩票并派奖
pub async fn complete_draw(
    service: web::Data<AdminService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.settle_draw(user_id, path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "最近注册的 20 个用户", body = [UserResponse]),
        (status = 403, description = "VIP 等级不足")
    )
)]
pub async fn list_users(service: web::Data<AdminService>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.recent_users(user_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/tickets",
    tag = "admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "最近购买的 20 张彩票", body = [TicketResponse]),
        (status = 403, description = "VIP 等级不足")
    )
)]
pub async fn list_tickets(
    service: web::Data<AdminService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.recent_tickets(user_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/stats", web::get().to(get_stats))
            .route("/lotteries", web::get().to(list_draws))
            .route("/lotteries", web::post().to(create_draw))
            .route("/lotteries/{id}/complete", web::post().to(complete_draw))
            .route("/users", web::get().to(list_users))
            .route("/tickets", web::get().to(list_tickets)),
    );
}
