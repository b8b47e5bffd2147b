use crate::middlewares::current_user_id;
use crate::models::*;
use crate::services::LotteryService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/lotteries",
    tag = "lottery",
    responses(
        (status = 200, description = "未开奖期次（按开奖时间升序）", body = [DrawResponse])
    )
)]
pub async fn list_draws(service: web::Data<LotteryService>) -> Result<HttpResponse> {
    match service.list_active_draws().await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/lotteries/{id}",
    tag = "lottery",
    params(
        ("id" = i64, Path, description = "期次ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "期次详情（已开奖时含中奖号码）", body = DrawResponse),
        (status = 404, description = "期次不存在")
    )
)]
pub async fn get_draw(
    service: web::Data<LotteryService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.get_draw(path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/lotteries/{id}/tickets",
    tag = "lottery",
    params(
        ("id" = i64, Path, description = "期次ID")
    ),
    request_body = BuyTicketRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "购票成功", body = BuyTicketResponse),
        (status = 400, description = "号码不合法或余额不足"),
        (status = 404, description = "期次不存在"),
        (status = 409, description = "期次已开奖")
    )
)]
/// 购票：余额不足时按 10:1 用水晶补足差额
pub async fn buy_ticket(
    service: web::Data<LotteryService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<BuyTicketRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service
        .buy_ticket(user_id, path.into_inner(), request.into_inner())
        .await
    {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/lotteries/{id}/tickets",
    tag = "lottery",
    params(
        ("id" = i64, Path, description = "期次ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "当前用户在该期的彩票", body = [TicketResponse]),
        (status = 404, description = "期次不存在")
    )
)]
pub async fn list_draw_tickets(
    service: web::Data<LotteryService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.list_draw_tickets(user_id, path.into_inner()).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tickets",
    tag = "lottery",
    params(
        ("page" = Option<i64>, Query, description = "页码 (默认1)"),
        ("page_size" = Option<i64>, Query, description = "每页数量 (默认20)")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "当前用户所有彩票（倒序）", body = PaginatedTicketResponse),
        (status = 401, description = "未授权")
    )
)]
pub async fn list_my_tickets(
    service: web::Data<LotteryService>,
    req: HttpRequest,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.list_user_tickets(user_id, &query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn lottery_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/lotteries")
            .route("", web::get().to(list_draws))
            .route("/{id}", web::get().to(get_draw))
            .route("/{id}/tickets", web::post().to(buy_ticket))
            .route("/{id}/tickets", web::get().to(list_draw_tickets)),
    )
    .route("/tickets", web::get().to(list_my_tickets));
}
