use crate::middlewares::current_user_id;
use crate::services::ArLotteryService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/ar-lottery/tickets",
    tag = "ar",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "购买成功，结果在购买时确定", body = ArPurchaseResponse),
        (status = 400, description = "余额不足")
    )
)]
pub async fn purchase(service: web::Data<ArLotteryService>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.purchase(user_id).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/ar-lottery/tickets",
    tag = "ar",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "AR 彩票列表（最新在前）", body = [ArTicketResponse])
    )
)]
pub async fn list_tickets(
    service: web::Data<ArLotteryService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.list_tickets(user_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/ar-lottery/tickets/{id}",
    tag = "ar",
    params(
        ("id" = i64, Path, description = "AR 彩票ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "AR 彩票详情", body = ArTicketResponse),
        (status = 404, description = "彩票不存在")
    )
)]
pub async fn get_ticket(
    service: web::Data<ArLotteryService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.get_ticket(user_id, path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/ar-lottery/tickets/{id}/view",
    tag = "ar",
    params(
        ("id" = i64, Path, description = "AR 彩票ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "已标记为查看", body = ArTicketResponse),
        (status = 404, description = "彩票不存在")
    )
)]
pub async fn mark_viewed(
    service: web::Data<ArLotteryService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.mark_viewed(user_id, path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn ar_lottery_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/ar-lottery")
            .route("/tickets", web::post().to(purchase))
            .route("/tickets", web::get().to(list_tickets))
            .route("/tickets/{id}", web::get().to(get_ticket))
            .route("/tickets/{id}/view", web::post().to(mark_viewed)),
    );
}
