use crate::middlewares::current_user_id;
use crate::models::*;
use crate::services::InstantLotteryService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/instant-lotteries",
    tag = "instant",
    responses(
        (status = 200, description = "即时开奖玩法列表", body = [InstantGameResponse])
    )
)]
pub async fn list_games(service: web::Data<InstantLotteryService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": service.list_games()
    })))
}

#[utoipa::path(
    post,
    path = "/instant-lotteries/{lottery_type}/play",
    tag = "instant",
    params(
        ("lottery_type" = String, Path, description = "玩法标识: pirate-treasure / mystic-oracle / jungle-adventure")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "游玩结果", body = InstantPlayResponse),
        (status = 400, description = "余额不足"),
        (status = 404, description = "玩法不存在"),
        (status = 429, description = "冷却中，Retry-After 头给出剩余秒数")
    )
)]
pub async fn play(
    service: web::Data<InstantLotteryService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.play(user_id, &path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/instant-lotteries/history",
    tag = "instant",
    params(
        ("page" = Option<i64>, Query, description = "页码 (默认1)"),
        ("page_size" = Option<i64>, Query, description = "每页数量 (默认20)")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "游玩记录", body = PaginatedInstantHistoryResponse),
        (status = 401, description = "未授权")
    )
)]
pub async fn get_history(
    service: web::Data<InstantLotteryService>,
    req: HttpRequest,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.history(user_id, &query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn instant_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/instant-lotteries")
            .route("", web::get().to(list_games))
            .route("/history", web::get().to(get_history))
            .route("/{lottery_type}/play", web::post().to(play)),
    );
}
