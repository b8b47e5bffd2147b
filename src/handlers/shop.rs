use crate::middlewares::current_user_id;
use crate::models::*;
use crate::services::ShopService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/shop/items",
    tag = "shop",
    params(
        ("category" = Option<ItemCategory>, Query, description = "按分类筛选")
    ),
    responses(
        (status = 200, description = "商品目录", body = [ShopItemResponse])
    )
)]
pub async fn list_items(
    service: web::Data<ShopService>,
    query: web::Query<ShopItemQuery>,
) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": service.list_items(query.into_inner().category)
    })))
}

#[utoipa::path(
    post,
    path = "/shop/purchase",
    tag = "shop",
    request_body = PurchaseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "兑换成功", body = PurchaseResponse),
        (status = 400, description = "水晶不足"),
        (status = 403, description = "VIP 等级不足"),
        (status = 404, description = "商品不存在")
    )
)]
/// 用水晶兑换商品
pub async fn purchase(
    service: web::Data<ShopService>,
    req: HttpRequest,
    request: web::Json<PurchaseRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.purchase(user_id, request.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/inventory",
    tag = "shop",
    params(
        ("item_type" = Option<ItemCategory>, Query, description = "按分类筛选")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "未使用且未过期的背包物品", body = [InventoryItemResponse])
    )
)]
pub async fn list_inventory(
    service: web::Data<ShopService>,
    req: HttpRequest,
    query: web::Query<InventoryQuery>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service
        .list_inventory(user_id, query.into_inner().item_type)
        .await
    {
        Ok(list) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": list }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/inventory/{id}/use",
    tag = "shop",
    params(
        ("id" = i64, Path, description = "背包物品ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "使用成功", body = InventoryItemResponse),
        (status = 400, description = "物品已过期"),
        (status = 404, description = "物品不存在"),
        (status = 409, description = "物品已使用")
    )
)]
pub async fn use_item(
    service: web::Data<ShopService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req)?;
    match service.use_item(user_id, path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn shop_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/shop")
            .route("/items", web::get().to(list_items))
            .route("/purchase", web::post().to(purchase)),
    )
    .service(
        web::scope("/inventory")
            .route("", web::get().to(list_inventory))
            .route("/{id}/use", web::post().to(use_item)),
    );
}
