use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;
use crate::rules::{InstantGame, ItemCategory, PrizeTier};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::logout,
        handlers::user::get_profile,
        handlers::user::update_profile,
        handlers::user::deposit,
        handlers::user::get_vip_status,
        handlers::lottery::list_draws,
        handlers::lottery::get_draw,
        handlers::lottery::buy_ticket,
        handlers::lottery::list_draw_tickets,
        handlers::lottery::list_my_tickets,
        handlers::instant::list_games,
        handlers::instant::play,
        handlers::instant::get_history,
        handlers::ar_lottery::purchase,
        handlers::ar_lottery::list_tickets,
        handlers::ar_lottery::get_ticket,
        handlers::ar_lottery::mark_viewed,
        handlers::shop::list_items,
        handlers::shop::purchase,
        handlers::shop::list_inventory,
        handlers::shop::use_item,
        handlers::admin::get_stats,
        handlers::admin::list_draws,
        handlers::admin::create_draw,
        handlers::admin::complete_draw,
        handlers::admin::list_users,
        handlers::admin::list_tickets,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            UpdateProfileRequest,
            UserResponse,
            UserStatistics,
            ProfileResponse,
            AuthResponse,
            DepositRequest,
            DepositResponse,
            VipBenefit,
            VipStatusResponse,
            DrawResponse,
            TicketResponse,
            BuyTicketRequest,
            BuyTicketResponse,
            PaginationParams,
            PaginatedTicketResponse,
            PaginatedInstantHistoryResponse,
            InstantGame,
            InstantGameResponse,
            InstantPlayResponse,
            InstantHistoryResponse,
            ArTicketResponse,
            ArPurchaseResponse,
            ItemCategory,
            ShopItemQuery,
            ShopItemResponse,
            PurchaseRequest,
            PurchaseResponse,
            InventoryQuery,
            InventoryItemResponse,
            PrizeTier,
            AdminStatsResponse,
            CreateDrawRequest,
            SettledWinner,
            SettlementResponse,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication API"),
        (name = "user", description = "Profile, wallet and VIP API"),
        (name = "lottery", description = "Scheduled lottery draws and tickets"),
        (name = "instant", description = "Instant lottery games"),
        (name = "ar", description = "AR lottery tickets"),
        (name = "shop", description = "VIP shop and inventory"),
        (name = "admin", description = "Admin panel API"),
    ),
    info(
        title = "FutureWin Backend API",
        version = "1.0.0",
        description = "FutureWin lottery portal REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
