pub mod admin;
pub mod ar_lottery;
pub mod auth;
pub mod instant;
pub mod lottery;
pub mod shop;
pub mod user;

pub use admin::admin_config;
pub use ar_lottery::ar_lottery_config;
pub use auth::auth_config;
pub use instant::instant_config;
pub use lottery::lottery_config;
pub use shop::shop_config;
pub use user::user_config;
