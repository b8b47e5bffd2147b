pub mod admin;
pub mod ar_lottery;
pub mod common;
pub mod instant;
pub mod lottery;
pub mod pagination;
pub mod shop;
pub mod user;

pub use admin::*;
pub use ar_lottery::*;
pub use common::*;
pub use instant::*;
pub use lottery::*;
pub use pagination::*;
pub use shop::*;
pub use user::*;
