pub mod ar_lottery_tickets;
pub mod instant_lottery_history;
pub mod lottery_draws;
pub mod reward_purchases;
pub mod tickets;
pub mod user_inventory;
pub mod users;

pub use ar_lottery_tickets as ar_ticket_entity;
pub use instant_lottery_history as instant_history_entity;
pub use lottery_draws as lottery_draw_entity;
pub use reward_purchases as reward_purchase_entity;
pub use tickets as ticket_entity;
pub use user_inventory as inventory_entity;
pub use users as user_entity;
