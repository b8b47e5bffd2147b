//! Game rules with no database access: number draws, prize tiers, instant odds,
//! VIP progression, the shop catalog and wallet arithmetic.
//!
//! Services call into these and persist the results.

pub mod catalog;
pub mod instant;
pub mod numbers;
pub mod prize;
pub mod vip;
pub mod wallet;

pub use catalog::{ItemCategory, RewardEffect, RewardItem};
pub use instant::{AR_LOTTERY, InstantGame, Odds, Outcome};
pub use numbers::{NumbersError, TicketNumbers};
pub use prize::PrizeTier;
