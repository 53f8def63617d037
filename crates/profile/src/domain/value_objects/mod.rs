// crates/profile/src/domain/value_objects/mod.rs

mod coin_balance;
mod created_at;
mod display_name;
mod email;
mod user_id;

pub use coin_balance::CoinBalance;
pub use created_at::CreatedAt;
pub use display_name::DisplayName;
pub use email::Email;
pub use user_id::UserId;
