// crates/profile/src/infrastructure/api/http/mod.rs

mod error_mapper;
mod handlers;
mod router;

pub use error_mapper::ApiError;
pub use router::{router, ACCOUNT_CREATED_PATH, HEALTH_PATH};
