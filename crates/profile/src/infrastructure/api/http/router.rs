// crates/profile/src/infrastructure/api/http/router.rs

use std::sync::Arc;
use axum::routing::{get, post};
use axum::Router;
use crate::infrastructure::api::http::handlers::{handle_account_event, health};
use crate::infrastructure::events::AccountEventConsumer;

pub const ACCOUNT_CREATED_PATH: &str = "/events/account-created";
pub const HEALTH_PATH: &str = "/healthz";

/// Les plateformes push livrent sur `/` par défaut ; la route nommée sert au routage explicite.
pub fn router(consumer: Arc<AccountEventConsumer>) -> Router {
    Router::new()
        .route("/", post(handle_account_event))
        .route(ACCOUNT_CREATED_PATH, post(handle_account_event))
        .route(HEALTH_PATH, get(health))
        .with_state(consumer)
}
