// crates/profile/src/infrastructure/api/http/handlers.rs

use std::sync::Arc;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use crate::infrastructure::api::http::ApiError;
use crate::infrastructure::events::AccountEventConsumer;

/// En-tête CloudEvents (mode binaire)
const CE_TYPE_HEADER: &str = "ce-type";

/// 204 uniquement après acquittement de l'écriture par le store.
pub async fn handle_account_event(
    State(consumer): State<Arc<AccountEventConsumer>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let ce_type = headers.get(CE_TYPE_HEADER).and_then(|v| v.to_str().ok());

    match ce_type {
        Some(event_type) => consumer.on_cloud_event(event_type, &body).await?,
        None => consumer.on_message_received(&body).await?,
    };

    Ok(StatusCode::NO_CONTENT)
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
