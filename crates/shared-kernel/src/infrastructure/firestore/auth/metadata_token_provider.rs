// crates/shared-kernel/src/infrastructure/firestore/auth/metadata_token_provider.rs

use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::RwLock;
use crate::clock::Clock;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::firestore::auth::AccessTokenProvider;

const DEFAULT_METADATA_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Marge avant expiration pour ne jamais présenter un token mourant
const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Debug, Deserialize)]
struct MetadataTokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Token du compte de service courant (Cloud Run / Functions / GCE).
pub struct MetadataTokenProvider {
    http: reqwest::Client,
    endpoint: String,
    clock: Arc<dyn Clock>,
    cached: RwLock<Option<CachedToken>>,
}

impl MetadataTokenProvider {
    pub fn new(http: reqwest::Client, clock: Arc<dyn Clock>) -> Self {
        Self::with_endpoint(http, DEFAULT_METADATA_URL, clock)
    }

    pub fn with_endpoint(http: reqwest::Client, endpoint: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            clock,
            cached: RwLock::new(None),
        }
    }

    async fn fetch(&self) -> AppResult<CachedToken> {
        let response = self
            .http
            .get(&self.endpoint)
            .header("Metadata-Flavor", "Google")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::new(
                ErrorCode::Unauthorized,
                format!("Metadata server refused token request (HTTP {})", status.as_u16()),
            ));
        }

        let token: MetadataTokenResponse = response.json().await?;
        tracing::debug!(expires_in = token.expires_in, "🔑 Access token refreshed from metadata server");

        let expires_at = Duration::try_seconds(token.expires_in)
            .and_then(|ttl| self.clock.now().checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::new(
                    ErrorCode::Unauthorized,
                    format!("Metadata server returned an out-of-range expires_in ({})", token.expires_in),
                )
            })?;

        Ok(CachedToken {
            value: token.access_token,
            expires_at,
        })
    }

    fn is_fresh(&self, token: &CachedToken) -> bool {
        token.expires_at - Duration::seconds(REFRESH_MARGIN_SECS) > self.clock.now()
    }
}

#[async_trait]
impl AccessTokenProvider for MetadataTokenProvider {
    async fn access_token(&self) -> AppResult<String> {
        if let Some(token) = self.cached.read().await.as_ref() {
            if self.is_fresh(token) {
                return Ok(token.value.clone());
            }
        }

        let mut guard = self.cached.write().await;
        // Un autre appel a pu rafraîchir pendant l'attente du verrou
        if let Some(token) = guard.as_ref() {
            if self.is_fresh(token) {
                return Ok(token.value.clone());
            }
        }

        let token = self.fetch().await?;
        let value = token.value.clone();
        *guard = Some(token);
        Ok(value)
    }
}
