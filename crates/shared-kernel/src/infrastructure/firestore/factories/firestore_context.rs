// crates/shared-kernel/src/infrastructure/firestore/factories/firestore_context.rs

use std::sync::Arc;
use crate::clock::SystemClock;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::firestore::auth::{AccessTokenProvider, MetadataTokenProvider, StaticTokenProvider};
use crate::infrastructure::firestore::factories::{FirestoreConfig, FirestoreContextBuilder};
use crate::infrastructure::firestore::FirestoreClient;

/// Initialisation "une fois par process" du client de stockage.
pub struct FirestoreContext {
    client: Arc<FirestoreClient>,
    config: FirestoreConfig,
}

impl FirestoreContext {
    pub fn builder() -> AppResult<FirestoreContextBuilder> {
        FirestoreContextBuilder::new()
    }

    pub fn builder_raw() -> FirestoreContextBuilder {
        FirestoreContextBuilder::default()
    }

    pub fn client(&self) -> Arc<FirestoreClient> {
        self.client.clone()
    }

    pub fn config(&self) -> &FirestoreConfig {
        &self.config
    }

    pub(crate) fn restore(builder: FirestoreContextBuilder) -> AppResult<Self> {
        if builder.project_id.trim().is_empty() {
            return Err(AppError::new(ErrorCode::InternalError, "Firestore project id cannot be empty"));
        }

        let http = reqwest::Client::builder()
            .timeout(builder.timeout)
            .build()
            .map_err(|e| AppError::new(ErrorCode::InternalError, format!("HTTP client init failed: {e}")))?;

        let emulator = builder.emulator_host.is_some();
        let base_url = match &builder.emulator_host {
            Some(host) => format!("http://{host}"),
            None => builder.base_url.clone(),
        };

        let tokens: Arc<dyn AccessTokenProvider> = match (&builder.emulator_host, builder.access_token) {
            (Some(_), _) => Arc::new(StaticTokenProvider::emulator()),
            (None, Some(token)) => Arc::new(StaticTokenProvider::new(token)),
            (None, None) => Arc::new(MetadataTokenProvider::new(http.clone(), Arc::new(SystemClock))),
        };

        let client = FirestoreClient::new(
            http,
            base_url.clone(),
            builder.project_id.clone(),
            builder.database_id.clone(),
            tokens,
        );

        Ok(Self {
            client: Arc::new(client),
            config: FirestoreConfig {
                project_id: builder.project_id,
                database_id: builder.database_id,
                base_url,
                timeout: builder.timeout,
                emulator,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emulator_overrides_base_url() {
        let ctx = FirestoreContext::builder_raw()
            .with_emulator_host("localhost:8085")
            .build()
            .unwrap();

        assert!(ctx.config().emulator);
        assert_eq!(ctx.config().base_url, "http://localhost:8085");
        assert_eq!(ctx.config().database_id, "(default)");
    }

    #[test]
    fn test_empty_project_is_rejected() {
        let result = FirestoreContext::builder_raw().with_project_id("  ").build();
        assert!(result.is_err());
    }
}
