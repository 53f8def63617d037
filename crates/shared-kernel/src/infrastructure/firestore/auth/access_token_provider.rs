// crates/shared-kernel/src/infrastructure/firestore/auth/access_token_provider.rs

use async_trait::async_trait;
use crate::errors::AppResult;

/// Fournit le bearer token OAuth2 attaché à chaque appel Firestore.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> AppResult<String>;
}

/// Token fixe : émulateur (`owner`) ou token injecté via l'environnement.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub const EMULATOR_TOKEN: &'static str = "owner";

    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    pub fn emulator() -> Self {
        Self::new(Self::EMULATOR_TOKEN)
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> AppResult<String> {
        Ok(self.token.clone())
    }
}
