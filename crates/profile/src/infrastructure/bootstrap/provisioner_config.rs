// crates/profile/src/infrastructure/bootstrap/provisioner_config.rs

use std::net::SocketAddr;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use crate::domain::repositories::WriteMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionerConfig {
    pub port: u16,
    pub collection: String,
    pub write_mode: WriteMode,
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            collection: "users".to_string(),
            write_mode: WriteMode::Overwrite,
        }
    }
}

impl ProvisionerConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Même lecture que `from_env`, sur une source de variables injectée.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::new(ErrorCode::InternalError, format!("PORT '{raw}' is not a valid port")))?,
            None => defaults.port,
        };

        let write_mode = match lookup("PROFILE_WRITE_MODE") {
            Some(raw) => raw.parse::<WriteMode>().map_err(AppError::from)?,
            None => defaults.write_mode,
        };

        let collection = lookup("PROFILE_COLLECTION").unwrap_or(defaults.collection);

        Self { port, collection, write_mode }.validated()
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Collection de premier niveau uniquement
    pub fn validated(self) -> AppResult<Self> {
        if self.collection.is_empty() || self.collection.contains('/') {
            return Err(AppError::new(
                ErrorCode::InternalError,
                format!("PROFILE_COLLECTION '{}' must be a top-level collection id", self.collection),
            ));
        }
        Ok(self)
    }
}
