// crates/shared-kernel/src/infrastructure/firestore/factories/firestore_context_builder.rs

use std::time::Duration;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::firestore::factories::FirestoreContext;

pub(crate) const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";
pub(crate) const DEFAULT_DATABASE_ID: &str = "(default)";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub struct FirestoreContextBuilder {
    pub(crate) project_id: String,
    pub(crate) database_id: String,
    pub(crate) base_url: String,
    pub(crate) access_token: Option<String>,
    pub(crate) emulator_host: Option<String>,
    pub(crate) timeout: Duration,
}

impl Default for FirestoreContextBuilder {
    fn default() -> Self {
        Self {
            project_id: "demo-project".to_string(),
            database_id: DEFAULT_DATABASE_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            emulator_host: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FirestoreContextBuilder {
    pub fn new() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lecture des variables `FIRESTORE_*` depuis une source injectée.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let project_id = non_empty("FIRESTORE_PROJECT_ID")
            .or_else(|| non_empty("GOOGLE_CLOUD_PROJECT"))
            .ok_or_else(|| AppError::new(ErrorCode::InternalError, "FIRESTORE_PROJECT_ID must be set"))?;

        let timeout_secs = match non_empty("FIRESTORE_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| {
                AppError::new(
                    ErrorCode::InternalError,
                    format!("FIRESTORE_TIMEOUT_SECS '{raw}' is not a number of seconds"),
                )
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            project_id,
            database_id: non_empty("FIRESTORE_DATABASE_ID").unwrap_or_else(|| DEFAULT_DATABASE_ID.to_string()),
            base_url: non_empty("FIRESTORE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            access_token: non_empty("FIRESTORE_ACCESS_TOKEN"),
            emulator_host: non_empty("FIRESTORE_EMULATOR_HOST"),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    pub fn with_database_id(mut self, database_id: impl Into<String>) -> Self {
        self.database_id = database_id.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// `host:port` de l'émulateur local ; prend le pas sur `base_url` et les credentials.
    pub fn with_emulator_host(mut self, host: impl Into<String>) -> Self {
        self.emulator_host = Some(host.into());
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn build(self) -> AppResult<FirestoreContext> {
        FirestoreContext::restore(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    }

    #[test]
    fn test_project_falls_back_to_google_cloud_project() {
        let builder = FirestoreContextBuilder::from_lookup(lookup(&[("GOOGLE_CLOUD_PROJECT", "gcp-project")])).unwrap();

        assert_eq!(builder.project_id, "gcp-project");
        assert_eq!(builder.database_id, DEFAULT_DATABASE_ID);
        assert_eq!(builder.base_url, DEFAULT_BASE_URL);
        assert_eq!(builder.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_explicit_project_wins_over_fallback() {
        let builder = FirestoreContextBuilder::from_lookup(lookup(&[
            ("FIRESTORE_PROJECT_ID", "explicit"),
            ("GOOGLE_CLOUD_PROJECT", "gcp-project"),
            ("FIRESTORE_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(builder.project_id, "explicit");
        assert_eq!(builder.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_missing_project_is_rejected() {
        let err = FirestoreContextBuilder::from_lookup(lookup(&[])).err().unwrap();
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[test]
    fn test_empty_emulator_host_and_token_are_ignored() {
        let builder = FirestoreContextBuilder::from_lookup(lookup(&[
            ("FIRESTORE_PROJECT_ID", "p"),
            ("FIRESTORE_EMULATOR_HOST", ""),
            ("FIRESTORE_ACCESS_TOKEN", ""),
        ]))
        .unwrap();

        assert!(builder.emulator_host.is_none());
        assert!(builder.access_token.is_none());
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let result = FirestoreContextBuilder::from_lookup(lookup(&[
            ("FIRESTORE_PROJECT_ID", "p"),
            ("FIRESTORE_TIMEOUT_SECS", "ten"),
        ]));
        assert!(result.is_err());
    }
}
