// crates/shared-kernel/src/infrastructure/firestore/factories/firestore_config.rs

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub database_id: String,
    pub base_url: String,
    pub timeout: Duration,
    pub emulator: bool,
}
