// crates/profile/src/domain/repositories/profile_repository.rs

use std::fmt;
use std::str::FromStr;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Profile;

/// Politique d'écriture vis-à-vis d'un document déjà présent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// "set" complet : une redelivery rafraîchit `createdAt` et remet `coin` à 0
    #[default]
    Overwrite,
    /// Création conditionnelle : échoue en `AlreadyExists` si la clé existe
    CreateIfAbsent,
}

impl FromStr for WriteMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" | "set" => Ok(Self::Overwrite),
            "create_if_absent" | "create" => Ok(Self::CreateIfAbsent),
            other => Err(DomainError::Validation {
                field: "write_mode",
                reason: format!("Unknown write mode '{other}' (expected overwrite | create_if_absent)"),
            }),
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => f.write_str("overwrite"),
            Self::CreateIfAbsent => f.write_str("create_if_absent"),
        }
    }
}

/// Acquittement du store pour une écriture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteReceipt {
    /// Valeur effective de `createdAt` (horloge du serveur)
    pub created_at: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Écrit le profil à la clé `profile.user_id()`.
    /// Ne doit rendre `Ok` qu'une fois l'écriture durable côté store.
    async fn save_default(&self, profile: &Profile, mode: WriteMode) -> Result<WriteReceipt>;
}
