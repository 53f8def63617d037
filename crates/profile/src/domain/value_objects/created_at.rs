// crates/profile/src/domain/value_objects/created_at.rs

use chrono::{DateTime, Utc};

/// Horodatage de création. Tant que le store n'a pas acquitté l'écriture,
/// il reste une sentinelle : la valeur est attribuée par l'horloge du serveur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedAt {
    ServerTimestamp,
    At(DateTime<Utc>),
}

impl CreatedAt {
    pub fn is_server_assigned(&self) -> bool {
        matches!(self, Self::ServerTimestamp)
    }

    pub fn resolved(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::ServerTimestamp => None,
            Self::At(ts) => Some(*ts),
        }
    }
}

impl Default for CreatedAt {
    fn default() -> Self {
        Self::ServerTimestamp
    }
}
