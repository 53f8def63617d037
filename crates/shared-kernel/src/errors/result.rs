// crates/shared-kernel/src/errors/result.rs

use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Entités, Use Cases, Repositories (Ports).
/// Il force le développeur à traduire les erreurs techniques en erreurs métier.
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : Client Firestore, API HTTP, bootstrap du service.
pub type AppResult<T> = std::result::Result<T, AppError>;

