// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;
use crate::errors::{AppError, ErrorCode};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String
    },

    #[error("{entity} already exists with {field} = '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String
    },

    /// Précondition d'écriture non respectée côté store
    #[error("Concurrency conflict: {reason}")]
    ConcurrencyConflict {
        reason: String
    },

    /// Credentials absents ou expirés vis-à-vis du store
    #[error("Unauthorized access: {reason}")]
    Unauthorized {
        reason: String
    },

    /// Identité valide mais droits insuffisants (règles IAM)
    #[error("Forbidden: {reason}")]
    Forbidden {
        reason: String
    },

    /// Erreur liée à l'infrastructure (Firestore indisponible, timeout, réseau)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Indique si une nouvelle livraison du même événement a une chance d'aboutir.
    /// Une entrée invalide échouera à l'identique à chaque redelivery.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Validation { .. } | Self::NotFound { .. })
    }
}

impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        match err.code {
            ErrorCode::NotFound => DomainError::NotFound {
                entity: "Resource",
                id: "unknown".into()
            },
            ErrorCode::AlreadyExists => DomainError::AlreadyExists {
                entity: "Resource",
                field: "id",
                value: err.message,
            },
            ErrorCode::ConcurrencyConflict => DomainError::ConcurrencyConflict { reason: err.message },
            ErrorCode::Unauthorized => DomainError::Unauthorized { reason: err.message },
            ErrorCode::Forbidden => DomainError::Forbidden { reason: err.message },
            ErrorCode::InfrastructureFailure | ErrorCode::ServiceUnavailable => {
                DomainError::Infrastructure(err.message)
            }
            ErrorCode::ValidationFailed | ErrorCode::InternalError => DomainError::Internal(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_not_retryable() {
        let err = DomainError::Validation { field: "uid", reason: "empty".into() };
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_infrastructure_is_retryable() {
        assert!(DomainError::Infrastructure("store unavailable".into()).is_retryable());
        assert!(DomainError::Forbidden { reason: "iam".into() }.is_retryable());
    }

    #[test]
    fn test_app_error_unavailable_maps_to_infrastructure() {
        let app = AppError::new(ErrorCode::ServiceUnavailable, "firestore down");
        assert_eq!(
            DomainError::from(app),
            DomainError::Infrastructure("firestore down".into())
        );
    }
}
