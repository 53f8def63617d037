// crates/shared-kernel/src/infrastructure/firestore/mappers/firestore_error_mapper.rs

use serde::Deserialize;
use crate::domain::entities::EntityMetadata;
use crate::errors::{AppError, AppResult, DomainError, ErrorCode};

/// Corps d'erreur standard des APIs Google (`{"error": {...}}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirestoreErrorBody {
    pub error: FirestoreErrorStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirestoreErrorStatus {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// Traduit un statut gRPC canonique (ou à défaut le code HTTP) en AppError.
pub(crate) fn app_error_from_status(http_status: u16, body: &FirestoreErrorBody) -> AppError {
    let message = if body.error.message.is_empty() {
        format!("Firestore responded with HTTP {http_status}")
    } else {
        body.error.message.clone()
    };

    let code = match body.error.status.as_str() {
        "ALREADY_EXISTS" => ErrorCode::AlreadyExists,
        "NOT_FOUND" => ErrorCode::NotFound,
        "FAILED_PRECONDITION" | "ABORTED" => ErrorCode::ConcurrencyConflict,
        "UNAUTHENTICATED" => ErrorCode::Unauthorized,
        "PERMISSION_DENIED" => ErrorCode::Forbidden,
        "UNAVAILABLE" | "DEADLINE_EXCEEDED" | "RESOURCE_EXHAUSTED" | "INTERNAL" => {
            ErrorCode::ServiceUnavailable
        }
        "" => match http_status {
            401 => ErrorCode::Unauthorized,
            403 => ErrorCode::Forbidden,
            404 => ErrorCode::NotFound,
            409 => ErrorCode::AlreadyExists,
            429 | 500..=599 => ErrorCode::ServiceUnavailable,
            _ => ErrorCode::InfrastructureFailure,
        },
        // INVALID_ARGUMENT (clé malformée) et le reste : échec d'écriture
        _ => ErrorCode::InfrastructureFailure,
    };

    AppError::new(code, message).with_details(serde_json::json!({
        "http_status": http_status,
        "status": body.error.status,
    }))
}

pub trait FirestoreErrorExt<T> {
    /// Conversion contextualisée : l'entité et la clé apparaissent dans l'erreur domaine.
    fn map_domain<E: EntityMetadata>(self, id: &str) -> Result<T, DomainError>;
}

impl<T> FirestoreErrorExt<T> for AppResult<T> {
    fn map_domain<E: EntityMetadata>(self, id: &str) -> Result<T, DomainError> {
        self.map_err(|e| match e.code {
            ErrorCode::AlreadyExists => E::already_exists("id", id),
            ErrorCode::NotFound => E::not_found(id),
            ErrorCode::ConcurrencyConflict => DomainError::ConcurrencyConflict {
                reason: format!("Precondition failed on {} '{}': {}", E::entity_name(), id, e.message),
            },
            _ => DomainError::from(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Thing;
    impl EntityMetadata for Thing {
        fn entity_name() -> &'static str {
            "Thing"
        }
    }

    fn body(status: &str) -> FirestoreErrorBody {
        FirestoreErrorBody {
            error: FirestoreErrorStatus {
                code: 0,
                message: "boom".into(),
                status: status.into(),
            },
        }
    }

    #[test]
    fn test_already_exists_status() {
        let err = app_error_from_status(409, &body("ALREADY_EXISTS"));
        assert_eq!(err.code, ErrorCode::AlreadyExists);
    }

    #[test]
    fn test_invalid_argument_is_a_write_failure() {
        let err = app_error_from_status(400, &body("INVALID_ARGUMENT"));
        assert_eq!(err.code, ErrorCode::InfrastructureFailure);
        assert_eq!(DomainError::from(err), DomainError::Infrastructure("boom".into()));
    }

    #[test]
    fn test_http_status_fallback_without_body() {
        let err = app_error_from_status(503, &FirestoreErrorBody::default());
        assert_eq!(err.code, ErrorCode::ServiceUnavailable);
        assert!(err.message.contains("503"));
    }

    #[test]
    fn test_map_domain_names_the_entity() {
        let result: AppResult<()> = Err(AppError::new(ErrorCode::AlreadyExists, "exists"));
        let mapped = result.map_domain::<Thing>("abc");

        assert_eq!(
            mapped,
            Err(DomainError::AlreadyExists { entity: "Thing", field: "id", value: "abc".into() })
        );
    }
}
