// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Cas : Entité introuvable (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 2. Cas : Document déjà présent (409) - create conditionnel
            DomainError::AlreadyExists {
                entity,
                field,
                value,
            } => Self::new(
                ErrorCode::AlreadyExists,
                format!("{entity} with {field} '{value}' already exists"),
            ),

            // 3. Cas : Précondition échouée (409)
            DomainError::ConcurrencyConflict { reason } => {
                Self::new(ErrorCode::ConcurrencyConflict, reason)
            }

            // 4. Cas : Validation (400)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            // 5. Cas : Credentials refusés (401)
            DomainError::Unauthorized { reason } => Self::new(ErrorCode::Unauthorized, reason),

            // 6. Cas : Droits insuffisants (403)
            DomainError::Forbidden { reason } => Self::new(ErrorCode::Forbidden, reason),

            // 7. Cas : Store indisponible (503) - la plateforme redélivrera
            DomainError::Infrastructure(_) => Self::new(
                ErrorCode::ServiceUnavailable,
                "The document store is unavailable. The event will be retried.",
            ),

            // 8. Cas : Erreurs internes (500), détail masqué au client
            DomainError::Internal(_) => Self::new(
                ErrorCode::InternalError,
                "An unexpected error occurred. Please try again later.",
            ),
        }
    }
}

#[cfg(feature = "firestore")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // En interne, on log l'erreur réelle pour le debugging
        tracing::error!("Firestore transport error: {:?}", err);

        if err.is_timeout() || err.is_connect() {
            return Self::new(ErrorCode::ServiceUnavailable, format!("Firestore unreachable: {err}"));
        }

        Self::new(ErrorCode::InfrastructureFailure, format!("Firestore request failed: {err}"))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_keeps_field_in_details() {
        let app: AppError = DomainError::Validation {
            field: "uid",
            reason: "cannot be empty".into(),
        }
        .into();

        assert_eq!(app.code, ErrorCode::ValidationFailed);
        assert_eq!(app.details.unwrap()["field"], "uid");
    }

    #[test]
    fn test_infrastructure_detail_is_masked() {
        let app: AppError = DomainError::Infrastructure("token=secret".into()).into();
        assert_eq!(app.code, ErrorCode::ServiceUnavailable);
        assert!(!app.message.contains("secret"));
    }
}
