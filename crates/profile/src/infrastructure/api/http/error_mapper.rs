// crates/profile/src/infrastructure/api/http/error_mapper.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared_kernel::errors::{AppError, DomainError};

/// Le code HTTP pilote la redelivery de la plateforme : tout non-2xx sera retenté.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
            DomainError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::AlreadyExists { .. } | DomainError::ConcurrencyConflict { .. } => StatusCode::CONFLICT,
            DomainError::Infrastructure(_) => StatusCode::SERVICE_UNAVAILABLE,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if self.0.is_retryable() {
            tracing::error!(%status, error = %self.0, "Event handling failed, platform will redeliver");
        } else {
            tracing::warn!(%status, error = %self.0, "Event rejected");
        }

        (status, Json(AppError::from(self.0))).into_response()
    }
}
