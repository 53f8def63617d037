// crates/shared-kernel/src/domain/entities/entity.rs

use crate::errors::DomainError;

pub trait EntityMetadata {
    fn entity_name() -> &'static str;

    fn not_found<I: ToString>(id: I) -> DomainError {
        DomainError::NotFound {
            entity: Self::entity_name(),
            id: id.to_string(),
        }
    }

    fn already_exists<I: ToString>(field: &'static str, id: I) -> DomainError {
        DomainError::AlreadyExists {
            entity: Self::entity_name(),
            field,
            value: id.to_string(),
        }
    }
}
