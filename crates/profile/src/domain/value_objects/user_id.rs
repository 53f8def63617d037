// crates/profile/src/domain/value_objects/user_id.rs

use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Identifiant fourni par le fournisseur d'identité (uid), copié tel quel.
/// Il sert directement de clé de document : les règles d'ID du store s'appliquent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(String);

impl UserId {
    /// Limite de taille d'un ID de document Firestore
    pub const MAX_BYTES: usize = 1500;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let id = Self(value.into());
        id.validate()?;
        Ok(id)
    }

    /// Reconstruction rapide (Infrastructure)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn invalid(reason: impl Into<String>) -> DomainError {
        DomainError::Validation {
            field: "uid",
            reason: reason.into(),
        }
    }
}

impl ValueObject for UserId {
    fn validate(&self) -> Result<()> {
        let raw = self.0.as_str();

        if raw.is_empty() {
            return Err(Self::invalid("User id cannot be empty"));
        }

        if raw.len() > Self::MAX_BYTES {
            return Err(Self::invalid(format!("User id too long (max {} bytes)", Self::MAX_BYTES)));
        }

        if raw.contains('/') {
            return Err(Self::invalid("User id cannot contain '/'"));
        }

        if raw == "." || raw == ".." {
            return Err(Self::invalid("User id cannot be '.' or '..'"));
        }

        // IDs réservés par le store
        if raw.len() >= 4 && raw.starts_with("__") && raw.ends_with("__") {
            return Err(Self::invalid("User id cannot match __.*__"));
        }

        Ok(())
    }
}

// --- CONVERTISSEURS ---

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uid_is_kept_verbatim() {
        let id = UserId::try_new(" Abc123 ").unwrap();
        assert_eq!(id.as_str(), " Abc123 ");
    }

    #[test]
    fn test_empty_uid_is_rejected() {
        assert!(matches!(
            UserId::try_new(""),
            Err(DomainError::Validation { field: "uid", .. })
        ));
    }

    #[test]
    fn test_malformed_keys_are_rejected() {
        for raw in ["users/abc", ".", "..", "__reserved__"] {
            assert!(UserId::try_new(raw).is_err(), "{raw} should be rejected");
        }
        assert!(UserId::try_new("a".repeat(UserId::MAX_BYTES + 1)).is_err());
    }

    #[test]
    fn test_uid_at_size_limit_is_accepted() {
        let id = UserId::try_new("a".repeat(UserId::MAX_BYTES)).unwrap();
        assert_eq!(id.as_str().len(), UserId::MAX_BYTES);

        // Limite en octets, pas en caractères
        let multibyte = "é".repeat(UserId::MAX_BYTES / 2 + 1);
        assert!(UserId::try_new(multibyte).is_err());
    }

    #[test]
    fn test_short_underscores_are_allowed() {
        assert!(UserId::try_new("__").is_ok());
        assert!(UserId::try_new("___").is_ok());
    }
}
