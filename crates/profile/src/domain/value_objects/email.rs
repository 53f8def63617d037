// crates/profile/src/domain/value_objects/email.rs

use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::Result;

/// Email tel que publié par le fournisseur d'identité.
/// Pas de normalisation : le fournisseur reste propriétaire de la validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Email {
    fn from(value: String) -> Self {
        Self(value)
    }
}
