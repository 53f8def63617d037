// crates/profile/src/domain/value_objects/display_name.rs

use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::Result;

/// Nom d'affichage recopié depuis le compte, sans nettoyage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for DisplayName {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DisplayName {
    fn from(value: String) -> Self {
        Self(value)
    }
}
