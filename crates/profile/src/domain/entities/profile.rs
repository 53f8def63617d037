// crates/profile/src/domain/entities/profile.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::EntityMetadata;

use crate::domain::builders::ProfileBuilder;
use crate::domain::value_objects::{CoinBalance, CreatedAt, DisplayName, Email, UserId};

/// Profil par défaut associé un-pour-un à un compte du fournisseur d'identité.
/// Ce service le crée, ne le modifie jamais ensuite.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub(crate) user_id: UserId,
    pub(crate) email: Option<Email>,
    pub(crate) display_name: Option<DisplayName>,
    pub(crate) coin: CoinBalance,
    pub(crate) created_at: CreatedAt,
}

impl Profile {
    /// Profil initial : solde à 0, horodatage laissé au serveur.
    pub fn new_default(
        user_id: UserId,
        email: Option<Email>,
        display_name: Option<DisplayName>,
    ) -> Self {
        ProfileBuilder::new(user_id)
            .email(email)
            .display_name(display_name)
            .build()
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn display_name(&self) -> Option<&DisplayName> {
        self.display_name.as_ref()
    }

    pub fn coin(&self) -> CoinBalance {
        self.coin
    }

    pub fn created_at(&self) -> CreatedAt {
        self.created_at
    }

    /// Fige l'horodatage renvoyé par le store après acquittement.
    pub fn with_server_time(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = CreatedAt::At(created_at);
        self
    }
}

impl EntityMetadata for Profile {
    fn entity_name() -> &'static str {
        "Profile"
    }
}

/// Résultat d'une écriture acquittée par le store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionedProfile {
    pub profile: Profile,
    pub update_time: Option<DateTime<Utc>>,
}
