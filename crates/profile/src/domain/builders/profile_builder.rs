// crates/profile/src/domain/builders/profile_builder.rs

use crate::domain::entities::Profile;
use crate::domain::value_objects::{CoinBalance, CreatedAt, DisplayName, Email, UserId};

pub struct ProfileBuilder {
    user_id: UserId,
    email: Option<Email>,
    display_name: Option<DisplayName>,
    coin: CoinBalance,
    created_at: CreatedAt,
}

impl ProfileBuilder {
    /// Chemin 1 : CREATION (Via Use Case)
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
            display_name: None,
            coin: CoinBalance::initial(),
            created_at: CreatedAt::ServerTimestamp,
        }
    }

    /// Chemin 2 : RESTAURATION (Via Infrastructure / Stub)
    pub fn restore(
        user_id: UserId,
        email: Option<Email>,
        display_name: Option<DisplayName>,
        coin: CoinBalance,
        created_at: CreatedAt,
    ) -> Profile {
        Profile {
            user_id,
            email,
            display_name,
            coin,
            created_at,
        }
    }

    pub fn email(mut self, email: Option<Email>) -> Self {
        self.email = email;
        self
    }

    pub fn display_name(mut self, display_name: Option<DisplayName>) -> Self {
        self.display_name = display_name;
        self
    }

    pub fn build(self) -> Profile {
        Profile {
            user_id: self.user_id,
            email: self.email,
            display_name: self.display_name,
            coin: self.coin,
            created_at: self.created_at,
        }
    }
}
