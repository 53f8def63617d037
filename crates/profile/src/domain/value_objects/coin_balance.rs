// crates/profile/src/domain/value_objects/coin_balance.rs

use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::Result;

/// Solde de pièces du profil. Seule la valeur initiale est du ressort de ce service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CoinBalance(i64);

impl CoinBalance {
    pub const INITIAL: CoinBalance = CoinBalance(0);

    pub fn initial() -> Self {
        Self::INITIAL
    }

    /// Pour la reconstruction depuis le store
    pub fn from_raw(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl ValueObject for CoinBalance {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl From<CoinBalance> for i64 {
    fn from(balance: CoinBalance) -> Self {
        balance.0
    }
}
