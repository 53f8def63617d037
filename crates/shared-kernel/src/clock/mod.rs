// crates/shared-kernel/src/clock/mod.rs

mod system;

use chrono::{DateTime, Utc};

pub use system::SystemClock;

/// Source de temps injectable (les stubs de test fournissent la leur).
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
