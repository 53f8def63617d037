// crates/shared-kernel/src/infrastructure/mod.rs

pub mod telemetry;

#[cfg(feature = "firestore")]
pub mod firestore;
