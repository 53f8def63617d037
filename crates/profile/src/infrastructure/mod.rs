// crates/profile/src/infrastructure/mod.rs

pub mod api;
pub mod bootstrap;
pub mod events;
pub mod firestore;
