// crates/shared-kernel/src/infrastructure/firestore/mod.rs

pub mod auth;
pub mod documents;
pub mod factories;
mod firestore_client;
mod mappers;

pub use firestore_client::FirestoreClient;
pub use mappers::{FirestoreErrorBody, FirestoreErrorExt, FirestoreErrorStatus};
