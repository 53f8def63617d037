// crates/shared-kernel/src/infrastructure/firestore/factories/mod.rs

mod firestore_config;
mod firestore_context;
mod firestore_context_builder;

pub use firestore_config::FirestoreConfig;
pub use firestore_context::FirestoreContext;
pub use firestore_context_builder::FirestoreContextBuilder;
