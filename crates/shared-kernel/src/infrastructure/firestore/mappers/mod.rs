// crates/shared-kernel/src/infrastructure/firestore/mappers/mod.rs

mod firestore_error_mapper;

pub use firestore_error_mapper::{FirestoreErrorBody, FirestoreErrorExt, FirestoreErrorStatus};
pub(crate) use firestore_error_mapper::app_error_from_status;
