// crates/shared-kernel/src/infrastructure/firestore/documents/mod.rs

mod firestore_value;
mod firestore_write;

pub use firestore_value::FirestoreValue;
pub use firestore_write::{
    CommitRequest, CommitResponse, Document, FieldTransform, Precondition, ServerValue, Write,
    WriteResult,
};
