// crates/profile/src/infrastructure/firestore/repositories/mod.rs

mod firestore_profile_repository;

pub use firestore_profile_repository::FirestoreProfileRepository;
