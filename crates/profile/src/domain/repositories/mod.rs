// crates/profile/src/domain/repositories/mod.rs

mod profile_repository;
mod profile_repository_stub;

pub use profile_repository::{ProfileRepository, WriteMode, WriteReceipt};
pub use profile_repository_stub::{ProfileRepositoryStub, StoredProfile};
