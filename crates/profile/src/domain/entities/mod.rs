// crates/profile/src/domain/entities/mod.rs

mod profile;

pub use profile::{Profile, ProvisionedProfile};
