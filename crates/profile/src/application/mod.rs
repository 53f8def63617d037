// crates/profile/src/application/mod.rs

pub mod provision_profile;
