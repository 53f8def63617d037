// crates/profile/src/infrastructure/firestore/mod.rs

pub mod mappers;
pub mod repositories;
