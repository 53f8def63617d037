// crates/profile/src/domain/builders/mod.rs

mod profile_builder;

pub use profile_builder::ProfileBuilder;
