// crates/shared-kernel/src/infrastructure/firestore/auth/mod.rs

mod access_token_provider;
mod metadata_token_provider;

pub use access_token_provider::{AccessTokenProvider, StaticTokenProvider};
pub use metadata_token_provider::MetadataTokenProvider;
