// crates/profile/tests/common/mod.rs

#![allow(dead_code, unused_imports)]

mod setup_firestore_mock;
mod setup_provisioner;

pub use setup_firestore_mock::{commit_ok_body, commit_path, setup_firestore_repository, PROJECT_ID};
pub use setup_provisioner::setup_stub_router;
