// crates/profile/tests/common/setup_provisioner.rs

use std::sync::Arc;
use axum::Router;
use profile::application::provision_profile::ProvisionProfileUseCase;
use profile::domain::repositories::{ProfileRepositoryStub, WriteMode};
use profile::infrastructure::api::http::router;
use profile::infrastructure::events::AccountEventConsumer;

pub fn setup_stub_router(mode: WriteMode) -> (Router, Arc<ProfileRepositoryStub>) {
    let repo = Arc::new(ProfileRepositoryStub::default());
    let use_case = Arc::new(ProvisionProfileUseCase::new(repo.clone()).with_write_mode(mode));
    let consumer = Arc::new(AccountEventConsumer::new(use_case));

    (router(consumer), repo)
}
