// crates/profile/src/infrastructure/bootstrap/mod.rs

mod provisioner;
mod provisioner_config;

pub use provisioner::run_provisioner;
pub use provisioner_config::ProvisionerConfig;
