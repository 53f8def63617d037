// crates/profile/src/application/provision_profile/mod.rs

mod provision_profile_command;
mod provision_profile_use_case;


pub use provision_profile_command::ProvisionProfileCommand;
pub use provision_profile_use_case::{ProvisionOutcome, ProvisionProfileUseCase};
