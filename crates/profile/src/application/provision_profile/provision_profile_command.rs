// crates/profile/src/application/provision_profile/provision_profile_command.rs

use crate::domain::value_objects::{DisplayName, Email, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionProfileCommand {
    pub user_id: UserId,
    pub email: Option<Email>,
    pub display_name: Option<DisplayName>,
}
