// crates/profile/src/application/provision_profile/provision_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;
use crate::application::provision_profile::ProvisionProfileCommand;
use crate::domain::entities::{Profile, ProvisionedProfile};
use crate::domain::repositories::{ProfileRepository, WriteMode};
use crate::domain::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum ProvisionOutcome {
    /// Le document a été écrit et acquitté par le store
    Provisioned(ProvisionedProfile),
    /// `CreateIfAbsent` uniquement : le document existait déjà, rien n'a été modifié
    AlreadyProvisioned(UserId),
}

/// Pas de boucle de retry locale : la plateforme redélivre l'événement
/// tant que l'invocation n'a pas réussi.
pub struct ProvisionProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
    write_mode: WriteMode,
}

impl ProvisionProfileUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self {
            repo,
            write_mode: WriteMode::default(),
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub async fn execute(&self, command: ProvisionProfileCommand) -> Result<ProvisionOutcome> {
        // 1. Instanciation via le domaine
        let profile = Profile::new_default(command.user_id, command.email, command.display_name);

        // 2. Une seule écriture, attendue jusqu'à l'acquittement
        match self.repo.save_default(&profile, self.write_mode).await {
            Ok(receipt) => {
                let profile = match receipt.created_at {
                    Some(ts) => profile.with_server_time(ts),
                    None => profile,
                };

                tracing::info!(
                    uid = %profile.user_id(),
                    mode = %self.write_mode,
                    "✅ Profile provisioned"
                );

                Ok(ProvisionOutcome::Provisioned(ProvisionedProfile {
                    profile,
                    update_time: receipt.update_time,
                }))
            }

            // Doublon attendu en livraison at-least-once : on acquitte sans écraser
            Err(e) if e.is_already_exists() && self.write_mode == WriteMode::CreateIfAbsent => {
                tracing::warn!(uid = %profile.user_id(), "Profile already provisioned, keeping existing document");
                Ok(ProvisionOutcome::AlreadyProvisioned(profile.user_id().clone()))
            }

            Err(e) => {
                tracing::error!(uid = %profile.user_id(), error = %e, "❌ Profile write failed");
                Err(e)
            }
        }
    }
}
