// crates/profile/src/infrastructure/firestore/repositories/firestore_profile_repository.rs

use std::sync::Arc;
use async_trait::async_trait;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::firestore::{FirestoreClient, FirestoreErrorExt};
use crate::domain::entities::Profile;
use crate::domain::repositories::{ProfileRepository, WriteMode, WriteReceipt};
use crate::infrastructure::firestore::mappers::ProfileDocumentMapper;

pub struct FirestoreProfileRepository {
    client: Arc<FirestoreClient>,
    collection: String,
}

impl FirestoreProfileRepository {
    pub fn new(client: Arc<FirestoreClient>, collection: impl Into<String>) -> Self {
        Self {
            client,
            collection: collection.into(),
        }
    }
}

#[async_trait]
impl ProfileRepository for FirestoreProfileRepository {
    async fn save_default(&self, profile: &Profile, mode: WriteMode) -> Result<WriteReceipt> {
        let uid = profile.user_id().as_str();
        let document_name = self.client.document_name(&self.collection, uid);
        let write = ProfileDocumentMapper::to_write(document_name, profile, mode);

        let response = self
            .client
            .commit(vec![write])
            .await
            .map_domain::<Profile>(uid)?;

        Ok(ProfileDocumentMapper::to_receipt(profile, response.write_results.first()))
    }
}
