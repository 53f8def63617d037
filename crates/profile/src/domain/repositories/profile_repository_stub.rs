// crates/profile/src/domain/repositories/profile_repository_stub.rs

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::clock::{Clock, SystemClock};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Profile;
use crate::domain::repositories::{ProfileRepository, WriteMode, WriteReceipt};

/// Document tel qu'il serait lu dans le store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredProfile {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub coin: i64,
    pub created_at: DateTime<Utc>,
}

/// Store en mémoire : l'horloge injectée joue le rôle de l'horloge serveur.
pub struct ProfileRepositoryStub {
    documents: Mutex<HashMap<String, StoredProfile>>,
    error_to_return: Mutex<Option<DomainError>>,
    writes: AtomicUsize,
    clock: Arc<dyn Clock>,
}

impl Default for ProfileRepositoryStub {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl ProfileRepositoryStub {
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            error_to_return: Mutex::new(None),
            writes: AtomicUsize::new(0),
            clock,
        }
    }

    /// Toute écriture suivante échoue avec `error`.
    pub fn fail_with(&self, error: DomainError) {
        *lock(&self.error_to_return) = Some(error);
    }

    pub fn recover(&self) {
        *lock(&self.error_to_return) = None;
    }

    /// Simule un collaborateur externe qui modifie le document.
    pub fn put(&self, id: &str, document: StoredProfile) {
        lock(&self.documents).insert(id.to_string(), document);
    }

    pub fn get(&self, id: &str) -> Option<StoredProfile> {
        lock(&self.documents).get(id).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.documents).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nombre d'écritures effectivement appliquées
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryStub {
    async fn save_default(&self, profile: &Profile, mode: WriteMode) -> Result<WriteReceipt> {
        if let Some(err) = lock(&self.error_to_return).clone() {
            return Err(err);
        }

        let key = profile.user_id().as_str().to_string();
        let mut documents = lock(&self.documents);

        if mode == WriteMode::CreateIfAbsent && documents.contains_key(&key) {
            return Err(Profile::already_exists("id", &key));
        }

        let now = self.clock.now();
        let created_at = profile.created_at().resolved().unwrap_or(now);

        documents.insert(
            key,
            StoredProfile {
                email: profile.email().map(|e| e.as_str().to_string()),
                display_name: profile.display_name().map(|d| d.as_str().to_string()),
                coin: profile.coin().value(),
                created_at,
            },
        );
        self.writes.fetch_add(1, Ordering::SeqCst);

        Ok(WriteReceipt {
            created_at: Some(created_at),
            update_time: Some(now),
        })
    }
}
