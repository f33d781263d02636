/// Shared application state
use crate::{
    config::{StorageBackend, StorageSettings},
    error::Result,
    services::AuthService,
};
use profiler_core::StorageContext;
use profiler_importer::ProfileImporter;
use profiler_storage::{KvStorageContext, MemoryStore, RedisOptions, RedisStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn StorageContext>,
    pub importer: Arc<ProfileImporter>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(storage: Arc<dyn StorageContext>, auth_service: Arc<AuthService>) -> Self {
        let importer = Arc::new(ProfileImporter::new(Arc::clone(&storage)));
        Self {
            storage,
            importer,
            auth_service,
        }
    }
}

/// Open the configured key-value backend
pub async fn open_storage(settings: &StorageSettings) -> Result<Arc<dyn StorageContext>> {
    let storage = match settings.backend {
        StorageBackend::Redis => {
            let options = RedisOptions {
                connection_timeout: settings.connection_timeout(),
                retries: settings.retries,
            };
            let store = RedisStore::connect(&settings.redis_url, &options).await?;
            KvStorageContext::new(Arc::new(store))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on exit");
            KvStorageContext::new(Arc::new(MemoryStore::new()))
        }
    };

    tracing::info!("Storage backend: {}", storage.store().backend_name());
    Ok(Arc::new(storage))
}
