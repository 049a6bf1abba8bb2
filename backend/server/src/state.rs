use std::sync::Arc;

use registry::CityRegistry;

use super::{config::Config, database::CaseStore, error::StorageError, utils::IdGenerator};

pub struct AppState {
    pub config: Config,
    pub store: CaseStore,
    pub cities: CityRegistry,
    pub ids: IdGenerator,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Arc<Self>, StorageError> {
        let store = CaseStore::connect(&config.database_url, config.max_connections).await?;

        Self::resume(config, store).await
    }

    /// State over an existing store whose ids continue after the largest one already saved.
    pub async fn resume(config: Config, store: CaseStore) -> Result<Arc<Self>, StorageError> {
        let ids = match store.latest_id().await? {
            Some(last) => IdGenerator::resume_after(last),
            None => IdGenerator::new(),
        };

        Ok(Self::build(config, store, ids))
    }

    pub fn with_store(config: Config, store: CaseStore) -> Arc<Self> {
        Self::build(config, store, IdGenerator::new())
    }

    fn build(config: Config, store: CaseStore, ids: IdGenerator) -> Arc<Self> {
        Arc::new(Self {
            config,
            store,
            cities: CityRegistry::new(),
            ids,
        })
    }
}
