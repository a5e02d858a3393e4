use super::database::Database;
use super::objects::ObjectStore;
use super::StoreError;
use crate::config::ServerConfig;

/// Shared handler state, injected as `web::Data<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub objects: ObjectStore,
    pub database: Database,
}

impl AppState {
    /// Builds the stores described by `config` and prepares them on disk.
    pub fn bootstrap(config: &ServerConfig) -> Result<Self, StoreError> {
        let state = Self {
            objects: ObjectStore::new(&config.storage_dir, config.max_upload_bytes),
            database: Database::new(&config.database_path),
        };
        state.objects.init()?;
        state.database.init()?;
        Ok(state)
    }
}
