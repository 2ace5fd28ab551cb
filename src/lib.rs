pub mod advisor;
pub mod backend;
pub mod config;
pub mod store;

pub use advisor::{DestinationCatalog, TravelRequest, TripAdvisory};
pub use config::Config;
pub use store::WorkspaceStore;

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::backend::{FileBackend, StorageBackend};

/// Application context: configuration, the workspace store, and the
/// destination catalog. Constructed once at startup and passed by
/// reference to consumers; dropping it is shutdown (every mutation is
/// durably written before its call returns, so there is nothing to
/// flush).
pub struct Workspace {
    pub config: Config,
    pub store: WorkspaceStore,
    pub catalog: DestinationCatalog,
}

impl Workspace {
    /// Open the file backend under the configured data directory, load
    /// every collection, and parse the embedded catalog.
    pub async fn initialize(config: Config) -> Result<Self> {
        let backend = FileBackend::new(&config.storage.data_dir)
            .await
            .context("Failed to open workspace storage")?;
        Self::with_backend(config, Arc::new(backend)).await
    }

    /// Assemble the context over an explicit backend (used by tests and by
    /// hosts that bring their own storage medium).
    pub async fn with_backend(config: Config, backend: Arc<dyn StorageBackend>) -> Result<Self> {
        let catalog =
            DestinationCatalog::load().context("Embedded destination catalog is invalid")?;
        let store = WorkspaceStore::initialize(backend).await;
        Ok(Self {
            config,
            store,
            catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    #[tokio::test]
    async fn workspace_assembles_over_a_memory_backend() {
        let workspace = Workspace::with_backend(Config::default(), Arc::new(MemoryBackend::new()))
            .await
            .unwrap();

        assert!(workspace.store.user().await.is_none());
        assert!(workspace.catalog.find_by_id("paris").is_some());
    }

    #[tokio::test]
    async fn workspace_persists_through_the_file_backend() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            storage: config::StorageConfig {
                data_dir: dir.path().to_path_buf(),
            },
            ..Config::default()
        };

        let workspace = Workspace::initialize(config.clone()).await.unwrap();
        workspace
            .store
            .set_onboarding_complete(true)
            .await
            .unwrap();
        drop(workspace);

        let reopened = Workspace::initialize(config).await.unwrap();
        assert!(reopened.store.onboarding_complete().await);
    }
}
