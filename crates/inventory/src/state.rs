//! Application state with repository-based storage.
//!
//! The state is built once at startup and cloned into every request. Its only
//! resource is the storage handle, a repository trait object selected by
//! feature flag.

use std::sync::Arc;

use inventory_core::storage::ItemRepository;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Item repository (long-lived storage handle).
    pub repo: Arc<dyn ItemRepository>,
    /// Literal path of the items collection.
    pub collection_path: Arc<str>,
}

impl AppState {
    /// Creates an AppState around an existing repository.
    pub fn with_repository(repo: Arc<dyn ItemRepository>, config: &Config) -> Self {
        Self {
            repo,
            collection_path: Arc::from(config.collection_path.as_str()),
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory item storage");
            Ok(Self::with_repository(
                Arc::new(InMemoryRepository::new()),
                config,
            ))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::from_env(config.table_name.clone()).await;
            tracing::info!(table = %repo.table_name(), "Using DynamoDB item storage");
            Ok(Self::with_repository(Arc::new(repo), config))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
