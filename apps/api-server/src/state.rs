//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostStore;
use quill_infra::{InMemoryPostStore, JsonFilePostStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Build the application state with the appropriate store.
    ///
    /// The JSON document named by the config is the source of truth. If it
    /// cannot be loaded the server still comes up, on an empty in-memory
    /// store, rather than refusing to start.
    pub async fn new(config: &AppConfig) -> Self {
        let posts: Arc<dyn PostStore> = match JsonFilePostStore::open(&config.data_file).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!(
                    "Failed to load {}: {}. Using in-memory fallback.",
                    config.data_file.display(),
                    e
                );
                Arc::new(InMemoryPostStore::new())
            }
        };

        tracing::info!("Application state initialized");

        Self { posts }
    }
}
