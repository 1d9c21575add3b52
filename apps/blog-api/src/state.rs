//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostStore;

/// Shared application state.
///
/// Built once at startup; every worker gets a clone pointing at the same store.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with an empty in-memory store.
    pub fn new() -> Self {
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostStore::new());

        tracing::info!("Application state initialized");

        Self { posts }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
