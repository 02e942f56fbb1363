//! Application state - shared across all handlers.

use std::sync::Arc;

use postdesk_core::domain::Post;
use postdesk_core::ports::PostsApi;
use postdesk_infra::InMemoryPostsApi;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostsApi>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostsApi>) -> Self {
        Self { posts }
    }

    /// State backed by an in-memory collection starting with `seed`.
    pub fn seeded(seed: Vec<Post>) -> Self {
        Self::new(Arc::new(InMemoryPostsApi::with_posts(seed)))
    }
}
