//! In-memory posts collection - backs the mock server and offline demos.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use postdesk_core::domain::{NewPost, Post, PostId};
use postdesk_core::ports::{ApiError, PostsApi};

struct Store {
    posts: Vec<Post>,
    /// `None` once `u64::MAX` has been handed out.
    next_id: Option<u64>,
}

/// Posts collection held in a `Vec` behind an async RwLock.
///
/// `title_like` matches case-insensitively anywhere in the title, the way
/// json-server style backends filter. Ids are assigned sequentially after
/// the highest seeded id.
/// Note: Data is lost on process restart.
pub struct InMemoryPostsApi {
    store: RwLock<Store>,
    offline: AtomicBool,
}

impl InMemoryPostsApi {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Start from existing records, keeping their order and ids.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = match posts.iter().map(|p| p.id.0).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self {
            store: RwLock::new(Store { posts, next_id }),
            offline: AtomicBool::new(false),
        }
    }

    /// While offline every call fails with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.posts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn ensure_online(&self) -> Result<(), ApiError> {
        if self.offline.load(Ordering::Relaxed) {
            return Err(ApiError::Transport("backend offline".to_string()));
        }
        Ok(())
    }
}

impl Default for InMemoryPostsApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostsApi for InMemoryPostsApi {
    async fn list(&self, title_like: &str) -> Result<Vec<Post>, ApiError> {
        self.ensure_online()?;

        let needle = title_like.to_lowercase();
        let store = self.store.read().await;

        Ok(store
            .posts
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create(&self, post: NewPost) -> Result<Post, ApiError> {
        self.ensure_online()?;

        let mut store = self.store.write().await;
        let Some(next) = store.next_id else {
            tracing::error!("Post ids exhausted");
            return Err(ApiError::Status {
                status: 500,
                body: "no post ids left".to_string(),
            });
        };
        let id = PostId(next);
        store.next_id = next.checked_add(1);

        let post = post.into_post(id);
        store.posts.push(post.clone());

        tracing::debug!(post_id = %id, "Post stored");
        Ok(post)
    }

    async fn set_status(&self, id: PostId, status: bool) -> Result<(), ApiError> {
        self.ensure_online()?;

        let mut store = self.store.write().await;
        let post = store
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::not_found(id))?;
        post.status = status;
        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), ApiError> {
        self.ensure_online()?;

        let mut store = self.store.write().await;
        let before = store.posts.len();
        store.posts.retain(|p| p.id != id);

        if store.posts.len() == before {
            return Err(ApiError::not_found(id));
        }
        Ok(())
    }
}
