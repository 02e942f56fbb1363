//! Posts collection port - abstraction over the remote `posts` resource.

use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};

/// Remote posts collection (REST backend, in-memory stand-in, test fake).
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// List records whose title contains `title_like`, in server order.
    /// Matching rules belong to the backend.
    async fn list(&self, title_like: &str) -> Result<Vec<Post>, ApiError>;

    /// Create a record. The returned post carries the assigned id.
    async fn create(&self, post: NewPost) -> Result<Post, ApiError>;

    /// Partially update a record, touching only `status`.
    async fn set_status(&self, id: PostId, status: bool) -> Result<(), ApiError>;

    /// Remove a record.
    async fn delete(&self, id: PostId) -> Result<(), ApiError>;
}

/// Posts API errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Server answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn not_found(id: PostId) -> Self {
        ApiError::Status {
            status: 404,
            body: format!("post {id} not found"),
        }
    }
}
