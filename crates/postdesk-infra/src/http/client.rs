//! reqwest-backed implementation of the `posts` REST contract.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use postdesk_core::domain::{NewPost, Post, PostId};
use postdesk_core::ports::{ApiError, PostsApi};
use postdesk_shared::ErrorResponse;
use postdesk_shared::dto::{ListPostsQuery, PostResponse, UpdateStatusRequest};

use crate::convert::{new_post_to_dto, post_from_dto};

/// HTTP backend configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Server root, e.g. `http://localhost:8080`. `/posts` is appended.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

const DEFAULT_TIMEOUT_SECS: u64 = 10;

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("POSTS_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            timeout: parse_timeout(std::env::var("POSTS_API_TIMEOUT_SECS").ok().as_deref()),
        }
    }
}

/// Whole seconds, at least one. Anything else falls back to the default.
fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Posts collection reached over REST/JSON.
pub struct HttpPostsApi {
    client: Client,
    collection_url: String,
}

impl HttpPostsApi {
    pub fn new(config: HttpConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let collection_url = format!("{}/posts", config.base_url.trim_end_matches('/'));
        tracing::info!(url = %collection_url, "Posts API client ready");

        Ok(Self {
            client,
            collection_url,
        })
    }

    /// Create from environment configuration.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(HttpConfig::from_env())
    }

    fn item_url(&self, id: PostId) -> String {
        format!("{}/{}", self.collection_url, id)
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Turn a non-2xx answer into `ApiError::Status`, preferring the problem
/// details summary when the body is one.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<ErrorResponse>(&body)
        .map(|problem| problem.summary())
        .unwrap_or(body);

    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list(&self, title_like: &str) -> Result<Vec<Post>, ApiError> {
        let query = ListPostsQuery {
            title_like: Some(title_like.to_string()),
        };

        let response = self
            .client
            .get(&self.collection_url)
            .query(&query)
            .send()
            .await
            .map_err(transport)?;

        let posts: Vec<PostResponse> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(posts.into_iter().map(post_from_dto).collect())
    }

    async fn create(&self, post: NewPost) -> Result<Post, ApiError> {
        let response = self
            .client
            .post(&self.collection_url)
            .json(&new_post_to_dto(post))
            .send()
            .await
            .map_err(transport)?;

        let created: PostResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(post_from_dto(created))
    }

    async fn set_status(&self, id: PostId, status: bool) -> Result<(), ApiError> {
        let response = self
            .client
            .patch(self.item_url(id))
            .json(&UpdateStatusRequest { status })
            .send()
            .await
            .map_err(transport)?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(transport)?;

        ensure_success(response).await?;
        Ok(())
    }
}
