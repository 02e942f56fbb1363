//! Data Transfer Objects - request/response bodies of the `posts` resource.

use serde::{Deserialize, Serialize};

/// A post as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub date: String,
    pub status: bool,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub image: String,
    pub date: String,
    pub status: bool,
}

/// Body of `PATCH /posts/{id}`. Only the status is ever patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: bool,
}

/// Query string of `GET /posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_like: Option<String>,
}
