//! Server configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use postdesk_core::domain::Post;
use postdesk_infra::convert::post_from_dto;
use postdesk_shared::dto::PostResponse;

/// Mock server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON array of posts to start with.
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            seed_file: env::var("MOCK_SEED_FILE").ok().map(PathBuf::from),
        }
    }

    /// Read the seed file, if one is configured.
    pub fn load_seed(&self) -> anyhow::Result<Vec<Post>> {
        let Some(path) = &self.seed_file else {
            return Ok(Vec::new());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        parse_seed(&raw).with_context(|| format!("parsing seed file {}", path.display()))
    }
}

/// Accepts either a bare array or a json-server style `{"posts": [...]}` db.
pub fn parse_seed(raw: &str) -> anyhow::Result<Vec<Post>> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Seed {
        Bare(Vec<PostResponse>),
        Db { posts: Vec<PostResponse> },
    }

    let posts = match serde_json::from_str::<Seed>(raw)? {
        Seed::Bare(posts) | Seed::Db { posts } => posts,
    };

    if let Some(post) = posts.iter().find(|p| p.id == u64::MAX) {
        anyhow::bail!(
            "seed post '{}' uses the largest id, leaving none for new posts",
            post.title
        );
    }

    Ok(posts.into_iter().map(post_from_dto).collect())
}
