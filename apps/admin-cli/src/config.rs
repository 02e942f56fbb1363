//! Client configuration loaded from environment variables.

use std::env;

use postdesk_infra::HttpConfig;

/// Which `PostsApi` implementation the session talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// REST backend at `POSTS_API_URL`.
    Http,
    /// In-process collection with a few demo posts.
    Memory,
}

impl Backend {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "http" => Some(Backend::Http),
            "memory" => Some(Backend::Memory),
            _ => None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: Backend,
    pub http: HttpConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let backend = match env::var("POSTS_BACKEND") {
            Ok(value) => Backend::parse(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "Unknown POSTS_BACKEND, using http");
                Backend::Http
            }),
            Err(_) => Backend::Http,
        };

        Self {
            backend,
            http: HttpConfig::from_env(),
        }
    }
}
