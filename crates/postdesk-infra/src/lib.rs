//! # Postdesk Infrastructure
//!
//! Concrete implementations of the `PostsApi` port defined in `postdesk-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `http` - REST client for a real `posts` backend via reqwest

pub mod convert;
pub mod memory;

#[cfg(feature = "http")]
pub mod http;

// Re-exports - In-Memory
pub use memory::InMemoryPostsApi;

// Re-exports - HTTP
#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpPostsApi};
