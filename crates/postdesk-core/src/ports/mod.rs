//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod posts_api;

pub use posts_api::{ApiError, PostsApi};
