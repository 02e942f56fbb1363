//! REST adapter for a remote `posts` collection.

mod client;

pub use client::{HttpConfig, HttpPostsApi};
