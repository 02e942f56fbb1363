//! In-process posts collection.

mod store;

pub use store::InMemoryPostsApi;
