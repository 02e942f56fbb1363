//! # Mock Server
//!
//! A development backend serving the `posts` REST contract from memory.
//! Split into a library so the integration tests can mount the same routes.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

pub use handlers::configure_routes;
pub use state::AppState;
