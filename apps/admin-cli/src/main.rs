//! # Postdesk
//!
//! Terminal admin for a remote posts collection: list, search, publish,
//! block/unblock and delete posts.

mod command;
mod config;
mod render;
mod session;
mod telemetry;

use std::sync::Arc;

use postdesk_core::domain::{Post, PostId};
use postdesk_core::ports::PostsApi;
use postdesk_infra::{HttpPostsApi, InMemoryPostsApi};

use config::{AppConfig, Backend};
use session::Session;
use telemetry::{TelemetryConfig, init_telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    let api: Arc<dyn PostsApi> = match config.backend {
        Backend::Http => Arc::new(HttpPostsApi::new(config.http.clone())?),
        Backend::Memory => {
            tracing::info!("Using in-memory demo backend");
            Arc::new(InMemoryPostsApi::with_posts(demo_posts()))
        }
    };

    println!("postdesk - type 'help' for commands");
    Session::new(api).run().await
}

fn demo_posts() -> Vec<Post> {
    [
        ("Getting started with Rust", "images/rust.png", "2024-01-15", true),
        ("Ownership explained", "images/ownership.png", "2024-02-03", true),
        ("Draft: async pitfalls", "images/async.png", "2024-03-21", false),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, image, date, status), id)| Post {
        id: PostId(id),
        title: title.to_string(),
        image: image.to_string(),
        date: date.to_string(),
        status,
    })
    .collect()
}
