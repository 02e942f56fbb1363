//! # Postdesk Core
//!
//! The domain layer of the posts admin client.
//! This crate holds the post model, the `PostsApi` port and the list
//! controller. It performs no I/O itself: the controller hands out
//! [`controller::Request`]s and is fed back [`controller::Outcome`]s.

pub mod controller;
pub mod domain;
pub mod error;
pub mod ports;

pub use controller::PostListController;
pub use error::{ControllerError, DraftError};
