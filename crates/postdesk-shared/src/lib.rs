//! # Postdesk Shared
//!
//! Wire types for the `posts` REST contract, shared by the HTTP client
//! adapter and the mock server.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
