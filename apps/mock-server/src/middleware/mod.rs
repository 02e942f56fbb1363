//! Request-side plumbing shared by the handlers.

pub mod error;

pub use error::{AppError, AppResult};
