use chrono::{DateTime, Utc};

use crate::domain::Post;

/// Message shown in place of the list when a load fails.
pub const FETCH_FAILED: &str = "Failed to fetch posts";

/// Progress of the latest dispatched list load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing dispatched yet.
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// What the list area should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    Failed(&'static str),
    Rows(&'a [Post]),
}

/// User-visible record of a failed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raised_at: Utc::now(),
        }
    }
}
