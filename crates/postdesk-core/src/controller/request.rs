//! Requests the controller asks a driver to perform, and their outcomes.

use std::fmt;

use crate::domain::{NewPost, Post, PostId};
use crate::ports::{ApiError, PostsApi};

/// Identifies one dispatched list load. Only the newest ticket may settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub search: String,
}

/// A single remote call, produced by a controller transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Load(LoadTicket),
    Create(NewPost),
    SetStatus { id: PostId, status: bool },
    Delete(PostId),
}

/// The settled result of a [`Request`], fed back through
/// [`PostListController::apply`](super::PostListController::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded {
        ticket: LoadTicket,
        result: Result<Vec<Post>, ApiError>,
    },
    Created(Result<Post, ApiError>),
    StatusSet {
        id: PostId,
        status: bool,
        result: Result<(), ApiError>,
    },
    Deleted {
        id: PostId,
        result: Result<(), ApiError>,
    },
}

impl Request {
    /// Perform the call against `api`. Never fails itself: errors are
    /// carried inside the outcome.
    pub async fn execute(self, api: &dyn PostsApi) -> Outcome {
        tracing::debug!(request = %self, "Dispatching request");

        match self {
            Request::Load(ticket) => {
                let result = api.list(&ticket.search).await;
                Outcome::Loaded { ticket, result }
            }
            Request::Create(post) => Outcome::Created(api.create(post).await),
            Request::SetStatus { id, status } => {
                let result = api.set_status(id, status).await;
                Outcome::StatusSet { id, status, result }
            }
            Request::Delete(id) => {
                let result = api.delete(id).await;
                Outcome::Deleted { id, result }
            }
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Load(ticket) => write!(
                f,
                "GET /posts?title_like={} (#{})",
                ticket.search, ticket.seq
            ),
            Request::Create(post) => write!(f, "POST /posts ({})", post.title),
            Request::SetStatus { id, status } => {
                write!(f, "PATCH /posts/{id} {{status: {status}}}")
            }
            Request::Delete(id) => write!(f, "DELETE /posts/{id}"),
        }
    }
}
