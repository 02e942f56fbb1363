//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Draft validation failures, shown inline next to the add form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Title, image and date must not be empty")]
    MissingFields,

    #[error("A post with this title already exists")]
    DuplicateTitle,
}

/// Intents the controller refuses in its current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("Another confirmation is already open")]
    DialogBusy,

    #[error("No confirmation is open")]
    NoDialog,

    #[error("The add form is closed")]
    FormClosed,

    #[error("A post is already being published")]
    CreateInFlight,

    #[error("Post {0} is not in the current list")]
    UnknownPost(PostId),
}
