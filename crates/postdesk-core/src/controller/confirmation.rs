use crate::domain::Post;

/// A pending yes/no gate in front of an action.
///
/// Block/unblock and delete carry the target record as it was when the
/// dialog opened; reset acts on the draft and carries nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    ToggleStatus(Post),
    Delete(Post),
    ResetDraft,
}

impl Confirmation {
    /// Question shown to the user. The toggle wording follows the
    /// target's current status.
    pub fn prompt(&self) -> &'static str {
        match self {
            Confirmation::ToggleStatus(post) if post.status => {
                "Are you sure you want to unpublish this post?"
            }
            Confirmation::ToggleStatus(_) => "Are you sure you want to publish this post?",
            Confirmation::Delete(_) => "Are you sure you want to delete this post?",
            Confirmation::ResetDraft => "Are you sure you want to reset the form?",
        }
    }

    pub fn target(&self) -> Option<&Post> {
        match self {
            Confirmation::ToggleStatus(post) | Confirmation::Delete(post) => Some(post),
            Confirmation::ResetDraft => None,
        }
    }
}
