//! The posts list controller.
//!
//! All view state lives in [`PostListController`] and changes only through
//! its transition methods. Transitions that need the backend return a
//! [`Request`]; whoever owns the controller runs it (see
//! [`Request::execute`]) and hands the [`Outcome`] back to
//! [`PostListController::apply`].

mod confirmation;
mod request;
mod view;

#[cfg(test)]
mod tests;

pub use confirmation::Confirmation;
pub use request::{LoadTicket, Outcome, Request};
pub use view::{FETCH_FAILED, ListView, LoadStatus, Notice};

use crate::domain::{Draft, DraftField, Post, PostId};
use crate::error::{ControllerError, DraftError};
use crate::ports::{ApiError, PostsApi};

/// Local mirror of the remote posts collection plus the transient UI state
/// around it (search text, draft, open dialog).
#[derive(Debug, Default)]
pub struct PostListController {
    posts: Vec<Post>,
    search: String,
    load: LoadStatus,
    /// Sequence number of the newest dispatched load.
    issued_seq: u64,
    dialog: Option<Confirmation>,
    form_open: bool,
    draft: Draft,
    form_error: Option<DraftError>,
    create_pending: bool,
    notice: Option<Notice>,
}

impl PostListController {
    pub fn new() -> Self {
        Self::default()
    }

    // ----------------------------------------------------------------------
    // List loading
    // ----------------------------------------------------------------------

    /// Initial load with the current (empty) search.
    pub fn mount(&mut self) -> Request {
        self.begin_load()
    }

    /// Change the search text. Every change dispatches a new load.
    pub fn set_search(&mut self, search: impl Into<String>) -> Option<Request> {
        let search = search.into();
        if search == self.search {
            return None;
        }
        self.search = search;
        Some(self.begin_load())
    }

    /// Load again with the current search.
    pub fn reload(&mut self) -> Request {
        self.begin_load()
    }

    fn begin_load(&mut self) -> Request {
        self.issued_seq += 1;
        self.load = LoadStatus::Loading;
        Request::Load(LoadTicket {
            seq: self.issued_seq,
            search: self.search.clone(),
        })
    }

    // ----------------------------------------------------------------------
    // Confirmation dialogs
    // ----------------------------------------------------------------------

    /// Open the block/unblock confirmation for `id`.
    pub fn request_toggle(&mut self, id: PostId) -> Result<(), ControllerError> {
        let target = self.target(id)?;
        self.open_dialog(Confirmation::ToggleStatus(target))
    }

    /// Open the delete confirmation for `id`.
    pub fn request_delete(&mut self, id: PostId) -> Result<(), ControllerError> {
        let target = self.target(id)?;
        self.open_dialog(Confirmation::Delete(target))
    }

    /// Open the reset confirmation for the draft.
    pub fn request_reset(&mut self) -> Result<(), ControllerError> {
        if !self.form_open {
            return Err(ControllerError::FormClosed);
        }
        self.open_dialog(Confirmation::ResetDraft)
    }

    /// Close the open dialog and run its action. Block and delete close
    /// before their request settles, whatever the outcome.
    pub fn confirm(&mut self) -> Result<Option<Request>, ControllerError> {
        let dialog = self.dialog.take().ok_or(ControllerError::NoDialog)?;

        let request = match dialog {
            Confirmation::ToggleStatus(post) => Some(Request::SetStatus {
                id: post.id,
                status: !post.status,
            }),
            Confirmation::Delete(post) => Some(Request::Delete(post.id)),
            Confirmation::ResetDraft => {
                self.draft.clear();
                None
            }
        };

        Ok(request)
    }

    /// Close the open dialog and drop its target. Never sends anything.
    pub fn cancel(&mut self) -> Result<(), ControllerError> {
        self.dialog
            .take()
            .map(|_| ())
            .ok_or(ControllerError::NoDialog)
    }

    fn open_dialog(&mut self, dialog: Confirmation) -> Result<(), ControllerError> {
        if self.dialog.is_some() {
            return Err(ControllerError::DialogBusy);
        }
        self.dialog = Some(dialog);
        Ok(())
    }

    fn target(&self, id: PostId) -> Result<Post, ControllerError> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ControllerError::UnknownPost(id))
    }

    // ----------------------------------------------------------------------
    // Add form
    // ----------------------------------------------------------------------

    pub fn open_form(&mut self) {
        self.form_open = true;
        self.form_error = None;
    }

    /// Hide the form. The draft is kept for the next time it opens; a
    /// pending reset confirmation goes away with the form.
    pub fn close_form(&mut self) {
        self.form_open = false;
        if matches!(self.dialog, Some(Confirmation::ResetDraft)) {
            tracing::debug!("Reset confirmation dropped with the form");
            self.dialog = None;
        }
    }

    pub fn edit_draft(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Validate the draft and, if it passes, build the publish request.
    ///
    /// Returns `Ok(None)` when validation fails; the reason is then
    /// available from [`form_error`](Self::form_error).
    pub fn submit(&mut self) -> Result<Option<Request>, ControllerError> {
        if !self.form_open {
            return Err(ControllerError::FormClosed);
        }
        if self.create_pending {
            return Err(ControllerError::CreateInFlight);
        }

        self.form_error = None;

        match self.draft.validate(&self.posts) {
            Ok(new_post) => {
                self.create_pending = true;
                Ok(Some(Request::Create(new_post)))
            }
            Err(err) => {
                tracing::debug!(error = %err, "Draft rejected");
                self.form_error = Some(err);
                Ok(None)
            }
        }
    }

    // ----------------------------------------------------------------------
    // Settling requests
    // ----------------------------------------------------------------------

    /// Fold a settled request back into the view state.
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Loaded { ticket, result } => self.settle_load(ticket, result),
            Outcome::Created(result) => self.settle_create(result),
            Outcome::StatusSet { id, status, result } => match result {
                Ok(()) => {
                    if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
                        post.status = status;
                    } else {
                        tracing::debug!(post_id = %id, "Updated post no longer listed");
                    }
                    self.notice = None;
                }
                Err(err) => {
                    let action = if status { "publish" } else { "unpublish" };
                    self.mutation_failed(format!("Could not {action} post {id}"), &err);
                }
            },
            Outcome::Deleted { id, result } => match result {
                Ok(()) => {
                    self.posts.retain(|p| p.id != id);
                    self.notice = None;
                }
                Err(err) => self.mutation_failed(format!("Could not delete post {id}"), &err),
            },
        }
    }

    /// Run `request` against `api` and apply the outcome in one step.
    pub async fn drive(&mut self, api: &dyn PostsApi, request: Request) {
        let outcome = request.execute(api).await;
        self.apply(outcome);
    }

    fn settle_load(&mut self, ticket: LoadTicket, result: Result<Vec<Post>, ApiError>) {
        if ticket.seq != self.issued_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.issued_seq,
                search = %ticket.search,
                "Discarding stale list response"
            );
            return;
        }

        match result {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), search = %ticket.search, "Posts loaded");
                self.posts = posts;
                self.load = LoadStatus::Ready;
            }
            Err(err) => {
                tracing::error!(error = %err, search = %ticket.search, "Failed to fetch posts");
                self.load = LoadStatus::Failed;
            }
        }
    }

    fn settle_create(&mut self, result: Result<Post, ApiError>) {
        self.create_pending = false;

        match result {
            Ok(post) => {
                tracing::info!(post_id = %post.id, title = %post.title, "Post published");
                self.posts.push(post);
                self.form_open = false;
                self.draft.clear();
                self.notice = None;
            }
            Err(err) => self.mutation_failed("Could not publish the post".to_string(), &err),
        }
    }

    fn mutation_failed(&mut self, message: String, err: &ApiError) {
        tracing::error!(error = %err, "{}", message);
        self.notice = Some(Notice::new(format!("{message}: {err}")));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ----------------------------------------------------------------------
    // Read access
    // ----------------------------------------------------------------------

    pub fn view(&self) -> ListView<'_> {
        match self.load {
            LoadStatus::Loading => ListView::Loading,
            LoadStatus::Failed => ListView::Failed(FETCH_FAILED),
            LoadStatus::Idle | LoadStatus::Ready => ListView::Rows(&self.posts),
        }
    }

    /// Local collection regardless of load status.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn dialog(&self) -> Option<&Confirmation> {
        self.dialog.as_ref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn form_error(&self) -> Option<&DraftError> {
        self.form_error.as_ref()
    }

    pub fn is_create_pending(&self) -> bool {
        self.create_pending
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}
