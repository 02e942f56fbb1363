use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::*;
use crate::domain::NewPost;

/// Fake backend that records every call and answers from a script.
/// Calls with no scripted failure succeed.
#[derive(Default)]
struct ScriptedApi {
    calls: Mutex<Vec<String>>,
    lists: Mutex<VecDeque<Result<Vec<Post>, ApiError>>>,
    fail_mutations: Mutex<bool>,
    next_id: Mutex<u64>,
}

impl ScriptedApi {
    fn answering(lists: Vec<Result<Vec<Post>, ApiError>>) -> Self {
        Self {
            lists: Mutex::new(lists.into()),
            next_id: Mutex::new(100),
            ..Default::default()
        }
    }

    fn failing_mutations(self) -> Self {
        *self.fail_mutations.lock().unwrap() = true;
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if *self.fail_mutations.lock().unwrap() {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostsApi for ScriptedApi {
    async fn list(&self, title_like: &str) -> Result<Vec<Post>, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("GET title_like={title_like}"));
        self.lists
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create(&self, post: NewPost) -> Result<Post, ApiError> {
        self.record(format!("POST {} status={}", post.title, post.status))?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        Ok(post.into_post(PostId(*next_id)))
    }

    async fn set_status(&self, id: PostId, status: bool) -> Result<(), ApiError> {
        self.record(format!("PATCH {id} status={status}"))
    }

    async fn delete(&self, id: PostId) -> Result<(), ApiError> {
        self.record(format!("DELETE {id}"))
    }
}

fn post(id: u64, title: &str, status: bool) -> Post {
    Post {
        id: PostId(id),
        title: title.to_string(),
        image: format!("{title}.png"),
        date: "2024-01-01".to_string(),
        status,
    }
}

async fn mounted(api: &ScriptedApi) -> PostListController {
    let mut controller = PostListController::new();
    let request = controller.mount();
    controller.drive(api, request).await;
    controller
}

fn fill_draft(controller: &mut PostListController, title: &str) {
    controller.edit_draft(DraftField::Title, title);
    controller.edit_draft(DraftField::Image, "cover.png");
    controller.edit_draft(DraftField::Date, "2024-06-01");
}

#[tokio::test]
async fn test_mount_shows_server_order() {
    let rows = vec![post(3, "C", true), post(1, "A", false), post(2, "B", true)];
    let api = ScriptedApi::answering(vec![Ok(rows.clone())]);

    let controller = mounted(&api).await;

    assert_eq!(controller.view(), ListView::Rows(&rows));
    assert_eq!(api.calls(), vec!["GET title_like="]);
}

#[tokio::test]
async fn test_loading_then_failure_hides_list() {
    let api = ScriptedApi::answering(vec![
        Ok(vec![post(1, "A", true)]),
        Err(ApiError::Transport("timeout".to_string())),
    ]);
    let mut controller = mounted(&api).await;

    let request = controller.set_search("A").unwrap();
    assert_eq!(controller.view(), ListView::Loading);

    controller.drive(&api, request).await;
    assert_eq!(controller.view(), ListView::Failed(FETCH_FAILED));
    // Local copy is untouched even though it is hidden.
    assert_eq!(controller.posts().len(), 1);
}

#[tokio::test]
async fn test_success_after_failure_shows_rows_again() {
    let api = ScriptedApi::answering(vec![
        Err(ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        }),
        Ok(vec![post(1, "A", true)]),
    ]);
    let mut controller = mounted(&api).await;
    assert_eq!(controller.load_status(), LoadStatus::Failed);

    let request = controller.reload();
    controller.drive(&api, request).await;
    assert_eq!(controller.load_status(), LoadStatus::Ready);
}

#[test]
fn test_same_search_does_not_dispatch() {
    let mut controller = PostListController::new();
    assert!(controller.set_search("").is_none());
    assert!(controller.set_search("rust").is_some());
    assert!(controller.set_search("rust").is_none());
}

#[test]
fn test_stale_load_is_discarded() {
    let mut controller = PostListController::new();
    let Some(Request::Load(first)) = controller.set_search("r") else {
        panic!("expected a load");
    };
    let Some(Request::Load(second)) = controller.set_search("ru") else {
        panic!("expected a load");
    };
    assert!(second.seq > first.seq);

    let newer = vec![post(1, "rust", true)];
    controller.apply(Outcome::Loaded {
        ticket: second,
        result: Ok(newer.clone()),
    });
    controller.apply(Outcome::Loaded {
        ticket: first,
        result: Ok(vec![post(1, "rust", true), post(2, "ruby", true)]),
    });

    assert_eq!(controller.view(), ListView::Rows(&newer));
}

#[test]
fn test_stale_failure_does_not_clobber_newer_rows() {
    let mut controller = PostListController::new();
    let Request::Load(first) = controller.mount() else {
        panic!("expected a load");
    };
    let Request::Load(second) = controller.reload() else {
        panic!("expected a load");
    };

    controller.apply(Outcome::Loaded {
        ticket: second,
        result: Ok(vec![post(1, "A", true)]),
    });
    controller.apply(Outcome::Loaded {
        ticket: first,
        result: Err(ApiError::Transport("reset".to_string())),
    });

    assert_eq!(controller.load_status(), LoadStatus::Ready);
}

#[tokio::test]
async fn test_block_published_post_sends_false_and_flips_only_target() {
    let api = ScriptedApi::answering(vec![Ok(vec![post(1, "A", true), post(2, "B", true)])]);
    let mut controller = mounted(&api).await;

    controller.request_toggle(PostId(1)).unwrap();
    assert_eq!(
        controller.dialog().unwrap().prompt(),
        "Are you sure you want to unpublish this post?"
    );

    let request = controller.confirm().unwrap().unwrap();
    assert_eq!(
        request,
        Request::SetStatus {
            id: PostId(1),
            status: false
        }
    );
    assert!(controller.dialog().is_none());

    controller.drive(&api, request).await;

    assert_eq!(controller.posts(), &[post(1, "A", false), post(2, "B", true)]);
    assert_eq!(api.calls().last().unwrap(), "PATCH 1 status=false");
}

#[tokio::test]
async fn test_unblock_prompt_and_request_follow_current_status() {
    let api = ScriptedApi::answering(vec![Ok(vec![post(4, "D", false)])]);
    let mut controller = mounted(&api).await;

    controller.request_toggle(PostId(4)).unwrap();
    assert_eq!(
        controller.dialog().unwrap().prompt(),
        "Are you sure you want to publish this post?"
    );

    let request = controller.confirm().unwrap().unwrap();
    controller.drive(&api, request).await;
    assert!(controller.posts()[0].status);
}

#[tokio::test]
async fn test_failed_toggle_leaves_state_and_raises_notice() {
    let api =
        ScriptedApi::answering(vec![Ok(vec![post(1, "A", true)])]).failing_mutations();
    let mut controller = mounted(&api).await;

    controller.request_toggle(PostId(1)).unwrap();
    let request = controller.confirm().unwrap().unwrap();
    controller.drive(&api, request).await;

    assert!(controller.posts()[0].status);
    assert!(controller.dialog().is_none());
    let notice = controller.notice().unwrap();
    assert!(notice.message.starts_with("Could not unpublish post 1"));

    controller.dismiss_notice();
    assert!(controller.notice().is_none());
}

#[tokio::test]
async fn test_delete_removes_exactly_target() {
    let api = ScriptedApi::answering(vec![Ok(vec![
        post(1, "A", true),
        post(2, "B", true),
        post(3, "C", false),
    ])]);
    let mut controller = mounted(&api).await;

    controller.request_delete(PostId(2)).unwrap();
    let request = controller.confirm().unwrap().unwrap();
    assert_eq!(request, Request::Delete(PostId(2)));
    controller.drive(&api, request).await;

    assert_eq!(controller.posts(), &[post(1, "A", true), post(3, "C", false)]);
}

#[tokio::test]
async fn test_failed_delete_leaves_state() {
    let rows = vec![post(1, "A", true), post(2, "B", true)];
    let api = ScriptedApi::answering(vec![Ok(rows.clone())]).failing_mutations();
    let mut controller = mounted(&api).await;

    controller.request_delete(PostId(1)).unwrap();
    let request = controller.confirm().unwrap().unwrap();
    controller.drive(&api, request).await;

    assert_eq!(controller.posts(), rows.as_slice());
    assert!(controller.dialog().is_none());
    assert!(controller.notice().is_some());
}

#[tokio::test]
async fn test_cancel_sends_nothing_and_clears_target() {
    let api = ScriptedApi::answering(vec![Ok(vec![post(1, "A", true)])]);
    let mut controller = mounted(&api).await;
    let calls_after_mount = api.calls().len();

    controller.request_toggle(PostId(1)).unwrap();
    controller.cancel().unwrap();
    assert!(controller.dialog().is_none());

    controller.request_delete(PostId(1)).unwrap();
    controller.cancel().unwrap();
    assert!(controller.dialog().is_none());

    controller.open_form();
    fill_draft(&mut controller, "New");
    controller.request_reset().unwrap();
    controller.cancel().unwrap();
    assert!(controller.dialog().is_none());
    assert_eq!(controller.draft().title, "New");

    assert_eq!(api.calls().len(), calls_after_mount);
    assert_eq!(controller.cancel(), Err(ControllerError::NoDialog));
}

#[tokio::test]
async fn test_only_one_dialog_at_a_time() {
    let api = ScriptedApi::answering(vec![Ok(vec![post(1, "A", true), post(2, "B", true)])]);
    let mut controller = mounted(&api).await;

    controller.request_toggle(PostId(1)).unwrap();
    assert_eq!(
        controller.request_delete(PostId(2)),
        Err(ControllerError::DialogBusy)
    );
    assert_eq!(
        controller.dialog().and_then(Confirmation::target).map(|p| p.id),
        Some(PostId(1))
    );
}

#[test]
fn test_unknown_target_is_rejected() {
    let mut controller = PostListController::new();
    assert_eq!(
        controller.request_toggle(PostId(9)),
        Err(ControllerError::UnknownPost(PostId(9)))
    );
    assert_eq!(controller.confirm(), Err(ControllerError::NoDialog));
}

#[tokio::test]
async fn test_submit_with_blank_field_sends_nothing() {
    let api = ScriptedApi::answering(vec![Ok(Vec::new())]);
    let mut controller = mounted(&api).await;
    let calls_after_mount = api.calls().len();

    controller.open_form();
    controller.edit_draft(DraftField::Title, "Only a title");

    assert_eq!(controller.submit(), Ok(None));
    assert_eq!(controller.form_error(), Some(&DraftError::MissingFields));
    assert!(controller.is_form_open());
    assert_eq!(api.calls().len(), calls_after_mount);
}

#[tokio::test]
async fn test_submit_with_duplicate_title_sends_nothing() {
    let api = ScriptedApi::answering(vec![Ok(vec![post(1, "Hello", true)])]);
    let mut controller = mounted(&api).await;
    let calls_after_mount = api.calls().len();

    controller.open_form();
    fill_draft(&mut controller, "Hello");

    assert_eq!(controller.submit(), Ok(None));
    assert_eq!(controller.form_error(), Some(&DraftError::DuplicateTitle));
    assert_eq!(api.calls().len(), calls_after_mount);
}

#[tokio::test]
async fn test_publish_appends_closes_form_and_clears_draft() {
    let api = ScriptedApi::answering(vec![Ok(vec![post(5, "Old", false)])]);
    let mut controller = mounted(&api).await;

    controller.open_form();
    fill_draft(&mut controller, "Fresh");
    let request = controller.submit().unwrap().unwrap();
    assert!(controller.is_create_pending());
    assert_eq!(controller.submit(), Err(ControllerError::CreateInFlight));

    controller.drive(&api, request).await;

    let posts = controller.posts();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].id, PostId(101));
    assert_eq!(posts[1].title, "Fresh");
    assert!(posts[1].status);
    assert!(!controller.is_form_open());
    assert_eq!(controller.draft(), &Draft::default());
    assert_eq!(api.calls().last().unwrap(), "POST Fresh status=true");
}

#[tokio::test]
async fn test_failed_publish_keeps_form_and_draft() {
    let api = ScriptedApi::answering(vec![Ok(Vec::new())]).failing_mutations();
    let mut controller = mounted(&api).await;

    controller.open_form();
    fill_draft(&mut controller, "Fresh");
    let request = controller.submit().unwrap().unwrap();
    controller.drive(&api, request).await;

    assert!(controller.posts().is_empty());
    assert!(controller.is_form_open());
    assert_eq!(controller.draft().title, "Fresh");
    assert!(!controller.is_create_pending());
    assert!(controller.notice().is_some());
}

#[test]
fn test_reset_clears_draft_but_keeps_form_open() {
    let mut controller = PostListController::new();
    assert_eq!(controller.request_reset(), Err(ControllerError::FormClosed));

    controller.open_form();
    fill_draft(&mut controller, "Draft");
    controller.request_reset().unwrap();
    assert_eq!(controller.confirm(), Ok(None));

    assert_eq!(controller.draft(), &Draft::default());
    assert!(controller.is_form_open());
    assert!(controller.dialog().is_none());
}

#[test]
fn test_submit_requires_open_form() {
    let mut controller = PostListController::new();
    assert_eq!(controller.submit(), Err(ControllerError::FormClosed));
}

#[test]
fn test_closing_form_keeps_draft_and_reopening_clears_error() {
    let mut controller = PostListController::new();
    controller.open_form();
    controller.edit_draft(DraftField::Title, "Half");
    assert_eq!(controller.submit(), Ok(None));
    assert!(controller.form_error().is_some());

    controller.close_form();
    controller.open_form();
    assert!(controller.form_error().is_none());
    assert_eq!(controller.draft().get(DraftField::Title), "Half");
}

#[test]
fn test_closing_form_drops_pending_reset() {
    let mut controller = PostListController::new();
    controller.open_form();
    controller.edit_draft(DraftField::Title, "Keep me");
    controller.request_reset().unwrap();

    controller.close_form();
    assert!(controller.dialog().is_none());
    assert_eq!(controller.confirm(), Err(ControllerError::NoDialog));
    assert_eq!(controller.draft().title, "Keep me");
}
