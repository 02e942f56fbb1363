//! Text rendering of the controller's view state.

use std::fmt::Write;

use postdesk_core::PostListController;
use postdesk_core::controller::ListView;
use postdesk_core::domain::Post;

const TITLE_WIDTH: usize = 28;
const IMAGE_WIDTH: usize = 24;

fn status_label(post: &Post) -> &'static str {
    if post.status { "published" } else { "unpublished" }
}

/// Cut `text` to `width` characters, marking the cut with `~`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}

/// Render the whole screen: search line, list area, form, dialog, notice.
pub fn render(controller: &PostListController) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Posts  (search: \"{}\")", controller.search());

    match controller.view() {
        ListView::Loading => {
            let _ = writeln!(out, "  Loading...");
        }
        ListView::Failed(message) => {
            let _ = writeln!(out, "  {message}");
        }
        ListView::Rows([]) => {
            let _ = writeln!(out, "  (no posts)");
        }
        ListView::Rows(posts) => {
            let _ = writeln!(
                out,
                "  {:>3}  {:>5}  {:<tw$}  {:<iw$}  {:<10}  {}",
                "#",
                "id",
                "title",
                "image",
                "date",
                "status",
                tw = TITLE_WIDTH,
                iw = IMAGE_WIDTH,
            );
            for (index, post) in posts.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {:>3}  {:>5}  {:<tw$}  {:<iw$}  {:<10}  {}",
                    index + 1,
                    post.id,
                    fit(&post.title, TITLE_WIDTH),
                    fit(&post.image, IMAGE_WIDTH),
                    post.date,
                    status_label(post),
                    tw = TITLE_WIDTH,
                    iw = IMAGE_WIDTH,
                );
            }
        }
    }

    if controller.is_form_open() {
        let draft = controller.draft();
        let _ = writeln!(out, "\n[New post]");
        let _ = writeln!(out, "  title: {}", draft.title);
        let _ = writeln!(out, "  image: {}", draft.image);
        let _ = writeln!(out, "  date:  {}", draft.date);
        if let Some(err) = controller.form_error() {
            let _ = writeln!(out, "  error: {err}");
        }
        if controller.is_create_pending() {
            let _ = writeln!(out, "  publishing...");
        }
    }

    if let Some(dialog) = controller.dialog() {
        let _ = writeln!(out, "\n? {}  [yes/no]", dialog.prompt());
        if let Some(target) = dialog.target() {
            let _ = writeln!(out, "  post {}: {}", target.id, target.title);
        }
    }

    if let Some(notice) = controller.notice() {
        let _ = writeln!(
            out,
            "\n! {} ({})",
            notice.message,
            notice.raised_at.format("%H:%M:%S")
        );
    }

    out
}
