//! Domain entities - the records the admin client works on.

mod draft;
mod post;

pub use draft::{Draft, DraftField};
pub use post::{NewPost, Post, PostId};
