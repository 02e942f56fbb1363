use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned post identifier. The client never mints one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Post entity - one record of the remote `posts` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// URL or path, never validated.
    pub image: String,
    /// Calendar date as entered, e.g. `2024-05-01`.
    pub date: String,
    /// `true` means published.
    pub status: bool,
}

/// Payload for creating a post. The server answers with a [`Post`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub image: String,
    pub date: String,
    pub status: bool,
}

impl NewPost {
    /// Attach a server-assigned id, producing the stored record.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            image: self.image,
            date: self.date,
            status: self.status,
        }
    }
}
