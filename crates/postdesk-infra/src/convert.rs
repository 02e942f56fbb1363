//! Conversions between domain posts and their wire form.

use postdesk_core::domain::{NewPost, Post, PostId};
use postdesk_shared::dto::{CreatePostRequest, PostResponse};

pub fn post_from_dto(dto: PostResponse) -> Post {
    Post {
        id: PostId(dto.id),
        title: dto.title,
        image: dto.image,
        date: dto.date,
        status: dto.status,
    }
}

pub fn post_to_dto(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.0,
        title: post.title,
        image: post.image,
        date: post.date,
        status: post.status,
    }
}

pub fn new_post_to_dto(post: NewPost) -> CreatePostRequest {
    CreatePostRequest {
        title: post.title,
        image: post.image,
        date: post.date,
        status: post.status,
    }
}

pub fn new_post_from_dto(dto: CreatePostRequest) -> NewPost {
    NewPost {
        title: dto.title,
        image: dto.image,
        date: dto.date,
        status: dto.status,
    }
}
