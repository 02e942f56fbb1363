//! Handlers for the `posts` collection.

use actix_web::{HttpResponse, web};

use postdesk_core::domain::PostId;
use postdesk_infra::convert::{new_post_from_dto, post_to_dto};
use postdesk_shared::dto::{CreatePostRequest, ListPostsQuery, PostResponse, UpdateStatusRequest};

use crate::middleware::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// GET /posts?title_like=...
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let title_like = query.into_inner().title_like.unwrap_or_default();

    let posts: Vec<PostResponse> = state
        .posts
        .list(&title_like)
        .await?
        .into_iter()
        .map(post_to_dto)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let created = state
        .posts
        .create(new_post_from_dto(body.into_inner()))
        .await?;

    tracing::info!(request_id = %request_id, post_id = %created.id, "Post created");

    Ok(HttpResponse::Created().json(post_to_dto(created)))
}

/// PATCH /posts/{id}
///
/// Answers with the full updated record.
pub async fn update_status(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<u64>,
    body: web::Json<UpdateStatusRequest>,
) -> AppResult<HttpResponse> {
    let id = PostId(path.into_inner());
    let status = body.into_inner().status;

    state.posts.set_status(id, status).await?;
    tracing::info!(request_id = %request_id, post_id = %id, status, "Post status changed");

    let updated = state
        .posts
        .list("")
        .await?
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))?;

    Ok(HttpResponse::Ok().json(post_to_dto(updated)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = PostId(path.into_inner());

    state.posts.delete(id).await?;
    tracing::info!(request_id = %request_id, post_id = %id, "Post deleted");

    Ok(HttpResponse::Ok().json(serde_json::json!({})))
}
