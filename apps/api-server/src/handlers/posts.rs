//! Posts collection handlers - pass-through CRUD against the store.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::PostDraft;
use quill_shared::dto::PostPayload;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn draft_from(payload: PostPayload) -> PostDraft {
    PostDraft {
        title: payload.title,
        content: payload.content,
    }
}

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {} not found", id)))?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(draft_from(body.into_inner())).await?;

    tracing::debug!(id = %post.id, "post created");

    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .update(id, draft_from(body.into_inner()))
        .await?;

    tracing::debug!(id = %post.id, "post updated");

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
///
/// Acknowledges with an empty JSON object; clients do not rely on the
/// body.
pub async fn remove(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;

    tracing::debug!(%id, "post deleted");

    Ok(HttpResponse::Ok().json(serde_json::json!({})))
}
