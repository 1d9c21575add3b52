//! Post CRUD handlers.
//!
//! Bodies and path ids are decoded by the extractors before a handler runs,
//! so malformed input never reaches the store.

use actix_web::{HttpResponse, web};

use blog_core::domain::PostId;
use blog_shared::dto::{PostRequest, SearchQuery};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Any base-10 integer is a well-formed id. Negative ones can never be stored,
/// so they resolve to not found rather than bad request.
fn post_id(raw: i64) -> AppResult<PostId> {
    PostId::try_from(raw).map_err(|_| AppError::NotFound("Post not found".to_string()))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner().into_draft()).await?;
    tracing::info!(post_id = post.id, "Post created");

    Ok(HttpResponse::Created().json(post))
}

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/search?q={keyword}
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.search(&query.q).await?;
    tracing::debug!(keyword = %query.q, matches = posts.len(), "Post search");

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.posts.find_by_id(post_id(path.into_inner())?).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update(post_id(path.into_inner())?, body.into_inner().into_draft())
        .await?;
    tracing::info!(post_id = post.id, "Post updated");

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = post_id(path.into_inner())?;
    state.posts.delete(id).await?;
    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
