use axum::{
    Router,
    extract::{Json, Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::get,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::errors::ApiError;
use crate::models::{Author, AuthorChanges, NewAuthor, NewPost, Post, PostChanges};
use crate::{
    AppState,
    repositories::{AuthorRepository, PostRepository},
};

#[derive(Debug, Deserialize)]
struct CreateAuthorRequest {
    name: String,
    phone_number: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateAuthorRequest {
    name: Option<String>,
    phone_number: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreatePostRequest {
    title: String,
    content: Option<String>,
    summary: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdatePostRequest {
    title: Option<String>,
    content: Option<String>,
    summary: Option<String>,
    category: Option<String>,
}

/// Post read model: the stored columns plus the derived clickbait flag,
/// recomputed from the title on every response.
#[derive(Debug, Serialize)]
struct PostResponse {
    id: i32,
    title: String,
    content: Option<String>,
    summary: Option<String>,
    category: String,
    is_clickbait: bool,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        let is_clickbait = post.is_clickbait();
        PostResponse {
            id: post.id,
            title: post.title,
            content: post.content,
            summary: post.summary,
            category: post.category,
            is_clickbait,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[instrument(skip_all, fields(name = %payload.name, has_phone = payload.phone_number.is_some()))]
async fn create_author<S: AppState>(
    State(state): State<S>,
    Json(payload): Json<CreateAuthorRequest>,
) -> Result<(StatusCode, ResponseJson<Author>), ApiError> {
    debug!("Processing create author request");

    // Validation runs before any value is accepted; a rejected field
    // means nothing reaches the database.
    let new_author = NewAuthor::new(payload.name, payload.phone_number)?;

    let author = state.author_repo().create(&new_author).await?;

    info!(id = author.id, "Created author");
    Ok((StatusCode::CREATED, ResponseJson(author)))
}

#[instrument(skip_all)]
async fn list_authors<S: AppState>(
    State(state): State<S>,
) -> Result<ResponseJson<Vec<Author>>, ApiError> {
    let authors = state.author_repo().list().await?;
    debug!(count = authors.len(), "Listed authors");
    Ok(ResponseJson(authors))
}

#[instrument(skip_all, fields(id = %id))]
async fn get_author<S: AppState>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<ResponseJson<Author>, ApiError> {
    match state.author_repo().find_by_id(id).await? {
        Some(author) => Ok(ResponseJson(author)),
        None => {
            debug!("Author not found");
            Err(ApiError::NotFound)
        }
    }
}

#[instrument(skip_all, fields(id = %id))]
async fn update_author<S: AppState>(
    State(state): State<S>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAuthorRequest>,
) -> Result<ResponseJson<Author>, ApiError> {
    debug!("Processing update author request");

    let changes = AuthorChanges::new(payload.name, payload.phone_number).inspect_err(|err| {
        warn!(error = %err, "Rejected author update");
    })?;

    let author = state.author_repo().update(id, &changes).await?;

    info!(id = author.id, "Updated author");
    Ok(ResponseJson(author))
}

#[instrument(skip_all, fields(id = %id))]
async fn delete_author<S: AppState>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if state.author_repo().delete(id).await? {
        info!("Deleted author");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

#[instrument(skip_all, fields(title = %payload.title, category = ?payload.category))]
async fn create_post<S: AppState>(
    State(state): State<S>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, ResponseJson<PostResponse>), ApiError> {
    debug!("Processing create post request");

    let new_post = NewPost::new(
        payload.title,
        payload.content,
        payload.summary,
        payload.category,
    )
    .inspect_err(|err| {
        warn!(error = %err, "Rejected post");
    })?;

    let post = state.post_repo().create(&new_post).await?;

    info!(id = post.id, "Created post");
    Ok((StatusCode::CREATED, ResponseJson(post.into())))
}

#[instrument(skip_all)]
async fn list_posts<S: AppState>(
    State(state): State<S>,
) -> Result<ResponseJson<Vec<PostResponse>>, ApiError> {
    let posts = state.post_repo().list().await?;
    debug!(count = posts.len(), "Listed posts");
    Ok(ResponseJson(posts.into_iter().map(Into::into).collect()))
}

#[instrument(skip_all, fields(id = %id))]
async fn get_post<S: AppState>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<ResponseJson<PostResponse>, ApiError> {
    match state.post_repo().find_by_id(id).await? {
        Some(post) => Ok(ResponseJson(post.into())),
        None => {
            debug!("Post not found");
            Err(ApiError::NotFound)
        }
    }
}

#[instrument(skip_all, fields(id = %id))]
async fn update_post<S: AppState>(
    State(state): State<S>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<ResponseJson<PostResponse>, ApiError> {
    debug!("Processing update post request");

    let changes = PostChanges::new(
        payload.title,
        payload.content,
        payload.summary,
        payload.category,
    )
    .inspect_err(|err| {
        warn!(error = %err, "Rejected post update");
    })?;

    let post = state.post_repo().update(id, &changes).await?;

    info!(id = post.id, "Updated post");
    Ok(ResponseJson(post.into()))
}

#[instrument(skip_all, fields(id = %id))]
async fn delete_post<S: AppState>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if state.post_repo().delete(id).await? {
        info!("Deleted post");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub fn create_api_v1_router<S: AppState>() -> Router<S> {
    Router::new()
        .route(
            "/authors",
            get(list_authors::<S>).post(create_author::<S>),
        )
        .route(
            "/authors/{id}",
            get(get_author::<S>)
                .patch(update_author::<S>)
                .delete(delete_author::<S>),
        )
        .route("/posts", get(list_posts::<S>).post(create_post::<S>))
        .route(
            "/posts/{id}",
            get(get_post::<S>)
                .patch(update_post::<S>)
                .delete(delete_post::<S>),
        )
}
