use crate::errors::ApiError;
use crate::models::{Author, AuthorChanges, NewAuthor, NewPost, Post, PostChanges};
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Clone + Send + Sync + 'static {
    async fn create(&self, author: &NewAuthor) -> Result<Author, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, ApiError>;
    async fn list(&self) -> Result<Vec<Author>, ApiError>;
    async fn update(&self, id: i32, changes: &AuthorChanges) -> Result<Author, ApiError>;
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

#[async_trait]
pub trait PostRepository: Clone + Send + Sync + 'static {
    async fn create(&self, post: &NewPost) -> Result<Post, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, ApiError>;
    async fn list(&self) -> Result<Vec<Post>, ApiError>;
    async fn update(&self, id: i32, changes: &PostChanges) -> Result<Post, ApiError>;
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}
