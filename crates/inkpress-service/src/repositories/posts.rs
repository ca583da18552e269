use super::traits::PostRepository;
use crate::errors::ApiError;
use crate::models::{NewPost, Post, PostChanges};
use crate::schema::posts;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct SqlitePostRepository {
    db: Arc<Mutex<SqliteConnection>>,
}

impl SqlitePostRepository {
    pub fn new(db: Arc<Mutex<SqliteConnection>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn create(&self, post: &NewPost) -> Result<Post, ApiError> {
        let mut conn = self.db.lock().unwrap();
        let result = diesel::insert_into(posts::table)
            .values(post)
            .returning(posts::all_columns)
            .get_result::<Post>(&mut *conn)?;
        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, ApiError> {
        let mut conn = self.db.lock().unwrap();
        let result = posts::table.find(id).first::<Post>(&mut *conn).optional()?;
        Ok(result)
    }

    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        let mut conn = self.db.lock().unwrap();
        let result = posts::table.order(posts::id.asc()).load::<Post>(&mut *conn)?;
        Ok(result)
    }

    async fn update(&self, id: i32, changes: &PostChanges) -> Result<Post, ApiError> {
        let mut conn = self.db.lock().unwrap();
        let result = diesel::update(posts::table.find(id))
            .set((changes, posts::updated_at.eq(Utc::now().naive_utc())))
            .returning(posts::all_columns)
            .get_result::<Post>(&mut *conn)
            .optional()?;
        result.ok_or(ApiError::NotFound)
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let mut conn = self.db.lock().unwrap();
        let deleted = diesel::delete(posts::table.find(id)).execute(&mut *conn)?;
        Ok(deleted > 0)
    }
}
