use super::traits::AuthorRepository;
use crate::errors::ApiError;
use crate::models::{Author, AuthorChanges, NewAuthor};
use crate::schema::authors;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::sqlite::SqliteConnection;
use std::sync::{Arc, Mutex};

/// Name uniqueness lives in the UNIQUE constraint on `authors.name`;
/// this repository only translates the violation into a conflict error.
fn map_write_error(err: diesel::result::Error) -> ApiError {
    match err {
        diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            ApiError::DuplicateAuthorName
        }
        other => ApiError::DatabaseError(other),
    }
}

#[derive(Clone)]
pub struct SqliteAuthorRepository {
    db: Arc<Mutex<SqliteConnection>>,
}

impl SqliteAuthorRepository {
    pub fn new(db: Arc<Mutex<SqliteConnection>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn create(&self, author: &NewAuthor) -> Result<Author, ApiError> {
        let mut conn = self.db.lock().unwrap();
        let result = diesel::insert_into(authors::table)
            .values(author)
            .returning(authors::all_columns)
            .get_result::<Author>(&mut *conn)
            .map_err(map_write_error)?;
        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, ApiError> {
        let mut conn = self.db.lock().unwrap();
        let result = authors::table
            .find(id)
            .first::<Author>(&mut *conn)
            .optional()?;
        Ok(result)
    }

    async fn list(&self) -> Result<Vec<Author>, ApiError> {
        let mut conn = self.db.lock().unwrap();
        let result = authors::table
            .order(authors::id.asc())
            .load::<Author>(&mut *conn)?;
        Ok(result)
    }

    async fn update(&self, id: i32, changes: &AuthorChanges) -> Result<Author, ApiError> {
        let mut conn = self.db.lock().unwrap();
        let result = diesel::update(authors::table.find(id))
            .set((changes, authors::updated_at.eq(Utc::now().naive_utc())))
            .returning(authors::all_columns)
            .get_result::<Author>(&mut *conn)
            .optional()
            .map_err(map_write_error)?;
        result.ok_or(ApiError::NotFound)
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let mut conn = self.db.lock().unwrap();
        let deleted = diesel::delete(authors::table.find(id)).execute(&mut *conn)?;
        Ok(deleted > 0)
    }
}
