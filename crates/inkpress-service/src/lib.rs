use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, embed_migrations};
use std::sync::{Arc, Mutex};

pub mod errors;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod validation;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use repositories::{
    AuthorRepository, PostRepository, SqliteAuthorRepository, SqlitePostRepository,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub trait AppState: Clone + Send + Sync + 'static {
    type AuthorRepo: AuthorRepository;
    type PostRepo: PostRepository;

    fn author_repo(&self) -> Self::AuthorRepo;
    fn post_repo(&self) -> Self::PostRepo;
}

#[derive(Clone)]
pub struct DefaultAppState {
    author_repo: SqliteAuthorRepository,
    post_repo: SqlitePostRepository,
}

impl DefaultAppState {
    pub fn new(db: Arc<Mutex<SqliteConnection>>) -> Self {
        Self {
            author_repo: SqliteAuthorRepository::new(db.clone()),
            post_repo: SqlitePostRepository::new(db),
        }
    }
}

impl AppState for DefaultAppState {
    type AuthorRepo = SqliteAuthorRepository;
    type PostRepo = SqlitePostRepository;

    fn author_repo(&self) -> Self::AuthorRepo {
        self.author_repo.clone()
    }

    fn post_repo(&self) -> Self::PostRepo {
        self.post_repo.clone()
    }
}
