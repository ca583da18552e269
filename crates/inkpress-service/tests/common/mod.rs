use diesel::{Connection, sqlite::SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub fn establish_test_connection() -> SqliteConnection {
    let mut connection =
        SqliteConnection::establish(":memory:").expect("Failed to create in-memory database");

    connection
        .run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");

    connection
}

#[allow(dead_code)]
pub mod test_utils {
    use super::*;
    use diesel::prelude::*;
    use inkpress_service::models::{Author, Post};
    use inkpress_service::schema::{authors, posts};

    pub fn count_authors(conn: &mut SqliteConnection) -> i64 {
        authors::table
            .count()
            .get_result(conn)
            .expect("Failed to count authors")
    }

    pub fn count_posts(conn: &mut SqliteConnection) -> i64 {
        posts::table
            .count()
            .get_result(conn)
            .expect("Failed to count posts")
    }

    pub fn get_author_by_name(conn: &mut SqliteConnection, name: &str) -> Option<Author> {
        authors::table
            .filter(authors::name.eq(name))
            .first::<Author>(conn)
            .optional()
            .expect("Failed to query author by name")
    }

    pub fn get_post_by_id(conn: &mut SqliteConnection, id: i32) -> Option<Post> {
        posts::table
            .find(id)
            .first::<Post>(conn)
            .optional()
            .expect("Failed to query post by id")
    }
}
