use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::MigrationHarness;

pub fn establish_test_connection() -> SqliteConnection {
    let mut connection =
        SqliteConnection::establish(":memory:").expect("Failed to create in-memory database");

    connection
        .run_pending_migrations(crate::MIGRATIONS)
        .expect("Failed to run migrations");

    connection
}

pub mod test_utils {
    use super::*;
    use crate::models::{Author, Post};
    use crate::schema::{authors, posts};

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

    pub fn get_all_posts(conn: &mut SqliteConnection) -> Vec<Post> {
        posts::table
            .load::<Post>(conn)
            .expect("Failed to load posts")
    }
}
