pub mod authors;
pub mod posts;
pub mod traits;

pub use authors::SqliteAuthorRepository;
pub use posts::SqlitePostRepository;
pub use traits::{AuthorRepository, PostRepository};
