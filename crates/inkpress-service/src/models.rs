use crate::validation::{
    self, ValidationError, validate_author_name, validate_category, validate_content,
    validate_phone_number, validate_summary, validate_title,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::authors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub phone_number: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = crate::schema::authors)]
pub struct NewAuthor {
    pub name: String,
    pub phone_number: Option<String>,
}

impl NewAuthor {
    /// Runs every field validator before the value exists; a failing
    /// field means no `NewAuthor` is ever constructed.
    pub fn new(name: String, phone_number: Option<String>) -> Result<Self, ValidationError> {
        let name = validate_author_name(&name)?;
        let phone_number = validate_phone_number(phone_number)?;

        Ok(NewAuthor { name, phone_number })
    }
}

/// Validated partial update for an author. `None` fields are left
/// untouched by the UPDATE.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::authors)]
pub struct AuthorChanges {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

impl AuthorChanges {
    pub fn new(
        name: Option<String>,
        phone_number: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.map(|n| validate_author_name(&n)).transpose()?;
        let phone_number = validate_phone_number(phone_number)?;

        Ok(AuthorChanges { name, phone_number })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

impl Post {
    /// Derived from the title on every call, never persisted.
    pub fn is_clickbait(&self) -> bool {
        validation::is_clickbait(&self.title)
    }
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = crate::schema::posts)]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: String,
}

impl NewPost {
    pub fn new(
        title: String,
        content: Option<String>,
        summary: Option<String>,
        category: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = validate_title(&title)?;
        let content = validate_content(content)?;
        let summary = validate_summary(summary)?;
        let category = validate_category(category)?;

        Ok(NewPost {
            title,
            content,
            summary,
            category,
        })
    }
}

/// Validated partial update for a post. `None` fields are left
/// untouched by the UPDATE.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::posts)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
}

impl PostChanges {
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        summary: Option<String>,
        category: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.map(|t| validate_title(&t)).transpose()?;
        let content = validate_content(content)?;
        let summary = validate_summary(summary)?;
        let category = category
            .map(|c| validate_category(Some(c)))
            .transpose()?;

        Ok(PostChanges {
            title,
            content,
            summary,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_new_author_stores_trimmed_name() {
        let author = NewAuthor::new("  Jane Doe  ".to_string(), None).unwrap();
        assert_eq!(author.name, "Jane Doe");
    }

    #[test]
    fn test_new_author_rejects_blank_name() {
        assert!(matches!(
            NewAuthor::new("   ".to_string(), None),
            Err(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn test_new_author_rejects_short_phone_number() {
        assert!(matches!(
            NewAuthor::new("Jane".to_string(), Some("12345".to_string())),
            Err(ValidationError::PhoneNumberLength(5))
        ));
    }

    #[test]
    fn test_new_post_requires_category() {
        let result = NewPost::new("Title".to_string(), None, None, None);
        assert!(matches!(result, Err(ValidationError::InvalidCategory(_))));
    }

    #[test]
    fn test_new_post_rejects_content_below_floor() {
        let result = NewPost::new(
            "X".to_string(),
            Some("a".repeat(249)),
            None,
            Some("Fiction".to_string()),
        );
        assert!(matches!(result, Err(ValidationError::ContentTooShort(249))));
    }

    #[test]
    fn test_new_post_accepts_content_at_floor() {
        let post = NewPost::new(
            "X".to_string(),
            Some("a".repeat(250)),
            None,
            Some("Fiction".to_string()),
        )
        .unwrap();
        assert_eq!(post.content.unwrap().len(), 250);
        assert_eq!(post.category, "Fiction");
    }

    #[test]
    fn test_post_changes_validate_each_provided_field() {
        assert!(matches!(
            PostChanges::new(None, None, Some("s".repeat(250)), None),
            Err(ValidationError::SummaryTooLong(250))
        ));

        let changes =
            PostChanges::new(Some("  New Title  ".to_string()), None, None, None).unwrap();
        assert_eq!(changes.title, Some("New Title".to_string()));
        assert_eq!(changes.category, None);
    }

    #[test]
    fn test_post_is_clickbait_recomputed_from_title() {
        let mut post = Post {
            id: 1,
            title: "A Quiet Morning".to_string(),
            content: None,
            summary: None,
            category: "Fiction".to_string(),
            created_at: chrono::NaiveDateTime::default(),
            updated_at: None,
        };
        assert!(!post.is_clickbait());

        post.title = "The Amazing Secret".to_string();
        assert!(post.is_clickbait());
    }
}
