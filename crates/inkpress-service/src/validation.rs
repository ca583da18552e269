use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minimum character count for post content; summaries must stay below it.
pub const CONTENT_MIN_CHARS: usize = 250;

/// Exact character count required of an author phone number.
pub const PHONE_NUMBER_CHARS: usize = 10;

const CLICKBAIT_MARKERS: [&str; 3] = ["amazing", "secret", "unbelievable"];

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Author must have a name")]
    EmptyName,
    #[error("Phone number must be exactly ten characters, got {0}")]
    PhoneNumberLength(usize),
    #[error("Post must have a title")]
    EmptyTitle,
    #[error("Content must be at least 250 characters long, got {0}")]
    ContentTooShort(usize),
    #[error("Summary must be less than 250 characters, got {0}")]
    SummaryTooLong(usize),
    #[error("Invalid category: {0:?}. Valid categories are: Fiction, Non-Fiction")]
    InvalidCategory(String),
}

/// The fixed post category enumeration. Matching is exact and
/// case-sensitive: "fiction" is not a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Fiction,
    NonFiction,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Fiction => write!(f, "Fiction"),
            Category::NonFiction => write!(f, "Non-Fiction"),
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fiction" => Ok(Category::Fiction),
            "Non-Fiction" => Ok(Category::NonFiction),
            other => Err(ValidationError::InvalidCategory(other.to_string())),
        }
    }
}

/// Trims the name and rejects it when nothing is left. The trimmed
/// string is the stored value.
pub fn validate_author_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Length-only check: an absent or empty phone number passes through,
/// anything else must be exactly ten characters. Digit content is
/// deliberately not checked.
pub fn validate_phone_number(
    phone_number: Option<String>,
) -> Result<Option<String>, ValidationError> {
    match phone_number {
        Some(p) if !p.is_empty() => {
            let len = p.chars().count();
            if len != PHONE_NUMBER_CHARS {
                return Err(ValidationError::PhoneNumberLength(len));
            }
            Ok(Some(p))
        }
        other => Ok(other),
    }
}

/// Trims the title and rejects it when nothing is left.
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Absent or empty content passes through; present content must reach
/// the 250-character floor. Stored unchanged, no trimming.
pub fn validate_content(content: Option<String>) -> Result<Option<String>, ValidationError> {
    match content {
        Some(c) if !c.is_empty() => {
            let len = c.chars().count();
            if len < CONTENT_MIN_CHARS {
                return Err(ValidationError::ContentTooShort(len));
            }
            Ok(Some(c))
        }
        other => Ok(other),
    }
}

/// Absent summaries pass through; present ones must stay strictly below
/// 250 characters.
pub fn validate_summary(summary: Option<String>) -> Result<Option<String>, ValidationError> {
    match summary {
        Some(s) => {
            let len = s.chars().count();
            if len >= CONTENT_MIN_CHARS {
                return Err(ValidationError::SummaryTooLong(len));
            }
            Ok(Some(s))
        }
        None => Ok(None),
    }
}

/// Validates a category against the fixed enumeration and returns its
/// canonical string form. An absent category fails the same way an
/// unknown one does, which makes the field mandatory in effect.
pub fn validate_category(category: Option<String>) -> Result<String, ValidationError> {
    let category = category.ok_or_else(|| ValidationError::InvalidCategory(String::new()))?;
    let parsed: Category = category.parse()?;
    Ok(parsed.to_string())
}

/// Pure clickbait check over a title: true when the lowercased title
/// contains any marker word as a substring. Computed on demand, never
/// stored.
pub fn is_clickbait(title: &str) -> bool {
    let lowered = title.to_lowercase();
    CLICKBAIT_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Author name tests
    #[test]
    fn test_validate_author_name_trims_whitespace() {
        assert_eq!(validate_author_name("  Jane Doe  ").unwrap(), "Jane Doe");
    }

    #[test]
    fn test_validate_author_name_passes_plain_name() {
        assert_eq!(validate_author_name("Jane Doe").unwrap(), "Jane Doe");
    }

    #[test]
    fn test_empty_author_name_returns_empty_error() {
        assert!(matches!(
            validate_author_name(""),
            Err(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn test_whitespace_author_name_returns_empty_error() {
        assert!(matches!(
            validate_author_name("   \t\n  "),
            Err(ValidationError::EmptyName)
        ));
    }

    // Phone number tests
    #[test]
    fn test_validate_phone_number_accepts_ten_characters() {
        assert_eq!(
            validate_phone_number(Some("5551234567".to_string())).unwrap(),
            Some("5551234567".to_string())
        );
    }

    #[test]
    fn test_validate_phone_number_is_length_only() {
        // Length, not digit content, is what the rule checks.
        assert!(validate_phone_number(Some("ABCDEFGHIJ".to_string())).is_ok());
    }

    #[test]
    fn test_validate_phone_number_passes_absent() {
        assert_eq!(validate_phone_number(None).unwrap(), None);
    }

    #[test]
    fn test_validate_phone_number_passes_empty_string() {
        assert_eq!(
            validate_phone_number(Some(String::new())).unwrap(),
            Some(String::new())
        );
    }

    #[test]
    fn test_short_phone_number_returns_length_error() {
        assert!(matches!(
            validate_phone_number(Some("555123".to_string())),
            Err(ValidationError::PhoneNumberLength(6))
        ));
    }

    #[test]
    fn test_long_phone_number_returns_length_error() {
        assert!(matches!(
            validate_phone_number(Some("55512345678".to_string())),
            Err(ValidationError::PhoneNumberLength(11))
        ));
    }

    // Title tests
    #[test]
    fn test_validate_title_trims_whitespace() {
        assert_eq!(validate_title("  My Post  ").unwrap(), "My Post");
    }

    #[test]
    fn test_whitespace_title_returns_empty_error() {
        assert!(matches!(
            validate_title(" \t "),
            Err(ValidationError::EmptyTitle)
        ));
    }

    // Content tests
    #[test]
    fn test_validate_content_accepts_exactly_250_chars() {
        let content = "a".repeat(250);
        assert_eq!(
            validate_content(Some(content.clone())).unwrap(),
            Some(content)
        );
    }

    #[test]
    fn test_content_of_249_chars_returns_too_short_error() {
        assert!(matches!(
            validate_content(Some("a".repeat(249))),
            Err(ValidationError::ContentTooShort(249))
        ));
    }

    #[test]
    fn test_validate_content_counts_characters_not_bytes() {
        // 250 multi-byte characters are enough even though the byte
        // length is larger.
        let content = "é".repeat(250);
        assert!(validate_content(Some(content)).is_ok());
    }

    #[test]
    fn test_validate_content_passes_absent() {
        assert_eq!(validate_content(None).unwrap(), None);
    }

    #[test]
    fn test_validate_content_passes_empty_string() {
        assert_eq!(
            validate_content(Some(String::new())).unwrap(),
            Some(String::new())
        );
    }

    // Summary tests
    #[test]
    fn test_validate_summary_accepts_exactly_249_chars() {
        let summary = "s".repeat(249);
        assert_eq!(
            validate_summary(Some(summary.clone())).unwrap(),
            Some(summary)
        );
    }

    #[test]
    fn test_summary_of_250_chars_returns_too_long_error() {
        assert!(matches!(
            validate_summary(Some("s".repeat(250))),
            Err(ValidationError::SummaryTooLong(250))
        ));
    }

    #[test]
    fn test_validate_summary_passes_absent() {
        assert_eq!(validate_summary(None).unwrap(), None);
    }

    // Category tests
    #[test]
    fn test_validate_category_accepts_fiction() {
        assert_eq!(
            validate_category(Some("Fiction".to_string())).unwrap(),
            "Fiction"
        );
    }

    #[test]
    fn test_validate_category_accepts_non_fiction() {
        assert_eq!(
            validate_category(Some("Non-Fiction".to_string())).unwrap(),
            "Non-Fiction"
        );
    }

    #[test]
    fn test_lowercase_category_returns_invalid_error() {
        assert!(matches!(
            validate_category(Some("fiction".to_string())),
            Err(ValidationError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_unknown_category_returns_invalid_error() {
        assert!(matches!(
            validate_category(Some("Sci-Fi".to_string())),
            Err(ValidationError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_empty_category_returns_invalid_error() {
        assert!(matches!(
            validate_category(Some(String::new())),
            Err(ValidationError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_absent_category_returns_invalid_error() {
        assert!(matches!(
            validate_category(None),
            Err(ValidationError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_category_display_matches_exact_strings() {
        assert_eq!(Category::Fiction.to_string(), "Fiction");
        assert_eq!(Category::NonFiction.to_string(), "Non-Fiction");
    }

    // Clickbait tests
    #[test]
    fn test_clickbait_title_with_two_markers() {
        assert!(is_clickbait("The Amazing Secret"));
    }

    #[test]
    fn test_clickbait_marker_inside_word() {
        // Substring match, not word match.
        assert!(is_clickbait("Secretly Good Recipes"));
    }

    #[test]
    fn test_plain_title_is_not_clickbait() {
        assert!(!is_clickbait("A Quiet Morning"));
    }

    #[test]
    fn test_clickbait_is_case_insensitive() {
        assert!(is_clickbait("UNBELIEVABLE but true"));
    }
}
