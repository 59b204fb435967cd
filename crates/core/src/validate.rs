//! Input validation for the small set of user-supplied fields.

use crate::artwork::CATEGORY_ALL;
use crate::error::CoreError;

/// Maximum length for titles and category names.
pub const MAX_NAME_LENGTH: usize = 200;

/// Validate an artwork title: non-empty after trimming, bounded length.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a category label attached to an artwork. Any non-empty label is
/// accepted; artworks may reference labels with no matching category row.
pub fn validate_category_label(label: &str) -> Result<(), CoreError> {
    if label.trim().is_empty() {
        return Err(CoreError::Validation("Category must not be empty".into()));
    }
    Ok(())
}

/// Validate the name of a category to be created. "All" is synthesized at
/// read time and can never exist as a row.
pub fn validate_new_category_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Category name must not be empty".into()));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Category name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    if trimmed == CATEGORY_ALL {
        return Err(CoreError::Validation(format!(
            "'{CATEGORY_ALL}' is a reserved category name"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_must_not_be_blank() {
        assert!(validate_title("Peacock Mandala").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn title_length_is_bounded() {
        assert!(validate_title(&"x".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_title(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn category_label_must_not_be_blank() {
        assert!(validate_category_label("Bridal").is_ok());
        assert!(validate_category_label("Uncategorized").is_ok());
        assert!(validate_category_label(" ").is_err());
    }

    #[test]
    fn new_category_rejects_reserved_name() {
        assert!(validate_new_category_name("Arabic").is_ok());
        assert!(validate_new_category_name("All").is_err());
        assert!(validate_new_category_name("").is_err());
    }
}
