//! Title validation shared by create and update.
//!
//! All checks run against the trimmed title. The length limit counts
//! characters, not bytes.

use crate::error::ValidationError;

/// Longest accepted title, in characters, after trimming.
pub const MAX_TITLE_LEN: usize = 50;

/// Validate a title and return its trimmed form.
///
/// Absent, empty and whitespace-only titles are `ValidationError::InvalidTitle`;
/// titles longer than [`MAX_TITLE_LEN`] are `ValidationError::TitleTooLong`.
pub fn validate_title(title: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = title.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidTitle);
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(trimmed.to_string())
}
