use thiserror::Error;

/// A form field that failed to produce a valid record.
///
/// Each variant names the offending field so the client sees which
/// input to fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("age must be a whole number between 0 and 130, got {0:?}")]
    Age(String),
    #[error("gender must be one of male, female, other, got {0:?}")]
    Gender(String),
    #[error("{0} must be a positive integer, got {1:?}")]
    Id(&'static str, String),
    #[error("date must be formatted YYYY-MM-DD, got {0:?}")]
    Date(String),
    #[error("time must be formatted HH:MM, got {0:?}")]
    Time(String),
}

/// Trim a required text field, rejecting empty input.
pub(crate) fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(trimmed.to_string())
}
