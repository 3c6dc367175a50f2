//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during field value validation.
///
/// Validation runs at construction time and again on deserialization, so a
/// value object that exists is always well-formed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number did not normalize to exactly 9 digits.
    #[error("phone must have exactly 9 digits: {0}")]
    InvalidPhone(String),

    /// The birthday was not a valid ISO calendar date.
    #[error("invalid date format, expected YYYY-MM-DD: {0}")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPhone("123".to_string());
        assert_eq!(err.to_string(), "phone must have exactly 9 digits: 123");

        let err = ValidationError::InvalidDate("tomorrow".to_string());
        assert_eq!(
            err.to_string(),
            "invalid date format, expected YYYY-MM-DD: tomorrow"
        );
    }
}
