//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// Construction normalizes the input by stripping every non-digit character
/// and accepts the result only if it is exactly 9 digits long. The stored
/// value is always the bare 9-digit string, so two numbers entered with
/// different punctuation compare equal.
///
/// # Example
///
/// ```
/// use rolodex::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("123-45-6789").unwrap();
/// assert_eq!(phone.as_str(), "123456789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

/// Required digit count after normalization.
const PHONE_DIGITS: usize = 9;

impl PhoneNumber {
    /// Create a new PhoneNumber, normalizing and validating the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if stripping non-digit
    /// characters does not leave exactly 9 digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() != PHONE_DIGITS {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(digits))
    }

    /// Get the normalized phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as the normalized string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
