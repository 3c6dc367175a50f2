//! Birthday value object and next-occurrence arithmetic.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// ISO date format used for input, display and the snapshot.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A contact's birthday, held as a validated calendar date.
///
/// Construction only succeeds for a real date in `YYYY-MM-DD` form, so the
/// wrapped `NaiveDate` never needs re-checking.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::new("1990-06-15").unwrap();
/// assert_eq!(birthday.to_string(), "1990-06-15");
/// assert!(Birthday::new("1990-13-01").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input does not parse as
    /// a real calendar date.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(value.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Days from `today` to the next occurrence of this birthday.
    ///
    /// Returns 0 when `today` is the birthday. A Feb 29 birthday rolls to
    /// Mar 1 in years without a leap day.
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        let this_year = self.occurrence_in(today.year());
        let next = if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            this_year
        };
        next.signed_duration_since(today).num_days()
    }

    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).unwrap_or_else(|| {
            // only Feb 29 can fail to land in a given year
            NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
        })
    }
}

// Serde support - serialize as the ISO string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.format(DATE_FORMAT))
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
