//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The only accepted textual date format (`DD.MM.YYYY`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth.
///
/// Parsed from and rendered as `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("07.03.1991").unwrap();
/// assert_eq!(birthday.to_string(), "07.03.1991");
/// assert!(Birthday::new("1991-03-07").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not match
    /// the format or names a day that does not exist (e.g. `31.02.2000`).
    /// Day and month take one or two digits; the year takes exactly four.
    pub fn new(date: &str) -> Result<Self, ValidationError> {
        if !Self::has_date_shape(date) {
            return Err(ValidationError::InvalidBirthday(date.to_string()));
        }
        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(date.to_string()))
    }

    /// Three dot-separated ASCII digit groups: `D{1,2}.M{1,2}.YYYY`.
    fn has_date_shape(date: &str) -> bool {
        let digits = |part: &str, min: usize, max: usize| {
            (min..=max).contains(&part.len()) && part.chars().all(|c| c.is_ascii_digit())
        };
        let parts: Vec<&str> = date.split('.').collect();
        match parts.as_slice() {
            &[day, month, year] => digits(day, 1, 2) && digits(month, 1, 2) && digits(year, 4, 4),
            _ => false,
        }
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// 29 February maps to 1 March in non-leap years. Returns `None` only
    /// when `year` is outside the representable range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// The first anniversary falling on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            self.anniversary_in(today.year() + 1)
        }
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15.08.1985").unwrap();
        assert_eq!(birthday.date(), date(1985, 8, 15));
        assert_eq!(birthday.to_string(), "15.08.1985");
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1985-08-15").is_err());
        assert!(Birthday::new("15/08/1985").is_err());
        assert!(Birthday::new("32.01.2000").is_err());
        assert!(Birthday::new("31.02.2000").is_err());
        assert!(Birthday::new("29.02.2001").is_err());
        assert!(Birthday::new("01.01.90").is_err());
        assert!(Birthday::new("01.01.+1990").is_err());
        assert!(Birthday::new(" 01.01.1990").is_err());
        assert!(Birthday::new("01.01.1990 ").is_err());
        assert!(Birthday::new("01.01.19900").is_err());
        assert!(Birthday::new("01..1990").is_err());
        assert!(Birthday::new("29.02.2000").is_ok());
        assert!("01.01.2000".parse::<Birthday>().is_ok());
    }

    #[test]
    fn test_birthday_accepts_unpadded_day_and_month() {
        let birthday = Birthday::new("1.1.1990").unwrap();
        assert_eq!(birthday.to_string(), "01.01.1990");
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::new("20.10.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2026, 10, 19)),
            Some(date(2026, 10, 20))
        );
    }

    #[test]
    fn test_next_occurrence_today() {
        let birthday = Birthday::new("19.10.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2026, 10, 19)),
            Some(date(2026, 10, 19))
        );
    }

    #[test]
    fn test_next_occurrence_rolls_into_next_year() {
        let birthday = Birthday::new("01.01.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 12, 31)),
            Some(date(2025, 1, 1))
        );
    }

    #[test]
    fn test_leap_day_in_common_year() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(birthday.anniversary_in(2025), Some(date(2025, 3, 1)));
        assert_eq!(birthday.anniversary_in(2028), Some(date(2028, 2, 29)));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("05.11.1979").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"05.11.1979\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1979-11-05\"");
        assert!(result.is_err());
    }
}
