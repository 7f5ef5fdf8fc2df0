//! AddressBook: every contact keyed by name, plus the birthday report.

use super::record::Record;
use crate::domain::DATE_FORMAT;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How many days ahead [`AddressBook::upcoming_birthdays`] looks, inclusive.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// One entry of the upcoming-birthdays report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Congratulation date, already moved off the weekend
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.date.format(DATE_FORMAT))
    }
}

/// The collection of all contacts, one [`Record`] per name.
///
/// Persisted as a plain list of records; the name index is rebuilt on load
/// so the key always matches the record's own name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record, returning it if it existed.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose birthday falls within the next week, `today` included.
    ///
    /// Dates landing on Saturday or Sunday are moved to the following Monday.
    /// The result is ordered by congratulation date, then name.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let days = record.days_to_birthday(today)?;
                if !(0..=UPCOMING_WINDOW_DAYS).contains(&days) {
                    return None;
                }
                let date = today.checked_add_days(Days::new(days as u64))?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    date: shift_off_weekend(date),
                })
            })
            .collect();

        upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        upcoming
    }
}

/// Move Saturday and Sunday to the following Monday.
pub fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let offset = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };
    date.checked_add_days(Days::new(offset)).unwrap_or(date)
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::with_name(name).unwrap();
        if let Some(b) = birthday {
            record.add_birthday(b).unwrap();
        }
        record
    }

    #[test]
    fn test_add_find_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("John", None));
        assert_eq!(book.len(), 1);
        assert!(book.find("John").is_some());
        assert!(book.find("john").is_none());

        assert!(book.delete("John").is_some());
        assert!(book.delete("John").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_record_replaces_same_name() {
        let mut book = AddressBook::new();
        let mut first = record("John", None);
        first.add_phone("1111111111").unwrap();
        book.add_record(first);
        book.add_record(record("John", None));

        assert_eq!(book.len(), 1);
        assert!(book.find("John").unwrap().phones().is_empty());
    }

    #[test]
    fn test_iter_is_ordered_by_name() {
        let mut book = AddressBook::new();
        book.add_record(record("Zed", None));
        book.add_record(record("Amy", None));
        let names: Vec<_> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Amy", "Zed"]);
    }

    #[test]
    fn test_shift_off_weekend() {
        assert_eq!(shift_off_weekend(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(shift_off_weekend(date(2024, 6, 16)), date(2024, 6, 17));
        assert_eq!(shift_off_weekend(date(2024, 6, 18)), date(2024, 6, 18));
    }

    #[test]
    fn test_upcoming_birthdays_window_and_shift() {
        // Thursday 13.06.2024; the window runs through Thursday 20.06.2024.
        let today = date(2024, 6, 13);
        let mut book = AddressBook::new();
        book.add_record(record("NoBirthday", None));
        book.add_record(record("Today", Some("13.06.1990")));
        book.add_record(record("Saturday", Some("15.06.1985")));
        book.add_record(record("Sunday", Some("16.06.1970")));
        book.add_record(record("Tuesday", Some("18.06.2001")));
        book.add_record(record("LastDay", Some("20.06.1999")));
        book.add_record(record("TooFar", Some("21.06.1999")));
        book.add_record(record("Passed", Some("12.06.1999")));

        let upcoming = book.upcoming_birthdays(today);
        let rendered: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "Today - 13.06.2024",
                "Saturday - 17.06.2024",
                "Sunday - 17.06.2024",
                "Tuesday - 18.06.2024",
                "LastDay - 20.06.2024",
            ]
        );
    }

    #[test]
    fn test_upcoming_birthdays_across_year_end() {
        // Tuesday 31.12.2024; 04.01.2025 is a Saturday.
        let today = date(2024, 12, 31);
        let mut book = AddressBook::new();
        book.add_record(record("NewYear", Some("01.01.1980")));
        book.add_record(record("Weekend", Some("04.01.1995")));

        let upcoming = book.upcoming_birthdays(today);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].date, date(2025, 1, 1));
        assert_eq!(upcoming[1].date, date(2025, 1, 6));
    }

    #[test]
    fn test_upcoming_birthdays_empty_book() {
        assert!(AddressBook::new()
            .upcoming_birthdays(date(2024, 6, 13))
            .is_empty());
    }

    #[test]
    fn test_serialization_rebuilds_index() {
        let mut book = AddressBook::new();
        book.add_record(record("John", Some("01.01.1990")));
        book.add_record(record("Jane", None));

        let json = serde_json::to_string(&book).unwrap();
        let back: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
        assert!(back.find("Jane").is_some());
    }
}
