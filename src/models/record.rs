//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of [`Record::edit_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneEdit {
    /// The old number was found and replaced.
    Replaced,
    /// The old number is not on this record; nothing changed.
    NotFound,
}

/// A single contact: a name, its phone numbers, and an optional birthday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Contact name, fixed for the lifetime of the record
    name: Name,

    /// Phone numbers in insertion order, without duplicates
    phones: Vec<Phone>,

    /// Date of birth, if known
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create an empty record from a raw name string.
    pub fn with_name(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(Name::new(name)?))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number.
    ///
    /// Returns `Ok(false)` when the number is already on the record.
    pub fn add_phone(&mut self, phone: &str) -> Result<bool, ValidationError> {
        let phone = Phone::new(phone)?;
        if self.phones.contains(&phone) {
            return Ok(false);
        }
        self.phones.push(phone);
        Ok(true)
    }

    /// Replace the first occurrence of `old` with `new`.
    ///
    /// A missing `old` is reported as `NotFound` whatever `new` looks like;
    /// otherwise `new` is validated before anything is touched. When `new` is
    /// already on the record the old entry is dropped instead, keeping
    /// numbers unique.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<PhoneEdit, ValidationError> {
        let Some(index) = self.phones.iter().position(|p| p.as_str() == old) else {
            return Ok(PhoneEdit::NotFound);
        };
        let new = Phone::new(new)?;

        if self.phones.iter().any(|p| *p == new) && self.phones[index] != new {
            self.phones.remove(index);
        } else {
            self.phones[index] = new;
        }
        Ok(PhoneEdit::Replaced)
    }

    /// Remove a phone number, returning whether it was present.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        self.phones.len() != before
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set (or replace) the birthday from `DD.MM.YYYY`.
    pub fn add_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    /// Days from `today` until the next birthday, `0` if it is today.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        let next = self.birthday?.next_occurrence(today)?;
        Some((next - today).num_days())
    }

    /// Phone numbers joined with `", "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
