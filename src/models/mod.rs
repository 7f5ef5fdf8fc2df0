//! Data model of the address book.
//!
//! A [`Record`] holds one contact's validated fields; an [`AddressBook`]
//! indexes records by name and produces the upcoming-birthdays report.

pub mod address_book;
pub mod record;

pub use address_book::{shift_off_weekend, AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use record::{PhoneEdit, Record};
