//! Command handlers.
//!
//! Each handler validates its arguments, applies one operation to the
//! [`AddressBook`], and returns the reply to print. Failures come back as
//! [`CommandError`] and are rendered by the dispatcher.

use super::parser::Command;
use crate::domain::Name;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, PhoneEdit, Record};
use chrono::NaiveDate;
use tracing::debug;

/// Fail with `MissingArguments` unless at least `count` arguments were given.
fn require_args(command: Command, args: &[&str], count: usize) -> CommandResult<()> {
    if args.len() < count {
        return Err(CommandError::MissingArguments {
            usage: command.usage(),
        });
    }
    Ok(())
}

fn find<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

pub fn hello() -> CommandResult<String> {
    Ok("How can I help you?".to_string())
}

/// `add <name> [phone]`: create the contact if needed, then add the phone.
///
/// The phone is validated before a new contact is created, so a typo never
/// leaves an empty contact behind.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    require_args(Command::Add, args, 1)?;
    let name = Name::new(args[0])?;
    let phone = args.get(1).copied();

    if let Some(record) = book.find_mut(name.as_str()) {
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        debug!("Updated contact {}", name);
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name);
    if let Some(phone) = phone {
        record.add_phone(phone)?;
    }
    debug!("Added contact {}", record.name());
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`: replace one of the contact's numbers.
pub fn change_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    require_args(Command::Change, args, 3)?;
    let (name, old, new) = (args[0], args[1], args[2]);
    let record = find_mut(book, name)?;

    match record.edit_phone(old, new)? {
        PhoneEdit::Replaced => {
            debug!("Changed phone of {} from {} to {}", name, old, new);
            Ok(format!("Phone {} changed to {}.", old, new))
        }
        PhoneEdit::NotFound => Ok(format!("Phone {} not found for {}.", old, name)),
    }
}

/// `phone <name>`: list the contact's numbers.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    require_args(Command::Phone, args, 1)?;
    let record = find(book, args[0])?;

    if record.phones().is_empty() {
        return Ok(format!("{} has no phone numbers.", record.name()));
    }
    Ok(format!("{}: {}", record.name(), record.phones_display()))
}

/// `all`: one line per contact, ordered by name.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }

    let lines: Vec<String> = book
        .iter()
        .map(|record| {
            let phones = if record.phones().is_empty() {
                "no phones".to_string()
            } else {
                record.phones_display()
            };
            match record.birthday() {
                Some(birthday) => format!("{}: {} (birthday: {})", record.name(), phones, birthday),
                None => format!("{}: {}", record.name(), phones),
            }
        })
        .collect();
    Ok(lines.join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`: set or replace the birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    require_args(Command::AddBirthday, args, 2)?;
    let (name, date) = (args[0], args[1]);
    let record = find_mut(book, name)?;

    record.add_birthday(date)?;
    let stored = record
        .birthday()
        .map(ToString::to_string)
        .unwrap_or_else(|| date.to_string());
    debug!("Set birthday of {} to {}", name, stored);
    Ok(format!("Birthday added for {}: {}.", record.name(), stored))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    require_args(Command::ShowBirthday, args, 1)?;
    let record = find(book, args[0])?;

    match record.birthday() {
        Some(birthday) => Ok(format!("{}: {}", record.name(), birthday)),
        None => Ok(format!("Birthday is not set for {}.", record.name())),
    }
}

/// `birthdays`: who to congratulate over the next week.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("No birthdays in the next week.".to_string());
    }

    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `delete <name>`
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    require_args(Command::Delete, args, 1)?;
    let name = args[0];

    book.delete(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    debug!("Deleted contact {}", name);
    Ok(format!("Contact {} deleted.", name))
}
