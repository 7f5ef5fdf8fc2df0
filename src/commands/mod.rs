//! Command parsing and dispatch.
//!
//! [`execute`] is the single boundary between raw input lines and the
//! address book: it parses the line, runs the matching handler, and renders
//! any [`CommandError`](crate::error::CommandError) as an `Error: ...` reply
//! so a bad command never ends the session.

pub mod handlers;
mod parser;

pub use parser::{parse_input, Command, ParsedInput};

use crate::models::AddressBook;
use chrono::NaiveDate;
use tracing::warn;

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply (if any) and read the next line
    Continue(Option<String>),
    /// Print the farewell and stop
    Exit(String),
}

/// Parse and run one line of input against `book`.
pub fn execute(line: &str, book: &mut AddressBook, today: NaiveDate) -> Outcome {
    let (command, args) = match parse_input(line) {
        ParsedInput::Empty => return Outcome::Continue(None),
        ParsedInput::Unknown(keyword) => {
            warn!("Unknown command: {}", keyword);
            return Outcome::Continue(Some("Invalid command.".to_string()));
        }
        ParsedInput::Command(command, args) => (command, args),
    };

    let result = match command {
        Command::Exit => return Outcome::Exit("Good bye!".to_string()),
        Command::Hello => handlers::hello(),
        Command::Add => handlers::add_contact(&args, book),
        Command::Change => handlers::change_phone(&args, book),
        Command::Phone => handlers::show_phone(&args, book),
        Command::All => handlers::show_all(book),
        Command::AddBirthday => handlers::add_birthday(&args, book),
        Command::ShowBirthday => handlers::show_birthday(&args, book),
        Command::Birthdays => handlers::birthdays(book, today),
        Command::Delete => handlers::delete_contact(&args, book),
    };

    let reply = result.unwrap_or_else(|e| {
        warn!("Command {} failed: {}", command, e);
        format!("Error: {}", e)
    });
    Outcome::Continue(Some(reply))
}
