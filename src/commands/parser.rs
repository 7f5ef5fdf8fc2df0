//! Turning an input line into a [`Command`].

use std::fmt;

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Exit,
}

impl Command {
    /// Look a command up by its keyword, ignoring ASCII case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let command = match keyword.to_ascii_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "delete" => Self::Delete,
            "close" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }

    /// Argument synopsis shown when arguments are missing.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add <name> [phone]",
            Self::Change => "change <name> <old phone> <new phone>",
            Self::Phone => "phone <name>",
            Self::All => "all",
            Self::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Self::ShowBirthday => "show-birthday <name>",
            Self::Birthdays => "birthdays",
            Self::Delete => "delete <name>",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = self.usage().split_whitespace().next().unwrap_or_default();
        write!(f, "{}", keyword)
    }
}

/// Result of parsing one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInput<'a> {
    /// Blank line
    Empty,
    /// A recognised command and its arguments
    Command(Command, Vec<&'a str>),
    /// The first word is not a command
    Unknown(&'a str),
}

/// Split a line on whitespace into a command and its arguments.
pub fn parse_input(line: &str) -> ParsedInput<'_> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return ParsedInput::Empty;
    };

    match Command::from_keyword(keyword) {
        Some(command) => ParsedInput::Command(command, words.collect()),
        None => ParsedInput::Unknown(keyword),
    }
}
