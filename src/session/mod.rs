//! The interactive session.
//!
//! Reads commands line by line, prints each reply, and hands the address
//! book back to the caller once the user says `close`/`exit` or input ends.

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

use crate::commands::{execute, Outcome};
use crate::models::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run the read-dispatch-print loop until exit or end of input.
///
/// Only I/O failures on `input`/`output` are errors; command failures are
/// printed and the loop carries on.
pub fn run_session<R, W, C>(
    mut book: AddressBook,
    mut input: R,
    mut output: W,
    clock: &C,
) -> io::Result<AddressBook>
where
    R: BufRead,
    W: Write,
    C: Clock + ?Sized,
{
    info!("Session started with {} contacts", book.len());
    writeln!(output, "{}", GREETING)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            writeln!(output)?;
            break;
        }

        match execute(&line, &mut book, clock.today()) {
            Outcome::Continue(Some(reply)) => writeln!(output, "{}", reply)?,
            Outcome::Continue(None) => {}
            Outcome::Exit(farewell) => {
                writeln!(output, "{}", farewell)?;
                break;
            }
        }
    }

    info!("Session finished with {} contacts", book.len());
    Ok(book)
}
