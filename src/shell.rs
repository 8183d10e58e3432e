//! Interactive read-eval-print loop.
//!
//! The shell owns the address book for the lifetime of the session. It
//! reads one line per command, splits it on whitespace, dispatches the
//! first word and prints the reply. Generic over its input and output so
//! sessions can be driven from memory in tests.

use crate::book::AddressBook;
use crate::commands::{Command, CommandContext, FAREWELL, INVALID_COMMAND};
use crate::config::Config;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Source of the reference date for birthday commands.
pub type Clock = fn() -> NaiveDate;

/// Today's date in the local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// One interactive session.
pub struct Shell {
    book: AddressBook,
    config: Config,
    clock: Clock,
}

impl Shell {
    /// Create a shell with an empty book that reads the local date.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, local_today)
    }

    /// Create a shell whose birthday commands use `clock` for "today".
    pub fn with_clock(config: Config, clock: Clock) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            clock,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run until `close`/`exit` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures on `input` or `output` are returned; command
    /// errors are printed as replies.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        tracing::info!(
            upcoming_birthday_days = self.config.upcoming_birthday_days,
            "Assistant session started"
        );
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                writeln!(output, "{}", FAREWELL)?;
                break;
            }
            // Undecodable bytes become U+FFFD instead of ending the session.
            let line = String::from_utf8_lossy(&buf);

            let mut tokens = line.split_whitespace();
            let Some(word) = tokens.next() else {
                continue;
            };
            let args: Vec<&str> = tokens.collect();

            let Some(command) = Command::parse(word) else {
                tracing::debug!(word = %word, "Unknown command");
                writeln!(output, "{}", INVALID_COMMAND)?;
                continue;
            };

            let ctx = self.context();
            let reply = command.execute(&args, &mut self.book, &ctx);
            writeln!(output, "{}", reply)?;

            if command.is_exit() {
                break;
            }
        }

        tracing::info!(contacts = self.book.len(), "Assistant session ended");
        Ok(())
    }

    fn context(&self) -> CommandContext {
        CommandContext::new((self.clock)())
            .with_upcoming_birthday_days(self.config.upcoming_birthday_days)
    }
}
