//! Command operations for the assistant.
//!
//! Each operation takes the already-split argument list and the address
//! book and produces the text shown to the user. Operations return a
//! [`CommandResult`]; [`Command::execute`] turns any error into its
//! message so the caller only ever sees a reply.
//!
//! - **contacts**: `add`, `change`, `phone`, `all`
//! - **birthdays**: `add-birthday`, `show-birthday`, `birthdays`

pub mod birthdays;
pub mod contacts;

pub use birthdays::{add_birthday, show_birthday, show_upcoming_birthdays};
pub use contacts::{add_contact, change_contact, show_all, show_phones};

use crate::book::{AddressBook, UPCOMING_BIRTHDAY_DAYS};
use crate::error::{CommandError, CommandResult};
use chrono::NaiveDate;

pub const CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";

/// A command word recognised by the assistant.
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
    Exit,
}

impl Command {
    /// Match a command word exactly. Unknown words yield `None`.
    pub fn parse(word: &str) -> Option<Self> {
        let command = match word {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }

    pub fn is_exit(self) -> bool {
        self == Self::Exit
    }

    /// Run the command and return the reply text.
    pub fn execute(self, args: &[&str], book: &mut AddressBook, ctx: &CommandContext) -> String {
        tracing::debug!(command = ?self, arg_count = args.len(), "Executing command");
        let result = match self {
            Self::Hello => Ok(GREETING.to_string()),
            Self::Exit => Ok(FAREWELL.to_string()),
            Self::Add => add_contact(args, book),
            Self::Change => change_contact(args, book),
            Self::Phone => show_phones(args, book),
            Self::All => Ok(show_all(book)),
            Self::AddBirthday => add_birthday(args, book),
            Self::ShowBirthday => show_birthday(args, book),
            Self::Birthdays => Ok(show_upcoming_birthdays(
                book,
                ctx.today,
                ctx.upcoming_birthday_days,
            )),
        };
        into_reply(result)
    }
}

/// Per-invocation inputs that do not come from the argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// Reference date for birthday proximity
    pub today: NaiveDate,

    /// Inclusive window for the `birthdays` command
    pub upcoming_birthday_days: u32,
}

impl CommandContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            upcoming_birthday_days: UPCOMING_BIRTHDAY_DAYS,
        }
    }

    pub fn with_upcoming_birthday_days(mut self, days: u32) -> Self {
        self.upcoming_birthday_days = days;
        self
    }
}

/// Collapse an operation's outcome into the text shown to the user.
pub fn into_reply(result: CommandResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!(error = %e, "Command rejected");
            e.to_string()
        }
    }
}

/// Positional arguments of one command, with its usage line for errors.
pub(crate) struct Args<'a> {
    values: &'a [&'a str],
    usage: &'static str,
}

impl<'a> Args<'a> {
    pub(crate) fn new(values: &'a [&'a str], usage: &'static str) -> Self {
        Self { values, usage }
    }

    pub(crate) fn required(&self, index: usize) -> CommandResult<&'a str> {
        self.optional(index)
            .ok_or(CommandError::MissingArgument { usage: self.usage })
    }

    pub(crate) fn optional(&self, index: usize) -> Option<&'a str> {
        self.values.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> CommandContext {
        CommandContext::new(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
    }

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("hello"), Some(Command::Hello));
        assert_eq!(Command::parse("add"), Some(Command::Add));
        assert_eq!(Command::parse("change"), Some(Command::Change));
        assert_eq!(Command::parse("phone"), Some(Command::Phone));
        assert_eq!(Command::parse("all"), Some(Command::All));
        assert_eq!(Command::parse("add-birthday"), Some(Command::AddBirthday));
        assert_eq!(Command::parse("show-birthday"), Some(Command::ShowBirthday));
        assert_eq!(Command::parse("birthdays"), Some(Command::Birthdays));
        assert_eq!(Command::parse("close"), Some(Command::Exit));
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_unknown_commands() {
        assert_eq!(Command::parse("Add"), None);
        assert_eq!(Command::parse("remove"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_execute_hello_and_exit() {
        let mut book = AddressBook::new();
        assert_eq!(Command::Hello.execute(&[], &mut book, &ctx()), GREETING);
        assert_eq!(Command::Exit.execute(&[], &mut book, &ctx()), FAREWELL);
        assert!(Command::Exit.is_exit());
        assert!(!Command::Hello.is_exit());
    }

    #[test]
    fn test_execute_turns_errors_into_messages() {
        let mut book = AddressBook::new();
        assert_eq!(
            Command::Add.execute(&["Alice", "123"], &mut book, &ctx()),
            "Phone number must be 10 digits."
        );
        assert_eq!(
            Command::Change.execute(&["Alice"], &mut book, &ctx()),
            "Invalid input. Usage: change <name> <old_phone> <new_phone>"
        );
    }

    #[test]
    fn test_args_required_and_optional() {
        let values = ["Alice"];
        let args = Args::new(&values, "add <name> [phone]");
        assert_eq!(args.required(0), Ok("Alice"));
        assert_eq!(args.optional(1), None);
        assert_eq!(
            args.required(1),
            Err(CommandError::MissingArgument {
                usage: "add <name> [phone]"
            })
        );
    }

    #[test]
    fn test_context_window() {
        assert_eq!(ctx().upcoming_birthday_days, 7);
        assert_eq!(ctx().with_upcoming_birthday_days(3).upcoming_birthday_days, 3);
    }
}
