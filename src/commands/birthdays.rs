//! Birthday commands.

use super::{Args, CONTACT_NOT_FOUND};
use crate::book::AddressBook;
use crate::error::CommandResult;
use chrono::NaiveDate;

const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let args = Args::new(args, ADD_BIRTHDAY_USAGE);
    let name = args.required(0)?;
    let birthday = args.required(1)?;

    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(birthday)?;
            Ok("Birthday added.".to_string())
        }
        None => Ok(CONTACT_NOT_FOUND.to_string()),
    }
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = Args::new(args, SHOW_BIRTHDAY_USAGE).required(0)?;

    Ok(match book.find(name).and_then(|record| record.birthday()) {
        Some(birthday) => format!("{}'s birthday: {}", name, birthday),
        None => "Contact not found or birthday not set.".to_string(),
    })
}

/// `birthdays`: contacts whose birthday comes up within `days` of `today`.
pub fn show_upcoming_birthdays(book: &AddressBook, today: NaiveDate, days: u32) -> String {
    let lines: Vec<String> = book
        .upcoming_birthdays_within(today, days)
        .into_iter()
        .filter_map(|record| {
            record
                .birthday()
                .map(|birthday| format!("{} has birthday on {}", record.name(), birthday))
        })
        .collect();

    tracing::debug!(count = lines.len(), days, "Upcoming birthdays collected");

    if lines.is_empty() {
        format!("No upcoming birthdays in the next {} days.", days)
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add_contact;

    fn june_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn book_with(names: &[&str]) -> AddressBook {
        let mut book = AddressBook::new();
        for &name in names {
            add_contact(&[name], &mut book).unwrap();
        }
        book
    }

    #[test]
    fn test_add_birthday() {
        let mut book = book_with(&["Alice"]);
        assert_eq!(
            add_birthday(&["Alice", "15.06.1990"], &mut book).unwrap(),
            "Birthday added."
        );
        assert_eq!(
            show_birthday(&["Alice"], &book).unwrap(),
            "Alice's birthday: 15.06.1990"
        );
    }

    #[test]
    fn test_add_birthday_unknown_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_birthday(&["Ghost", "15.06.1990"], &mut book).unwrap(),
            "Contact not found."
        );
    }

    #[test]
    fn test_add_birthday_invalid_date() {
        let mut book = book_with(&["Alice"]);
        let err = add_birthday(&["Alice", "30.02.2024"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn test_add_birthday_missing_date() {
        let mut book = book_with(&["Alice"]);
        let err = add_birthday(&["Alice"], &mut book).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input. Usage: add-birthday <name> <DD.MM.YYYY>"
        );
    }

    #[test]
    fn test_show_birthday_absent() {
        let book = book_with(&["Alice"]);
        assert_eq!(
            show_birthday(&["Ghost"], &book).unwrap(),
            "Contact not found or birthday not set."
        );
        assert_eq!(
            show_birthday(&["Alice"], &book).unwrap(),
            "Contact not found or birthday not set."
        );
        assert!(show_birthday(&[], &book).is_err());
    }

    #[test]
    fn test_upcoming_birthdays_none() {
        let mut book = book_with(&["Alice", "Bob"]);
        add_birthday(&["Alice", "18.06.1990"], &mut book).unwrap();
        assert_eq!(
            show_upcoming_birthdays(&book, june_10(), 7),
            "No upcoming birthdays in the next 7 days."
        );
    }

    #[test]
    fn test_upcoming_birthdays_lines() {
        let mut book = book_with(&["Alice", "Bob", "Carol"]);
        add_birthday(&["Alice", "15.06.1990"], &mut book).unwrap();
        add_birthday(&["Bob", "01.06.1990"], &mut book).unwrap();
        add_birthday(&["Carol", "10.06.2001"], &mut book).unwrap();

        assert_eq!(
            show_upcoming_birthdays(&book, june_10(), 7),
            "Alice has birthday on 15.06.1990\nCarol has birthday on 10.06.2001"
        );
    }

    #[test]
    fn test_upcoming_birthdays_custom_window_message() {
        let book = AddressBook::new();
        assert_eq!(
            show_upcoming_birthdays(&book, june_10(), 30),
            "No upcoming birthdays in the next 30 days."
        );
    }
}
