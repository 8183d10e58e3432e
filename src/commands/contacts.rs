//! Contact commands: adding contacts and managing their phone numbers.

use super::{Args, CONTACT_NOT_FOUND};
use crate::book::AddressBook;
use crate::error::CommandResult;
use crate::models::Record;

const ADD_USAGE: &str = "add <name> [phone]";
const CHANGE_USAGE: &str = "change <name> <old_phone> <new_phone>";
const PHONE_USAGE: &str = "phone <name>";

/// `add <name> [phone]`
///
/// Creates the contact if needed and appends the phone when one is given.
/// The contact is created even if the phone is then rejected.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let args = Args::new(args, ADD_USAGE);
    let name = args.required(0)?;
    let phone = args.optional(1);

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name)?);
        "Contact added."
    };

    if let (Some(phone), Some(record)) = (phone, book.find_mut(name)) {
        record.add_phone(phone)?;
    }

    Ok(message.to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let args = Args::new(args, CHANGE_USAGE);
    let name = args.required(0)?;
    let old_phone = args.required(1)?;
    let new_phone = args.required(2)?;

    match book.find_mut(name) {
        Some(record) => {
            record.edit_phone(old_phone, new_phone)?;
            Ok("Phone number updated.".to_string())
        }
        None => Ok(CONTACT_NOT_FOUND.to_string()),
    }
}

/// `phone <name>`: the contact's numbers joined with `", "`.
pub fn show_phones(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = Args::new(args, PHONE_USAGE).required(0)?;

    Ok(book
        .find(name)
        .map(Record::phones_display)
        .unwrap_or_else(|| CONTACT_NOT_FOUND.to_string()))
}

/// `all`: one rendered line per contact, in insertion order.
pub fn show_all(book: &AddressBook) -> String {
    book.iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
