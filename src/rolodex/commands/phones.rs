//! Phone operations on one contact. The phone to edit or remove is named by
//! value; translating a displayed position into a value is the caller's job.

use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};
use crate::model::Record;

fn contact<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.lookup_mut(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))
}

fn phone_not_found(name: &str, phone: &str) -> RolodexError {
    RolodexError::PhoneNotFound {
        name: name.to_string(),
        phone: phone.to_string(),
    }
}

pub fn add(book: &mut AddressBook, name: &str, phones: &[String]) -> Result<CmdResult> {
    let record = contact(book, name)?;
    let mut result = CmdResult::default();
    let mut added = 0;

    for phone in phones.iter().filter(|p| !p.is_empty()) {
        if record.has_phone(phone) {
            result.add_message(CmdMessage::warning(format!(
                "This phone number already exists for this contact: {}",
                phone
            )));
            continue;
        }
        record.add_phone(phone.as_str());
        added += 1;
    }

    if added > 0 {
        result.add_message(CmdMessage::success(format!(
            "{} phone number(s) added to {}",
            added, name
        )));
        result.affected.push(record.clone());
    } else {
        result.add_message(CmdMessage::info("No phone numbers added."));
    }
    Ok(result)
}

pub fn edit(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    if new.is_empty() {
        return Err(RolodexError::Api("Phone number cannot be empty".to_string()));
    }
    let record = contact(book, name)?;
    if !record.has_phone(old) {
        return Err(phone_not_found(name, old));
    }

    let mut result = CmdResult::default();
    if old == new {
        result.add_message(CmdMessage::info("Phone unchanged."));
        return Ok(result);
    }
    if record.has_phone(new) {
        result.add_message(CmdMessage::warning(
            "This phone number already exists for this contact.",
        ));
        return Ok(result);
    }

    record.edit_phone(old, new);
    result.affected.push(record.clone());
    result.add_message(CmdMessage::success("Phone edited successfully!"));
    Ok(result)
}

pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = contact(book, name)?;
    if !record.has_phone(phone) {
        return Err(phone_not_found(name, phone));
    }

    record.delete_phone(phone);
    let mut result = CmdResult::default().with_affected(vec![record.clone()]);
    result.add_message(CmdMessage::success("Phone number deleted."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(Record::with_phones("Alice", ["A", "B", "C"]));
        book
    }

    fn phones(book: &AddressBook) -> Vec<String> {
        book.lookup("Alice").unwrap().phones().to_vec()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn add_appends_new_phones() {
        let mut book = book();
        let result = add(&mut book, "Alice", &strings(&["D", "E"])).unwrap();
        assert_eq!(phones(&book), ["A", "B", "C", "D", "E"]);
        assert!(result.has_level(MessageLevel::Success));
    }

    #[test]
    fn add_skips_existing_phones() {
        let mut book = book();
        let result = add(&mut book, "Alice", &strings(&["B", "D", "D"])).unwrap();
        assert_eq!(phones(&book), ["A", "B", "C", "D"]);
        assert!(result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn add_nothing_new_is_info() {
        let mut book = book();
        let result = add(&mut book, "Alice", &strings(&["A", ""])).unwrap();
        assert!(result.affected.is_empty());
        assert!(result.has_level(MessageLevel::Info));
    }

    #[test]
    fn add_to_unknown_contact_fails() {
        let mut book = book();
        assert!(matches!(
            add(&mut book, "Nobody", &strings(&["1"])),
            Err(RolodexError::ContactNotFound(_))
        ));
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut book = book();
        edit(&mut book, "Alice", "B", "X").unwrap();
        assert_eq!(phones(&book), ["A", "X", "C"]);
    }

    #[test]
    fn edit_missing_phone_fails_and_changes_nothing() {
        let mut book = book();
        assert!(matches!(
            edit(&mut book, "Alice", "Z", "X"),
            Err(RolodexError::PhoneNotFound { .. })
        ));
        assert_eq!(phones(&book), ["A", "B", "C"]);
    }

    #[test]
    fn edit_to_existing_phone_is_refused() {
        let mut book = book();
        let result = edit(&mut book, "Alice", "B", "C").unwrap();
        assert!(result.has_level(MessageLevel::Warning));
        assert_eq!(phones(&book), ["A", "B", "C"]);
    }

    #[test]
    fn edit_to_empty_is_refused() {
        let mut book = book();
        assert!(edit(&mut book, "Alice", "B", "").is_err());
    }

    #[test]
    fn remove_deletes_phone() {
        let mut book = book();
        remove(&mut book, "Alice", "A").unwrap();
        assert_eq!(phones(&book), ["B", "C"]);
    }

    #[test]
    fn remove_missing_phone_fails() {
        let mut book = book();
        assert!(matches!(
            remove(&mut book, "Alice", "Z"),
            Err(RolodexError::PhoneNotFound { .. })
        ));
    }
}
