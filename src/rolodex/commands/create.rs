use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Creates a contact with optional initial phones. Empty phone values are
/// ignored and repeated ones are added once.
pub fn run(book: &mut AddressBook, name: &str, phones: &[String]) -> Result<CmdResult> {
    let record = book.create_contact(name)?;
    let mut result = CmdResult::default();

    for phone in phones.iter().filter(|p| !p.is_empty()) {
        if record.has_phone(phone) {
            result.add_message(CmdMessage::warning(format!(
                "Phone {} listed twice, added once",
                phone
            )));
            continue;
        }
        record.add_phone(phone.as_str());
    }

    tracing::debug!(name, phones = record.phones().len(), "created contact");
    result.affected.push(record.clone());
    result.add_message(CmdMessage::success(format!("Record added: {}", name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::RolodexError;

    fn phones(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn creates_contact_with_phones() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "Alice", &phones(&["555-1111"])).unwrap();

        assert_eq!(book.lookup("Alice").unwrap().phones(), ["555-1111"]);
        assert_eq!(result.affected.len(), 1);
        assert!(result.has_level(MessageLevel::Success));
    }

    #[test]
    fn creates_contact_without_phones() {
        let mut book = AddressBook::new();
        run(&mut book, "Bob", &[]).unwrap();
        assert!(book.lookup("Bob").unwrap().phones().is_empty());
    }

    #[test]
    fn skips_empty_and_repeated_phones() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "Alice", &phones(&["1", "", "1", "2"])).unwrap();

        assert_eq!(book.lookup("Alice").unwrap().phones(), ["1", "2"]);
        assert!(result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn duplicate_name_is_rejected_and_original_kept() {
        let mut book = AddressBook::new();
        run(&mut book, "Alice", &phones(&["1"])).unwrap();

        let err = run(&mut book, "Alice", &phones(&["2"])).unwrap_err();
        assert!(matches!(err, RolodexError::DuplicateName(_)));
        assert_eq!(book.lookup("Alice").unwrap().phones(), ["1"]);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut book = AddressBook::new();
        assert!(matches!(
            run(&mut book, "", &[]),
            Err(RolodexError::EmptyName)
        ));
    }
}
