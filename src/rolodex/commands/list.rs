use crate::book::{AddressBook, EMPTY_BOOK_MESSAGE};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};

/// Every contact, in name order.
pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let listed = book.iter().map(|(_, record)| record.clone()).collect();
    let mut result = CmdResult::default().with_listed(listed);
    if book.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_BOOK_MESSAGE));
    }
    Ok(result)
}

/// A single contact by exact name.
pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .lookup(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))?;
    Ok(CmdResult::default().with_listed(vec![record.clone()]))
}
