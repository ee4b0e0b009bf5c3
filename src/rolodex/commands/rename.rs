use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};

pub fn run(book: &mut AddressBook, name: &str, new_name: &str) -> Result<CmdResult> {
    if !book.rename_record(name, new_name)? {
        return Err(RolodexError::ContactNotFound(name.to_string()));
    }

    let mut result = CmdResult::default();
    if let Some(record) = book.lookup(new_name) {
        result.affected.push(record.clone());
    }
    if name == new_name {
        result.add_message(CmdMessage::info("Name unchanged."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Name changed: {} -> {}",
            name, new_name
        )));
    }
    Ok(result)
}
