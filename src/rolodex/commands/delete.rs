use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.delete_record(name) {
        Some(record) => {
            result.add_message(CmdMessage::success(format!("Record deleted: {}", name)));
            result.affected.push(record);
        }
        None => {
            result.add_message(CmdMessage::warning(format!("'{}' record not found.", name)));
        }
    }
    Ok(result)
}
