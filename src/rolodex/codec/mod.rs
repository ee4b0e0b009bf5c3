//! # Contacts File Format
//!
//! The address book is persisted as a delimiter-separated text file with a
//! header row and one row per contact:
//!
//! ```text
//! Name;Phone
//! Alice;['555-1111', '555-2222']
//! Bob;[]
//! "Smith; John";['555-0100']
//! ```
//!
//! The `Phone` column holds the whole ordered phone list of the contact as a
//! single field (see [`phone_list`]); rows and fields follow [`row`].
//!
//! Decoding is row-tolerant: a row that cannot be parsed is recorded in the
//! [`LoadReport`] and skipped, and the rest of the file still loads. A file with
//! no rows, or whose first row is not a `Name`/`Phone` header, decodes to an
//! empty book.

use crate::book::AddressBook;
use crate::model::Record;
use thiserror::Error;

pub mod phone_list;
pub mod row;

pub const NAME_COLUMN: &str = "Name";
pub const PHONE_COLUMN: &str = "Phone";

/// A data row that was skipped while loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct MalformedRow {
    pub line: usize,
    pub reason: String,
}

/// What happened while loading a contacts file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows turned into records, including rows that replaced an earlier row
    /// with the same name.
    pub loaded: usize,
    /// Rows that replaced an earlier row with the same name.
    pub overwritten: usize,
    pub skipped: Vec<MalformedRow>,
    /// The file had content but no `Name`/`Phone` header row.
    pub missing_header: bool,
}

impl LoadReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Every row of the file made it into the book unchanged, so saving the
    /// book loses nothing that was on disk.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && !self.missing_header && self.overwritten == 0
    }
}

pub fn encode(book: &AddressBook) -> String {
    let mut out = String::new();
    row::write_row(&mut out, &[NAME_COLUMN, PHONE_COLUMN]);
    for (name, record) in book.iter() {
        let phones = phone_list::encode(record.phones());
        row::write_row(&mut out, &[name, phones.as_str()]);
    }
    out
}

/// Decodes `text` and adds every well-formed row to `book` with
/// [`AddressBook::add_record`].
pub fn decode_into(book: &mut AddressBook, text: &str) -> LoadReport {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut report = LoadReport::default();
    let mut rows = row::rows(text);

    let header = match rows.next() {
        None => return report,
        Some(Ok(header)) => header,
        Some(Err(e)) => {
            tracing::warn!(line = e.line, "unreadable header row: {}", e);
            report.missing_header = true;
            return report;
        }
    };
    let column = |wanted: &str| header.fields.iter().position(|f| f == wanted);
    let (Some(name_idx), Some(phone_idx)) = (column(NAME_COLUMN), column(PHONE_COLUMN)) else {
        tracing::warn!(
            "contacts file has no {};{} header, ignoring its content",
            NAME_COLUMN,
            PHONE_COLUMN
        );
        report.missing_header = true;
        return report;
    };
    let width = header.fields.len();

    for parsed in rows {
        let result = parsed
            .map_err(|e| MalformedRow {
                line: e.line,
                reason: e.message,
            })
            .and_then(|row| record_from_row(&row, width, name_idx, phone_idx));

        match result {
            Ok(record) => {
                let name = record.name().to_string();
                if book.add_record(record).is_some() {
                    tracing::warn!(%name, "duplicate contact in file, keeping the later row");
                    report.overwritten += 1;
                }
                report.loaded += 1;
            }
            Err(malformed) => {
                tracing::warn!("skipping malformed row: {}", malformed);
                report.skipped.push(malformed);
            }
        }
    }
    report
}

fn record_from_row(
    row: &row::Row,
    width: usize,
    name_idx: usize,
    phone_idx: usize,
) -> Result<Record, MalformedRow> {
    let malformed = |reason: String| MalformedRow {
        line: row.line,
        reason,
    };

    if row.fields.len() != width {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            width,
            row.fields.len()
        )));
    }
    let name = &row.fields[name_idx];
    if name.is_empty() {
        return Err(malformed("empty name".to_string()));
    }
    let phones = phone_list::decode(&row.fields[phone_idx])
        .map_err(|e| malformed(format!("invalid phone list: {}", e)))?;

    Ok(Record::with_phones(name.as_str(), phones))
}
