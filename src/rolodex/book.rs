//! # Address Book
//!
//! [`AddressBook`] maps a contact name to exactly one [`Record`]. It is the only
//! owner of its records; callers get short-lived references through
//! [`AddressBook::lookup`], [`AddressBook::lookup_mut`] and [`AddressBook::iter`].
//!
//! ## Insertion policies
//!
//! - [`AddressBook::add_record`] is permissive: a record under an existing name
//!   replaces the old one (last write wins). Loading uses it for every row.
//! - [`AddressBook::create_contact`] is checked: it rejects an empty or already
//!   used name. This is what user-facing commands go through.
//!
//! ## Ordering
//!
//! Records are kept sorted by name, so enumeration is stable between mutations
//! and saving the same book twice produces identical files.
//!
//! ## Persistence
//!
//! [`AddressBook::save`] rewrites the whole file through a temporary sibling that
//! is renamed over the target; [`AddressBook::load`] merges a file into the book
//! and reports skipped rows instead of failing. See [`crate::codec`] for the
//! format.

use crate::codec;
use crate::error::{Result, RolodexError};
use crate::model::Record;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use uuid::Uuid;

pub use crate::codec::{LoadReport, MalformedRow};

pub const EMPTY_BOOK_MESSAGE: &str = "No records found in the address book.";
const RECORD_SEPARATOR: &str = "#------------------------------";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Inserts `record` under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name.clone(), record)
    }

    /// Creates an empty record under `name`, refusing empty or taken names.
    pub fn create_contact(&mut self, name: &str) -> Result<&mut Record> {
        if name.is_empty() {
            return Err(RolodexError::EmptyName);
        }
        match self.records.entry(name.to_string()) {
            btree_map::Entry::Occupied(_) => Err(RolodexError::DuplicateName(name.to_string())),
            btree_map::Entry::Vacant(slot) => Ok(slot.insert(Record::new(name))),
        }
    }

    pub fn delete_record(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    /// Moves the record under `name` to `new_name`.
    ///
    /// Returns `Ok(false)` when there is no record called `name`. Renaming onto
    /// another contact's name is refused rather than overwriting it.
    pub fn rename_record(&mut self, name: &str, new_name: &str) -> Result<bool> {
        if new_name.is_empty() {
            return Err(RolodexError::EmptyName);
        }
        if !self.records.contains_key(name) {
            return Ok(false);
        }
        if name == new_name {
            return Ok(true);
        }
        if self.records.contains_key(new_name) {
            return Err(RolodexError::DuplicateName(new_name.to_string()));
        }

        if let Some(mut record) = self.records.remove(name) {
            record.name = new_name.to_string();
            self.add_record(record);
        }
        Ok(true)
    }

    pub fn lookup(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access to one record's phones. The name cannot be changed through
    /// this handle; use [`AddressBook::rename_record`].
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.iter(),
        }
    }

    pub fn render_all(&self) -> String {
        render_records(self.records.values())
    }

    /// Writes the whole book to `path`, replacing the file atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_atomic(path, codec::encode(self).as_bytes())?;
        tracing::debug!(path = %path.display(), records = self.len(), "saved contacts");
        Ok(())
    }

    /// Adds every readable row of the file at `path` to this book.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        let text = fs::read_to_string(path).map_err(|e| RolodexError::persistence(path, e))?;
        let report = codec::decode_into(self, &text);
        tracing::debug!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped_count(),
            "loaded contacts"
        );
        Ok(report)
    }
}

/// Replaces `path` with `content` through a uniquely named temporary sibling,
/// so readers see either the old file or the new one.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| RolodexError::persistence(dir, e))?;
        }
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "contacts".to_string());
    let tmp = path.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

    fs::write(&tmp, content).map_err(|e| RolodexError::persistence(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(RolodexError::persistence(path, e));
    }
    Ok(())
}

/// Iterator over `(name, record)` pairs in name order.
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, record)| (name.as_str(), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Plain-text listing of records: each name followed by its phones, numbered
/// from 1.
pub fn render_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut out = String::new();
    for record in records {
        let phones = record
            .phones()
            .iter()
            .enumerate()
            .map(|(i, phone)| format!("[{}] {}", i + 1, phone))
            .collect::<Vec<_>>()
            .join("; ");
        out.push_str(RECORD_SEPARATOR);
        out.push('\n');
        out.push_str(&format!("Name:   {}\n", record.name()));
        out.push_str(&format!("Phones: {}\n", phones));
    }
    if out.is_empty() {
        out.push_str(EMPTY_BOOK_MESSAGE);
        out.push('\n');
    }
    out
}
