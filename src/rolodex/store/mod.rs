//! # Storage Layer
//!
//! The [`ContactStore`] trait is where an address book comes from at the start
//! of a session and where it goes at the end. The book is read once and written
//! once per session, and every edit in between happens on the in-memory
//! [`AddressBook`].
//!
//! A load can skip content it cannot read (malformed rows, a missing header).
//! The session then calls [`ContactStore::backup`] before anything is written,
//! so the final save never destroys the only copy of those rows.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single contacts file on disk. A missing file is created
//!   empty on load; saves replace the file atomically.
//! - [`memory::InMemoryStore`]: keeps the encoded file text in memory, so the
//!   whole encode/decode path runs in tests without touching the filesystem. It
//!   can also simulate failing writes.

use crate::book::{AddressBook, LoadReport};
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait ContactStore {
    /// Read the persisted book.
    fn load(&self) -> Result<(AddressBook, LoadReport)>;

    /// Replace the persisted book with `book`.
    fn save(&self, book: &AddressBook) -> Result<()>;

    /// Copy the persisted content, as it is now, somewhere the next save will
    /// not touch. Returns where the copy went.
    fn backup(&self) -> Result<String>;

    /// Where the book lives, for messages.
    fn location(&self) -> String;
}

impl<T: ContactStore + ?Sized> ContactStore for &T {
    fn load(&self) -> Result<(AddressBook, LoadReport)> {
        (**self).load()
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        (**self).save(book)
    }

    fn backup(&self) -> Result<String> {
        (**self).backup()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
