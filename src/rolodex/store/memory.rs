use super::ContactStore;
use crate::book::{AddressBook, LoadReport};
use crate::codec;
use crate::error::{Result, RolodexError};
use std::cell::{Cell, RefCell};

/// In-memory store for testing.
///
/// Holds the encoded file text rather than an `AddressBook`, so loads and saves
/// go through the same codec as the file store. Uses `RefCell` because the
/// `ContactStore` trait takes `&self` and rolodex is single-threaded.
#[derive(Default)]
pub struct InMemoryStore {
    contents: RefCell<String>,
    saves: Cell<usize>,
    backup: RefCell<Option<String>>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(text: impl Into<String>) -> Self {
        let store = Self::new();
        *store.contents.borrow_mut() = text.into();
        store
    }

    pub fn contents(&self) -> String {
        self.contents.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// What the last [`ContactStore::backup`] copied, if it ran.
    pub fn backup_contents(&self) -> Option<String> {
        self.backup.borrow().clone()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl ContactStore for InMemoryStore {
    fn load(&self) -> Result<(AddressBook, LoadReport)> {
        let mut book = AddressBook::new();
        let report = codec::decode_into(&mut book, &self.contents.borrow());
        Ok((book, report))
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(RolodexError::persistence(
                self.location(),
                std::io::Error::other("Simulated write error"),
            ));
        }
        *self.contents.borrow_mut() = codec::encode(book);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn backup(&self) -> Result<String> {
        if self.simulate_write_error.get() {
            return Err(RolodexError::persistence(
                self.location(),
                std::io::Error::other("Simulated write error"),
            ));
        }
        *self.backup.borrow_mut() = Some(self.contents());
        Ok("<memory backup>".to_string())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
