//! # API Facade
//!
//! [`RolodexApi`] is a session: it loads the address book from a
//! [`ContactStore`] when opened, owns it while the user works, and writes it
//! back exactly once when closed. Every UI (the CLI one-shot commands, the
//! interactive menu, tests) goes through it.
//!
//! ## Role and Responsibilities
//!
//! - **Owns** the in-memory [`AddressBook`]; callers only borrow it.
//! - **Dispatches** to the command functions in [`crate::commands`].
//! - **Guarantees the final save**: [`RolodexApi::close`] saves and reports the
//!   result; if a session is dropped without being closed (an early return, a
//!   panic unwinding through the UI) the drop handler saves instead and logs any
//!   failure.
//! - **Keeps what it could not read**: when the load skipped anything
//!   (malformed rows, duplicate rows, a missing header), [`RolodexApi::open`]
//!   has the store back up the file before the session can overwrite it. If
//!   the backup fails the session does not open.
//!
//! ## What the API Does NOT Do
//!
//! - No printing, prompting or index parsing.
//! - No saving in the middle of a session.
//!
//! ## Generic Over ContactStore
//!
//! - Production: `RolodexApi<FileStore>`
//! - Testing: `RolodexApi<InMemoryStore>`

use crate::book::{AddressBook, LoadReport};
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::ContactStore;

pub struct RolodexApi<S: ContactStore> {
    store: S,
    book: AddressBook,
    load_report: LoadReport,
    backup: Option<String>,
    closed: bool,
}

impl<S: ContactStore> RolodexApi<S> {
    pub fn open(store: S) -> Result<Self> {
        let (book, load_report) = store.load()?;
        tracing::debug!(
            location = %store.location(),
            records = book.len(),
            "opened address book"
        );
        let backup = if load_report.is_clean() {
            None
        } else {
            Some(store.backup()?)
        };
        Ok(Self {
            store,
            book,
            load_report,
            backup,
            closed: false,
        })
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    /// Where the unreadable original was copied, if the load was not clean.
    pub fn backup_location(&self) -> Option<&str> {
        self.backup.as_deref()
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_contact(&mut self, name: &str, phones: &[String]) -> Result<CmdResult> {
        commands::create::run(&mut self.book, name, phones)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn rename_contact(&mut self, name: &str, new_name: &str) -> Result<CmdResult> {
        commands::rename::run(&mut self.book, name, new_name)
    }

    pub fn add_phones(&mut self, name: &str, phones: &[String]) -> Result<CmdResult> {
        commands::phones::add(&mut self.book, name, phones)
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        commands::phones::edit(&mut self.book, name, old, new)
    }

    pub fn delete_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::phones::remove(&mut self.book, name, phone)
    }

    pub fn get_contact(&self, name: &str) -> Option<&Record> {
        self.book.lookup(name)
    }

    pub fn show_contact(&self, name: &str) -> Result<CmdResult> {
        commands::list::show(&self.book, name)
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn render_all(&self) -> String {
        self.book.render_all()
    }

    /// Ends the session, writing the book back to the store.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.store.save(&self.book)
    }
}

impl<S: ContactStore> Drop for RolodexApi<S> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.store.save(&self.book) {
            tracing::error!(location = %self.store.location(), "final save failed: {}", e);
        }
    }
}
