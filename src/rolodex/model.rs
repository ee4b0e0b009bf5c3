/// A single contact: a name and its phone numbers, in the order they were added.
///
/// A `Record` knows nothing about the book that holds it. None of its operations
/// fail; a phone that is not present simply leaves the list untouched, and
/// duplicate suppression is left to the caller (see `commands::phones`).
///
/// The name is read-only from outside the crate: a record's name is its key in
/// the [`AddressBook`](crate::book::AddressBook), so renaming goes through
/// `AddressBook::rename_record`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub(crate) name: String,
    pub(crate) phones: Vec<String>,
}

impl Record {
    /// The caller guarantees `name` is not empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
        }
    }

    pub fn with_phones<I, P>(name: impl Into<String>, phones: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let mut record = Self::new(name);
        for phone in phones {
            record.add_phone(phone);
        }
        record
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    pub fn add_phone(&mut self, phone: impl Into<String>) {
        self.phones.push(phone.into());
    }

    /// Removes every entry equal to `phone`.
    pub fn delete_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p != phone);
    }

    /// Replaces the first entry equal to `old` in place. Returns whether one was found.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> bool {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = new.into();
                true
            }
            None => false,
        }
    }

    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p == phone)
    }
}
