use super::ContactStore;
use crate::book::{self, AddressBook, LoadReport};
use crate::error::{Result, RolodexError};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<file>.bak`, next to the contacts file.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "contacts".into());
        name.push(".bak");
        self.path.with_file_name(name)
    }

    fn ensure_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| RolodexError::persistence(dir, e))?;
        }
        fs::File::create(&self.path).map_err(|e| RolodexError::persistence(&self.path, e))?;
        tracing::info!(path = %self.path.display(), "created empty contacts file");
        Ok(())
    }
}

impl ContactStore for FileStore {
    fn load(&self) -> Result<(AddressBook, LoadReport)> {
        self.ensure_file()?;
        let mut book = AddressBook::new();
        let report = book.load(&self.path)?;
        Ok((book, report))
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        book.save(&self.path)
    }

    fn backup(&self) -> Result<String> {
        let original = fs::read(&self.path).map_err(|e| RolodexError::persistence(&self.path, e))?;
        let target = self.backup_path();
        book::write_atomic(&target, &original)?;
        tracing::info!(path = %target.display(), "backed up contacts file");
        Ok(target.display().to_string())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
