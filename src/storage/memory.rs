use super::*;

use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// Keeps the encoded document in memory instead of on disk.
///
/// Loads and saves go through the same encoding as [`JsonStorage`], so a
/// corrupt payload behaves exactly like a corrupt file.
pub struct MemStorage {
    data: RefCell<Option<String>>,
    saves: Cell<usize>,
    location: PathBuf,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(None),
            saves: Cell::new(0),
            location: PathBuf::from(":memory:"),
        }
    }

    /// Starts from raw text, as if a file with this content already existed.
    pub fn with_raw(data: impl Into<String>) -> Self {
        let storage = Self::new();
        *storage.data.borrow_mut() = Some(data.into());
        storage
    }

    pub fn raw(&self) -> Option<String> {
        self.data.borrow().clone()
    }

    /// How many times `save` has run.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryStore for MemStorage {
    fn load(&self) -> Result<LoadOutcome, AppError> {
        Ok(match self.data.borrow().as_deref() {
            Some(data) => parse_document(data),
            None => LoadOutcome::Empty,
        })
    }

    fn save(&self, document: &Document) -> Result<(), AppError> {
        *self.data.borrow_mut() = Some(encode_document(document)?);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::Contact;

    #[test]
    fn starts_empty() -> Result<(), AppError> {
        let storage = MemStorage::new();
        assert_eq!(storage.load()?, LoadOutcome::Empty);
        assert_eq!(storage.save_count(), 0);
        Ok(())
    }

    #[test]
    fn round_trips_through_encoding() -> Result<(), AppError> {
        let storage = MemStorage::new();
        let mut document = Document::default();
        document
            .directory_mut()
            .upsert("Bo", Contact::new("555", "bo@x.com", "Addr"));

        storage.save(&document)?;

        assert_eq!(storage.load()?, LoadOutcome::Loaded(document));
        assert_eq!(storage.save_count(), 1);
        assert!(storage.raw().is_some_and(|raw| raw.contains("\"Telefon\"")));
        Ok(())
    }

    #[test]
    fn raw_garbage_is_corrupt() -> Result<(), AppError> {
        let storage = MemStorage::with_raw("garbage");
        assert!(storage.load()?.is_corrupt());
        Ok(())
    }
}
