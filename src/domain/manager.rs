use super::*;

use tracing::{info, warn};

use crate::storage::{DirectoryStore, LoadOutcome};

/// Asks the user before an overwrite or a delete goes ahead.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool, AppError>;
}

/// Gives the same answer every time. Backs `--yes` and the tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _prompt: &str) -> Result<bool, AppError> {
        Ok(self.0)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Replaced,
    /// Name already taken and the overwrite was declined.
    Kept,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Lookup {
    Empty,
    Found(Contact),
    NotFound,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Empty,
    NotFound,
    Cancelled,
    Removed(Contact),
}

pub fn overwrite_prompt(name: &str) -> String {
    format!("A contact named '{name}' already exists. Overwrite it?")
}

pub fn delete_prompt(name: &str) -> String {
    format!("Are you sure you want to delete contact '{name}'?")
}

/// Runs each operation as a fresh load, then a change, then a full save.
/// Nothing is cached between calls.
pub struct DirectoryManager<S = Box<dyn DirectoryStore>> {
    storage: S,
}

impl<S: DirectoryStore> DirectoryManager<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Missing data means an empty document; corrupt data stops the operation.
    fn load_document(&self) -> Result<Document, AppError> {
        match self.storage.load()? {
            LoadOutcome::Empty => Ok(Document::default()),
            LoadOutcome::Loaded(document) => Ok(document),
            LoadOutcome::Corrupt(reason) => {
                let path = self.storage.location().to_path_buf();
                warn!(path = %path.display(), %reason, "directory file is corrupt");
                Err(AppError::CorruptStore { path, reason })
            }
        }
    }

    pub fn add_contact(
        &self,
        name: &str,
        contact: Contact,
        confirm: &mut dyn Confirm,
    ) -> Result<AddOutcome, AppError> {
        let name = normalize_name(name);

        validate_name(name)?;
        contact.validate()?;

        let mut document = self.load_document()?;
        let directory = document.directory_mut();

        let exists = directory.contains(name);
        if exists && !confirm.confirm(&overwrite_prompt(name))? {
            return Ok(AddOutcome::Kept);
        }

        directory.upsert(name, contact);
        self.storage.save(&document)?;

        if exists {
            info!(name, "contact replaced");
            Ok(AddOutcome::Replaced)
        } else {
            info!(name, "contact added");
            Ok(AddOutcome::Added)
        }
    }

    /// All contacts in insertion order. An empty result means an empty directory.
    pub fn list_contacts(&self) -> Result<Directory, AppError> {
        let document = self.load_document()?;
        Ok(document.contacts.unwrap_or_default())
    }

    pub fn find_contact(&self, name: &str) -> Result<Lookup, AppError> {
        let name = normalize_name(name);
        let document = self.load_document()?;

        let Some(directory) = document.directory() else {
            return Ok(Lookup::Empty);
        };

        Ok(match directory.get(name) {
            Some(contact) => Lookup::Found(contact.clone()),
            None => Lookup::NotFound,
        })
    }

    pub fn remove_contact(
        &self,
        name: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<RemoveOutcome, AppError> {
        let name = normalize_name(name);
        let mut document = self.load_document()?;

        if document.directory().is_none() {
            return Ok(RemoveOutcome::Empty);
        }

        let directory = document.directory_mut();
        if !directory.contains(name) {
            return Ok(RemoveOutcome::NotFound);
        }

        if !confirm.confirm(&delete_prompt(name))? {
            return Ok(RemoveOutcome::Cancelled);
        }

        let Some(removed) = directory.remove(name) else {
            return Ok(RemoveOutcome::NotFound);
        };
        self.storage.save(&document)?;

        info!(name, "contact deleted");
        Ok(RemoveOutcome::Removed(removed))
    }
}
