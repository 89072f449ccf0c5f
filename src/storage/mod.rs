pub mod json;
pub mod memory;

pub use json::JsonStorage;
pub use memory::MemStorage;

use crate::prelude::{AppError, Document};
use std::fs;
use std::path::Path;

/// Default data file, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = "adresar.json";

/// What a load found. Missing data is not an error; unreadable data is
/// reported separately so the caller can decide what to do with it.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Empty,
    Loaded(Document),
    Corrupt(String),
}

impl LoadOutcome {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, LoadOutcome::Corrupt(_))
    }
}

pub trait DirectoryStore {
    fn load(&self) -> Result<LoadOutcome, AppError>;

    fn save(&self, document: &Document) -> Result<(), AppError>;

    /// Where the data lives, for messages and logs.
    fn location(&self) -> &Path;
}

impl<T: DirectoryStore + ?Sized> DirectoryStore for Box<T> {
    fn load(&self) -> Result<LoadOutcome, AppError> {
        (**self).load()
    }

    fn save(&self, document: &Document) -> Result<(), AppError> {
        (**self).save(document)
    }

    fn location(&self) -> &Path {
        (**self).location()
    }
}

/// Parses raw file contents. Blank content counts as an empty directory.
pub fn parse_document(data: &str) -> LoadOutcome {
    // serde_json will give an error if data is empty
    if data.trim().is_empty() {
        return LoadOutcome::Empty;
    }

    match serde_json::from_str::<Document>(data) {
        Ok(document) => LoadOutcome::Loaded(document),
        Err(e) => LoadOutcome::Corrupt(e.to_string()),
    }
}

pub fn encode_document(document: &Document) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(document)?)
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
