use super::*;

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::debug;

pub struct JsonStorage {
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling file the new contents are staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for JsonStorage {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}

impl DirectoryStore for JsonStorage {
    fn load(&self) -> Result<LoadOutcome, AppError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no directory file yet");
                return Ok(LoadOutcome::Empty);
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                // not UTF-8
                return Ok(LoadOutcome::Corrupt(e.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let outcome = parse_document(&data);
        if let LoadOutcome::Loaded(document) = &outcome {
            debug!(
                path = %self.path.display(),
                contacts = document.contact_count(),
                "loaded directory"
            );
        }
        Ok(outcome)
    }

    fn save(&self, document: &Document) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let data = encode_document(document)?;
        let staging = self.staging_path();

        // Write the whole document next to the target, then swap it in,
        // so a crash mid-write leaves the previous file intact
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&staging)?;
        file.write_all(data.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&staging, &self.path)?;

        debug!(
            path = %self.path.display(),
            contacts = document.contact_count(),
            "saved directory"
        );
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
