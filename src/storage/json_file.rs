use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::records::AddressBookDocument;
use super::StorageError;
use crate::model::AddressBook;

/// Reads and writes the address book as a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `Ok(None)` when the data file does not exist yet.
    pub fn read(&self) -> Result<Option<AddressBook>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "data file not found");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let document: AddressBookDocument = serde_json::from_str(&raw)?;
        let book = document.to_model()?;
        info!(
            path = %self.path.display(),
            persons = book.persons().len(),
            "address book loaded"
        );
        Ok(Some(book))
    }

    /// Writes to a sibling temp file and renames it over the data file, so a
    /// failed save leaves the previous file intact. The temp file is removed
    /// when any step after its creation fails.
    pub fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let document = AddressBookDocument::from_model(book);
        let payload = serde_json::to_vec_pretty(&document)?;

        let tmp_path = self.tmp_path();
        if let Err(err) = Self::replace_with(&tmp_path, &self.path, &payload) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %tmp_path.display(), error = %cleanup, "temp file left behind");
                }
            }
            return Err(err.into());
        }

        debug!(path = %self.path.display(), bytes = payload.len(), "address book saved");
        Ok(())
    }

    fn replace_with(tmp_path: &Path, path: &Path, payload: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(tmp_path)?;
        file.write_all(payload)?;
        file.sync_all()?;
        drop(file);
        fs::rename(tmp_path, path)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
