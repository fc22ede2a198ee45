//! Persistence of the address book: the JSON document adapter, the file
//! storage that reads and writes it, and a CSV export of applicants.

pub mod csv_export;
pub mod json_file;
pub mod records;

pub use csv_export::export_persons_csv;
pub use json_file::JsonAddressBookStorage;
pub use records::{
    AddressBookDocument, ApplicationRecord, InterviewRecord, PersonRecord, TaskRecord,
};

use crate::model::{AddressBookError, Name, ValidationError};

/// Error raised while loading, saving or exporting the address book.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed address book document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Duplicate(#[from] AddressBookError),
    #[error("interview refers to {0}, who does not exist in the address book")]
    NonexistentPerson(Name),
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}
