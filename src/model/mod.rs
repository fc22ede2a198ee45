//! Applicant tracking domain: validated fields, the `Person` aggregate, and
//! the `AddressBook` store that keeps every collection free of duplicates.

pub mod address_book;
pub mod application;
pub mod contact;
pub mod interview;
pub mod person;
pub mod sample;
pub mod search;
pub mod task;
pub mod unique_list;
pub mod validation;

pub use address_book::{AddressBook, AddressBookError};
pub use application::{Application, Job, Stage};
pub use contact::{Address, Email, Name, Phone};
pub use interview::Interview;
pub use person::Person;
pub use sample::sample_address_book;
pub use search::SearchQuery;
pub use task::{Description, Task};
pub use unique_list::{Identity, UniqueList};
pub use validation::{require_present, ValidationError};
