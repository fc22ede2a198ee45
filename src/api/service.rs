use std::sync::Mutex;

use tracing::{info, warn};

use crate::error::AppError;
use crate::model::{AddressBook, SearchQuery};
use crate::storage::{InterviewRecord, JsonAddressBookStorage, PersonRecord, TaskRecord};

/// Shares one address book between request handlers.
///
/// Every mutation holds the lock across the duplicate check, the insert and
/// the save, so concurrent adds cannot both pass the check.
pub struct AddressBookService {
    book: Mutex<AddressBook>,
    storage: Option<JsonAddressBookStorage>,
}

impl AddressBookService {
    pub fn new(book: AddressBook, storage: Option<JsonAddressBookStorage>) -> Self {
        Self {
            book: Mutex::new(book),
            storage,
        }
    }

    /// Persons matching the query, or everyone when there is no query.
    pub fn search(&self, query: Option<&SearchQuery>) -> Vec<PersonRecord> {
        let book = self.book.lock().expect("address book mutex poisoned");
        match query {
            Some(query) => book.find_persons(query).map(PersonRecord::from).collect(),
            None => book.persons().iter().map(PersonRecord::from).collect(),
        }
    }

    pub fn interviews(&self) -> Vec<InterviewRecord> {
        let book = self.book.lock().expect("address book mutex poisoned");
        book.interviews().iter().map(InterviewRecord::from).collect()
    }

    pub fn tasks(&self) -> Vec<TaskRecord> {
        let book = self.book.lock().expect("address book mutex poisoned");
        book.tasks().iter().map(TaskRecord::from).collect()
    }

    /// Validates and stores a new applicant, then persists the book.
    ///
    /// If the save fails the applicant is taken out again so the store and
    /// the data file do not diverge.
    pub fn add_person(&self, record: &PersonRecord) -> Result<PersonRecord, AppError> {
        let person = record.to_model()?;
        let mut book = self.book.lock().expect("address book mutex poisoned");
        book.add_person(person.clone())?;

        if let Some(storage) = &self.storage {
            if let Err(err) = storage.save(&book) {
                warn!(error = %err, name = %person.name(), "save failed, rolling back add");
                book.remove_person(&person)?;
                return Err(err.into());
            }
        }

        info!(name = %person.name(), total = book.persons().len(), "applicant added");
        Ok(PersonRecord::from(&person))
    }

    pub fn snapshot(&self) -> AddressBook {
        self.book.lock().expect("address book mutex poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_address_book, AddressBookError};
    use std::sync::Arc;
    use std::thread;

    fn record(name: &str) -> PersonRecord {
        PersonRecord {
            name: Some(name.to_string()),
            phone: Some("92492021".to_string()),
            email: Some("irfan@example.com".to_string()),
            address: Some("Blk 47 Tampines Street 20".to_string()),
            applications: Vec::new(),
        }
    }

    #[test]
    fn search_without_query_lists_everyone() {
        let service = AddressBookService::new(sample_address_book(), None);
        assert_eq!(service.search(None).len(), 4);

        let query = SearchQuery::parse("jobid:SWE123").expect("keywords");
        let names: Vec<String> = service
            .search(Some(&query))
            .into_iter()
            .filter_map(|person| person.name)
            .collect();
        assert_eq!(names, ["Alex Yeoh", "Bernice Yu"]);
    }

    #[test]
    fn add_person_rejects_duplicates() {
        let service = AddressBookService::new(sample_address_book(), None);
        service.add_person(&record("Irfan Ibrahim")).expect("added");
        match service.add_person(&record("Irfan Ibrahim")) {
            Err(AppError::Store(AddressBookError::DuplicatePerson(_))) => {}
            other => panic!("expected duplicate error, got {other:?}"),
        }
        assert_eq!(service.snapshot().persons().len(), 5);
    }

    #[test]
    fn concurrent_adds_of_same_person_insert_once() {
        let service = Arc::new(AddressBookService::new(AddressBook::new(), None));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                thread::spawn(move || service.add_person(&record("Roy Balakrishnan")).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|handle| handle.join().expect("thread finished"))
            .filter(|added| *added)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(service.snapshot().persons().len(), 1);
    }

    #[test]
    fn invalid_record_is_a_validation_error() {
        let service = AddressBookService::new(AddressBook::new(), None);
        let mut invalid = record("Roy Balakrishnan");
        invalid.phone = Some("12".to_string());
        assert!(matches!(
            service.add_person(&invalid),
            Err(AppError::Validation(_))
        ));
    }
}
