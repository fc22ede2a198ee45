use super::contact::Name;
use super::interview::Interview;
use super::person::Person;
use super::search::SearchQuery;
use super::task::Task;
use super::unique_list::UniqueList;

/// In-memory store of applicants, interviews and tasks.
///
/// Each collection keeps insertion order and never holds two entries with the
/// same identity. The whole book is the unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: UniqueList<Person>,
    interviews: UniqueList<Interview>,
    tasks: UniqueList<Task>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), AddressBookError> {
        self.persons.add(person)
    }

    /// Replaces `target` with `edited`, re-checking name uniqueness.
    ///
    /// A rename moves the applicant's interviews to the new name.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), AddressBookError> {
        let old_name = target.name().clone();
        let new_name = edited.name().clone();
        self.persons
            .replace(target, edited)
            .unwrap_or_else(|| Err(AddressBookError::PersonNotFound(old_name.clone())))?;

        if old_name != new_name {
            self.interviews.rewrite(|interview| {
                (interview.applicant() == &old_name)
                    .then(|| interview.with_applicant(new_name.clone()))
            });
        }
        Ok(())
    }

    /// Removes `target` together with the interviews booked for them.
    pub fn remove_person(&mut self, target: &Person) -> Result<(), AddressBookError> {
        if !self.persons.remove(target) {
            return Err(AddressBookError::PersonNotFound(target.name().clone()));
        }
        self.interviews
            .retain(|interview| interview.applicant() != target.name());
        Ok(())
    }

    pub fn person_named(&self, name: &Name) -> Option<&Person> {
        self.persons
            .as_slice()
            .iter()
            .find(|person| person.name() == name)
    }

    pub fn has_interview(&self, interview: &Interview) -> bool {
        self.interviews.contains(interview)
    }

    /// The applicant must already be in the book.
    pub fn add_interview(&mut self, interview: Interview) -> Result<(), AddressBookError> {
        if self.person_named(interview.applicant()).is_none() {
            return Err(AddressBookError::PersonNotFound(
                interview.applicant().clone(),
            ));
        }
        self.interviews.add(interview)
    }

    pub fn has_task(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), AddressBookError> {
        self.tasks.add(task)
    }

    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    pub fn interviews(&self) -> &[Interview] {
        self.interviews.as_slice()
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn find_persons<'a>(&'a self, query: &'a SearchQuery) -> impl Iterator<Item = &'a Person> {
        self.persons
            .as_slice()
            .iter()
            .filter(move |person| query.matches(person))
    }
}

/// Raised when a store operation would break a uniqueness or reference invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressBookError {
    #[error("applicant list already contains {0}")]
    DuplicatePerson(Name),
    #[error("interview list already contains {0}")]
    DuplicateInterview(String),
    #[error("task list already contains '{0}'")]
    DuplicateTask(String),
    #[error("{0} does not exist in the address book")]
    PersonNotFound(Name),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::application::Job;
    use crate::model::contact::{Address, Email, Phone};
    use chrono::NaiveDate;

    fn person(name: &str, phone: &str) -> Person {
        Person::new(
            Name::parse(name).expect("valid name"),
            Phone::parse(phone).expect("valid phone"),
            Email::parse("someone@example.com").expect("valid email"),
            Address::parse("Blk 30").expect("valid address"),
            Vec::new(),
        )
    }

    fn interview(applicant: &str, hour: u32) -> Interview {
        let scheduled_at = NaiveDate::from_ymd_opt(2025, 3, 1)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .expect("valid slot");
        Interview::new(
            Name::parse(applicant).expect("valid name"),
            Job::parse("SWE123").expect("valid job"),
            scheduled_at,
        )
    }

    #[test]
    fn add_person_rejects_same_name() {
        let mut book = AddressBook::new();
        book.add_person(person("Alex Yeoh", "87438807")).expect("first add");

        let updated_contact = person("Alex Yeoh", "99999999");
        assert!(book.has_person(&updated_contact));
        let err = book.add_person(updated_contact).unwrap_err();
        assert!(matches!(err, AddressBookError::DuplicatePerson(name) if name.as_str() == "Alex Yeoh"));
        assert_eq!(book.persons().len(), 1);
    }

    #[test]
    fn persons_keep_insertion_order() {
        let mut book = AddressBook::new();
        for name in ["Charlotte Oliveiro", "Alex Yeoh", "Bernice Yu"] {
            book.add_person(person(name, "123")).expect("add");
        }
        let names: Vec<&str> = book.persons().iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, ["Charlotte Oliveiro", "Alex Yeoh", "Bernice Yu"]);
    }

    #[test]
    fn set_person_replaces_and_rechecks_identity() {
        let mut book = AddressBook::new();
        let alex = person("Alex Yeoh", "87438807");
        let bernice = person("Bernice Yu", "99272758");
        book.add_person(alex.clone()).expect("add");
        book.add_person(bernice.clone()).expect("add");

        let new_phone = person("Alex Yeoh", "11111111");
        book.set_person(&alex, new_phone.clone()).expect("same identity edit");
        assert_eq!(book.persons()[0], new_phone);

        let err = book
            .set_person(&bernice, person("Alex Yeoh", "22222222"))
            .unwrap_err();
        assert!(matches!(err, AddressBookError::DuplicatePerson(_)));

        let err = book.set_person(&alex, person("Alex Yeoh", "33333333")).unwrap_err();
        assert!(matches!(err, AddressBookError::PersonNotFound(_)));
    }

    #[test]
    fn remove_person_requires_presence() {
        let mut book = AddressBook::new();
        let alex = person("Alex Yeoh", "87438807");
        book.add_person(alex.clone()).expect("add");
        book.remove_person(&alex).expect("remove");
        assert!(book.persons().is_empty());
        assert!(matches!(
            book.remove_person(&alex),
            Err(AddressBookError::PersonNotFound(_))
        ));
    }

    #[test]
    fn add_interview_requires_known_applicant() {
        let mut book = AddressBook::new();
        let err = book.add_interview(interview("Nobody Here", 10)).unwrap_err();
        assert!(matches!(err, AddressBookError::PersonNotFound(name) if name.as_str() == "Nobody Here"));
        assert!(book.interviews().is_empty());

        book.add_person(person("Alex Yeoh", "87438807")).expect("add");
        book.add_interview(interview("Alex Yeoh", 10)).expect("known applicant");
        assert_eq!(book.interviews().len(), 1);
    }

    #[test]
    fn remove_person_drops_their_interviews() {
        let mut book = AddressBook::new();
        let alex = person("Alex Yeoh", "87438807");
        book.add_person(alex.clone()).expect("add");
        book.add_person(person("Bernice Yu", "99272758")).expect("add");
        book.add_interview(interview("Alex Yeoh", 10)).expect("add");
        book.add_interview(interview("Bernice Yu", 11)).expect("add");

        book.remove_person(&alex).expect("remove");
        let applicants: Vec<&str> = book
            .interviews()
            .iter()
            .map(|interview| interview.applicant().as_str())
            .collect();
        assert_eq!(applicants, ["Bernice Yu"]);
    }

    #[test]
    fn renaming_a_person_moves_their_interviews() {
        let mut book = AddressBook::new();
        let alex = person("Alex Yeoh", "87438807");
        book.add_person(alex.clone()).expect("add");
        book.add_interview(interview("Alex Yeoh", 10)).expect("add");

        book.set_person(&alex, person("Alexander Yeoh", "87438807"))
            .expect("rename");
        assert_eq!(book.interviews()[0].applicant().as_str(), "Alexander Yeoh");
        assert_eq!(book.interviews()[0].job().as_str(), "SWE123");
    }

    #[test]
    fn failed_rename_leaves_interviews_alone() {
        let mut book = AddressBook::new();
        let alex = person("Alex Yeoh", "87438807");
        book.add_person(alex.clone()).expect("add");
        book.add_person(person("Bernice Yu", "99272758")).expect("add");
        book.add_interview(interview("Alex Yeoh", 10)).expect("add");

        assert!(book.set_person(&alex, person("Bernice Yu", "1234")).is_err());
        assert_eq!(book.interviews()[0].applicant().as_str(), "Alex Yeoh");
    }
}
