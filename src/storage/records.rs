//! Serde shapes of the persisted address book and their conversion to and
//! from the domain model.
//!
//! Record fields are optional so a missing value is reported with the entity
//! and field it belongs to instead of a bare serde message. The three
//! top-level arrays are required.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::StorageError;
use crate::model::{
    require_present, Address, AddressBook, AddressBookError, Application, Description, Email,
    Interview, Job, Name, Person, Phone, Stage, Task, ValidationError,
};

pub(crate) const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Root of the JSON data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressBookDocument {
    pub persons: Vec<PersonRecord>,
    pub interviews: Vec<InterviewRecord>,
    pub tasks: Vec<TaskRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub applications: Vec<ApplicationRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub done: bool,
}

impl AddressBookDocument {
    /// Snapshot of the book in iteration order.
    pub fn from_model(book: &AddressBook) -> Self {
        Self {
            persons: book.persons().iter().map(PersonRecord::from).collect(),
            interviews: book.interviews().iter().map(InterviewRecord::from).collect(),
            tasks: book.tasks().iter().map(TaskRecord::from).collect(),
        }
    }

    /// Builds the address book, failing on the first invalid, duplicate or
    /// dangling record. Nothing is returned on failure.
    pub fn to_model(&self) -> Result<AddressBook, StorageError> {
        let mut book = AddressBook::new();

        for record in &self.persons {
            let person = record.to_model()?;
            if book.has_person(&person) {
                warn!(name = %person.name(), "rejecting duplicate applicant");
                return Err(AddressBookError::DuplicatePerson(person.name().clone()).into());
            }
            book.add_person(person)?;
        }

        for record in &self.interviews {
            let interview = record.to_model()?;
            if book.person_named(interview.applicant()).is_none() {
                return Err(StorageError::NonexistentPerson(interview.applicant().clone()));
            }
            if book.has_interview(&interview) {
                warn!(%interview, "rejecting duplicate interview");
                return Err(AddressBookError::DuplicateInterview(interview.to_string()).into());
            }
            book.add_interview(interview)?;
        }

        for record in &self.tasks {
            let task = record.to_model()?;
            if book.has_task(&task) {
                warn!(description = %task.description(), "rejecting duplicate task");
                return Err(AddressBookError::DuplicateTask(task.description().to_string()).into());
            }
            book.add_task(task)?;
        }

        debug!(
            persons = book.persons().len(),
            interviews = book.interviews().len(),
            tasks = book.tasks().len(),
            "address book document converted"
        );
        Ok(book)
    }
}

impl PersonRecord {
    const ENTITY: &'static str = "Person";

    pub fn to_model(&self) -> Result<Person, ValidationError> {
        let name = require_present(self.name.as_deref(), Self::ENTITY, "name")?;
        let phone = require_present(self.phone.as_deref(), Self::ENTITY, "phone")?;
        let email = require_present(self.email.as_deref(), Self::ENTITY, "email")?;
        let address = require_present(self.address.as_deref(), Self::ENTITY, "address")?;
        let applications = self
            .applications
            .iter()
            .map(ApplicationRecord::to_model)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Person::new(
            Name::parse(name)?,
            Phone::parse(phone)?,
            Email::parse(email)?,
            Address::parse(address)?,
            applications,
        ))
    }
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        Self {
            name: Some(person.name().to_string()),
            phone: Some(person.phone().to_string()),
            email: Some(person.email().to_string()),
            address: Some(person.address().to_string()),
            applications: person
                .applications()
                .iter()
                .map(ApplicationRecord::from)
                .collect(),
        }
    }
}

impl ApplicationRecord {
    const ENTITY: &'static str = "Application";

    pub fn to_model(&self) -> Result<Application, ValidationError> {
        let job = require_present(self.job.as_deref(), Self::ENTITY, "job")?;
        let stage = require_present(self.stage.as_deref(), Self::ENTITY, "stage")?;
        Ok(Application::new(Job::parse(job)?, Stage::parse(stage)?))
    }
}

impl From<&Application> for ApplicationRecord {
    fn from(application: &Application) -> Self {
        Self {
            job: Some(application.job().to_string()),
            stage: Some(application.stage().label().to_string()),
        }
    }
}

impl InterviewRecord {
    const ENTITY: &'static str = "Interview";
    const SCHEDULE_CONSTRAINT: &'static str =
        "interview times should be formatted as YYYY-MM-DDTHH:MM:SS";

    pub fn to_model(&self) -> Result<Interview, ValidationError> {
        let applicant = require_present(self.applicant.as_deref(), Self::ENTITY, "applicant")?;
        let job = require_present(self.job.as_deref(), Self::ENTITY, "job")?;
        let scheduled_at =
            require_present(self.scheduled_at.as_deref(), Self::ENTITY, "scheduled_at")?;
        let scheduled_at = NaiveDateTime::parse_from_str(scheduled_at, DATE_TIME_FORMAT)
            .map_err(|_| {
                ValidationError::invalid("scheduled_at", scheduled_at, Self::SCHEDULE_CONSTRAINT)
            })?;

        Ok(Interview::new(
            Name::parse(applicant)?,
            Job::parse(job)?,
            scheduled_at,
        ))
    }
}

impl From<&Interview> for InterviewRecord {
    fn from(interview: &Interview) -> Self {
        Self {
            applicant: Some(interview.applicant().to_string()),
            job: Some(interview.job().to_string()),
            scheduled_at: Some(interview.scheduled_at().format(DATE_TIME_FORMAT).to_string()),
        }
    }
}

impl TaskRecord {
    const ENTITY: &'static str = "Task";
    const DEADLINE_CONSTRAINT: &'static str = "deadlines should be formatted as YYYY-MM-DD";

    pub fn to_model(&self) -> Result<Task, ValidationError> {
        let description =
            require_present(self.description.as_deref(), Self::ENTITY, "description")?;
        let deadline = self
            .deadline
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
                    ValidationError::invalid("deadline", raw, Self::DEADLINE_CONSTRAINT)
                })
            })
            .transpose()?;

        Ok(Task::new(Description::parse(description)?, deadline, self.done))
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            description: Some(task.description().to_string()),
            deadline: task
                .deadline()
                .map(|deadline| deadline.format(DATE_FORMAT).to_string()),
            done: task.is_done(),
        }
    }
}
