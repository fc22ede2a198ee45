use std::collections::BTreeSet;
use std::fmt;

use super::application::Application;
use super::contact::{Address, Email, Name, Phone};

const JOB_ID_PREFIX: &str = "jobid:";
const PROGRESS_PREFIX: &str = "progress:";

/// An applicant in the address book.
///
/// Every field is validated before it gets here and the aggregate is never
/// mutated; an edit builds a new `Person` and replaces the stored one.
///
/// `==` compares every field including the applications (strong identity),
/// while [`Person::is_same_person`] only compares names (weak identity) and is
/// what the address book uses to reject duplicates.
///
/// The applications are only reachable through a shared borrow:
///
/// ```compile_fail
/// use std::collections::BTreeSet;
/// use applicant_book::model::{Address, Application, Email, Name, Person, Phone};
///
/// let person = Person::new(
///     Name::parse("Alex Yeoh").unwrap(),
///     Phone::parse("87438807").unwrap(),
///     Email::parse("alexyeoh@example.com").unwrap(),
///     Address::parse("Blk 30").unwrap(),
///     BTreeSet::new(),
/// );
/// let application: Application = "SWE123:Applied".parse().unwrap();
/// person.applications().insert(application);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    applications: BTreeSet<Application>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        applications: impl IntoIterator<Item = Application>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            applications: applications.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn applications(&self) -> &BTreeSet<Application> {
        &self.applications
    }

    /// Returns true if both persons have the same name.
    pub fn is_same_person(&self, other: &Person) -> bool {
        std::ptr::eq(self, other) || self.name == other.name
    }

    /// Keyword predicate used by search.
    ///
    /// `jobid:<id>` matches an application whose job id equals `<id>` exactly.
    /// `progress:<stage>` matches an application stage, ignoring case.
    /// Anything else (and either prefix that found no application) is a
    /// case-insensitive substring match against name, phone, email and address.
    /// Prefixed terms split at the first colon, so `jobid:a:b` looks for `a:b`.
    pub fn contains(&self, term: &str) -> bool {
        let name = self.name.as_str().to_lowercase();
        debug_assert!(!name.is_empty(), "did not capture name");
        let phone = self.phone.as_str().to_lowercase();
        debug_assert!(!phone.is_empty(), "did not capture phone");
        let email = self.email.as_str().to_lowercase();
        debug_assert!(!email.is_empty(), "did not capture email");
        let address = self.address.as_str().to_lowercase();
        debug_assert!(!address.is_empty(), "did not capture address");

        let lowered = term.to_lowercase();

        if lowered.contains(JOB_ID_PREFIX) {
            let id = after_first_colon(term);
            if self
                .applications
                .iter()
                .any(|application| application.job().as_str() == id)
            {
                return true;
            }
        }

        if lowered.contains(PROGRESS_PREFIX) {
            let stage = after_first_colon(&lowered);
            if self
                .applications
                .iter()
                .any(|application| application.stage().label().to_lowercase() == stage)
            {
                return true;
            }
        }

        name.contains(&lowered)
            || phone.contains(&lowered)
            || email.contains(&lowered)
            || address.contains(&lowered)
    }
}

fn after_first_colon(term: &str) -> &str {
    term.split_once(':').map(|(_, rest)| rest).unwrap_or("")
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.applications.is_empty() {
            f.write_str("; Applications: ")?;
            for application in &self.applications {
                write!(f, "{application}")?;
            }
        }
        Ok(())
    }
}
