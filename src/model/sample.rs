use chrono::NaiveDate;

use super::address_book::AddressBook;
use super::application::{Application, Job, Stage};
use super::contact::{Address, Email, Name, Phone};
use super::interview::Interview;
use super::person::Person;
use super::task::{Description, Task};
use super::validation::ValidationError;

const PERSONS: [(&str, &str, &str, &str, &[(&str, Stage)]); 4] = [
    (
        "Alex Yeoh",
        "87438807",
        "alexyeoh@example.com",
        "Blk 30 Geylang Street 29, #06-40",
        &[("SWE123", Stage::Interview)],
    ),
    (
        "Bernice Yu",
        "99272758",
        "berniceyu@example.com",
        "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        &[("SWE123", Stage::Applied), ("DS42", Stage::Offer)],
    ),
    (
        "Charlotte Oliveiro",
        "93210283",
        "charlotte@example.com",
        "Blk 11 Ang Mo Kio Street 74, #11-04",
        &[("PM7", Stage::Screening)],
    ),
    (
        "David Li",
        "91031282",
        "lidavid@example.com",
        "Blk 436 Serangoon Gardens Street 26, #16-43",
        &[],
    ),
];

/// Address book used when no data file exists yet.
pub fn sample_address_book() -> AddressBook {
    // The literals above satisfy every field rule; a failure here is a bug in the table.
    build_sample().expect("sample data is valid")
}

fn build_sample() -> Result<AddressBook, Box<dyn std::error::Error>> {
    let mut book = AddressBook::new();

    for (name, phone, email, address, applications) in PERSONS {
        let applications = applications
            .iter()
            .map(|(job, stage)| -> Result<Application, ValidationError> {
                Ok(Application::new(Job::parse(job)?, *stage))
            })
            .collect::<Result<Vec<_>, _>>()?;
        book.add_person(Person::new(
            Name::parse(name)?,
            Phone::parse(phone)?,
            Email::parse(email)?,
            Address::parse(address)?,
            applications,
        ))?;
    }

    let scheduled_at = NaiveDate::from_ymd_opt(2025, 3, 3)
        .and_then(|date| date.and_hms_opt(10, 0, 0))
        .ok_or("invalid sample interview slot")?;
    book.add_interview(Interview::new(
        Name::parse("Alex Yeoh")?,
        Job::parse("SWE123")?,
        scheduled_at,
    ))?;

    book.add_task(Task::new(
        Description::parse("Send offer letter to Bernice Yu")?,
        NaiveDate::from_ymd_opt(2025, 3, 5),
        false,
    ))?;

    Ok(book)
}
