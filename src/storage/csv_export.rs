use std::io::Write;

use super::StorageError;
use crate::model::Person;

const HEADER: [&str; 5] = ["name", "phone", "email", "address", "applications"];

/// Writes one CSV row per applicant; applications are `JOB:Stage` joined by `;`.
pub fn export_persons_csv<'a, W, I>(writer: W, persons: I) -> Result<usize, StorageError>
where
    W: Write,
    I: IntoIterator<Item = &'a Person>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    let mut rows = 0;
    for person in persons {
        let applications = person
            .applications()
            .iter()
            .map(|application| format!("{}:{}", application.job(), application.stage()))
            .collect::<Vec<_>>()
            .join(";");
        csv_writer.write_record([
            person.name().as_str(),
            person.phone().as_str(),
            person.email().as_str(),
            person.address().as_str(),
            applications.as_str(),
        ])?;
        rows += 1;
    }

    csv_writer.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_address_book;

    #[test]
    fn exports_header_and_rows() {
        let book = sample_address_book();
        let mut buffer = Vec::new();
        let rows = export_persons_csv(&mut buffer, book.persons()).expect("export succeeds");
        assert_eq!(rows, 4);

        let output = String::from_utf8(buffer).expect("utf8 output");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("name,phone,email,address,applications"));
        assert_eq!(
            lines.next(),
            Some("Alex Yeoh,87438807,alexyeoh@example.com,\"Blk 30 Geylang Street 29, #06-40\",SWE123:Interview")
        );
        assert_eq!(
            lines.next(),
            Some("Bernice Yu,99272758,berniceyu@example.com,\"Blk 30 Lorong 3 Serangoon Gardens, #07-18\",DS42:Offer;SWE123:Applied")
        );
    }
}
