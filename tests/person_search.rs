use applicant_book::model::{
    sample_address_book, Address, Application, Email, Job, Name, Person, Phone, SearchQuery,
    Stage,
};

fn alex_yeoh() -> Person {
    Person::new(
        Name::parse("Alex Yeoh").expect("valid name"),
        Phone::parse("87438807").expect("valid phone"),
        Email::parse("alexyeoh@example.com").expect("valid email"),
        Address::parse("Blk 30").expect("valid address"),
        [Application::new(
            Job::parse("SWE123").expect("valid job"),
            Stage::Interview,
        )],
    )
}

#[test]
fn contains_follows_documented_scenarios() {
    let person = alex_yeoh();
    assert!(person.contains("alex"));
    assert!(person.contains("jobid:SWE123"));
    assert!(!person.contains("jobid:xyz"));
    assert!(person.contains("progress:interview"));
    assert!(!person.contains("99999999"));
}

#[test]
fn prefixed_term_falls_back_to_field_substrings() {
    let person = Person::new(
        Name::parse("Progress Tan").expect("valid name"),
        Phone::parse("87438807").expect("valid phone"),
        Email::parse("tan@example.com").expect("valid email"),
        Address::parse("Blk 30").expect("valid address"),
        Vec::new(),
    );
    assert!(person.contains("progress"));
    assert!(!person.contains("progress:offer"));
}

#[test]
fn find_persons_keeps_store_order() {
    let book = sample_address_book();

    let query = SearchQuery::parse("serangoon").expect("keywords");
    let names: Vec<&str> = book
        .find_persons(&query)
        .map(|person| person.name().as_str())
        .collect();
    assert_eq!(names, ["Bernice Yu", "David Li"]);

    let query = SearchQuery::parse("jobid:PM7 progress:interview").expect("keywords");
    let names: Vec<&str> = book
        .find_persons(&query)
        .map(|person| person.name().as_str())
        .collect();
    assert_eq!(names, ["Alex Yeoh", "Charlotte Oliveiro"]);
}
