use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::api::server;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::model::{
    sample_address_book, Address, AddressBook, Application, Email, Name, Person, Phone,
    SearchQuery,
};
use crate::storage::{export_persons_csv, JsonAddressBookStorage};
use crate::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "applicant-book",
    about = "Track applicants, their job applications, interviews and tasks",
    version
)]
struct Cli {
    /// Override the configured JSON data file
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print every applicant
    List,
    /// Print applicants matching any keyword (supports jobid:<id> and progress:<stage>)
    Find {
        #[arg(required = true)]
        keywords: Vec<String>,
    },
    /// Add an applicant and save the data file
    Add(AddArgs),
    /// Write applicants to a CSV file
    Export {
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long, value_parser = parse_field::<Name>)]
    name: Name,
    #[arg(long, value_parser = parse_field::<Phone>)]
    phone: Phone,
    #[arg(long, value_parser = parse_field::<Email>)]
    email: Email,
    #[arg(long, value_parser = parse_field::<Address>)]
    address: Address,
    /// Job application written as JOB:STAGE, repeatable
    #[arg(long = "application", value_parser = parse_field::<Application>)]
    applications: Vec<Application>,
}

fn parse_field<T>(raw: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|err| err.to_string())
}

pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(data) = cli.data {
        config.storage.data_path = data;
    }

    telemetry::init(&config.telemetry)?;

    let storage = JsonAddressBookStorage::new(config.storage.data_path.clone());
    let book = load_or_sample(&storage)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => {
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
            server::run(&config, book, storage).await
        }
        Command::List => {
            print_persons(book.persons().iter());
            Ok(())
        }
        Command::Find { keywords } => {
            let Some(query) = SearchQuery::from_keywords(&keywords) else {
                println!("0 applicants listed");
                return Ok(());
            };
            print_persons(book.find_persons(&query));
            Ok(())
        }
        Command::Add(args) => add_person(book, &storage, args),
        Command::Export { output } => {
            let file = BufWriter::new(File::create(&output)?);
            let rows = export_persons_csv(file, book.persons())?;
            info!(path = %output.display(), rows, "applicants exported");
            println!("{rows} applicants exported to {}", output.display());
            Ok(())
        }
    }
}

fn load_or_sample(storage: &JsonAddressBookStorage) -> Result<AddressBook, AppError> {
    match storage.read()? {
        Some(book) => Ok(book),
        None => {
            info!(
                path = %storage.path().display(),
                "starting with sample address book"
            );
            Ok(sample_address_book())
        }
    }
}

fn add_person(
    mut book: AddressBook,
    storage: &JsonAddressBookStorage,
    args: AddArgs,
) -> Result<(), AppError> {
    let person = Person::new(
        args.name,
        args.phone,
        args.email,
        args.address,
        args.applications,
    );
    let summary = person.to_string();
    book.add_person(person)?;
    storage.save(&book)?;
    println!("New applicant added: {summary}");
    Ok(())
}

fn print_persons<'a>(persons: impl Iterator<Item = &'a Person>) {
    let mut count = 0;
    for (index, person) in persons.enumerate() {
        println!("{}. {}", index + 1, person);
        count += 1;
    }
    println!("{count} applicants listed");
}
