use std::fmt;
use std::str::FromStr;

use super::validation::ValidationError;

/// Identifier of a job posting, e.g. `SWE123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Job(String);

impl Job {
    pub const CONSTRAINT: &'static str =
        "job ids should only contain alphanumeric characters, '-' and '_', and must not be blank";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::invalid("job", raw, Self::CONSTRAINT))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Job {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

/// Where an applicant currently sits in the hiring pipeline for one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Applied,
    Screening,
    Interview,
    Offer,
    Accepted,
    Rejected,
}

impl Stage {
    pub const CONSTRAINT: &'static str =
        "stage should be one of Applied, Screening, Interview, Offer, Accepted, Rejected";

    pub const fn ordered() -> [Self; 6] {
        [
            Self::Applied,
            Self::Screening,
            Self::Interview,
            Self::Offer,
            Self::Accepted,
            Self::Rejected,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Screening => "Screening",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Parses a stage label, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let wanted = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|stage| stage.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::invalid("stage", raw, Self::CONSTRAINT))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stage {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

/// One applicant's progress on one job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Application {
    job: Job,
    stage: Stage,
}

impl Application {
    pub fn new(job: Job, stage: Stage) -> Self {
        Self { job, stage }
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }
}

/// Accepts the `JOB:STAGE` shorthand used on the command line.
impl FromStr for Application {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (job, stage) = raw.split_once(':').ok_or_else(|| {
            ValidationError::invalid("application", raw, "applications are written as JOB:STAGE")
        })?;
        Ok(Self::new(Job::parse(job.trim())?, Stage::parse(stage)?))
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}]", self.job, self.stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_rejects_blank_and_punctuation() {
        assert!(Job::parse("SWE123").is_ok());
        assert!(Job::parse("data-eng_2").is_ok());
        assert!(Job::parse("").is_err());
        assert!(Job::parse("SWE 123").is_err());
        assert!(Job::parse("SWE:123").is_err());
    }

    #[test]
    fn stage_parses_case_insensitively() {
        assert_eq!(Stage::parse("interview").expect("valid"), Stage::Interview);
        assert_eq!(Stage::parse(" OFFER ").expect("valid"), Stage::Offer);
        assert!(Stage::parse("ghosted").is_err());
        assert_eq!(Stage::Interview.to_string(), "Interview");
    }

    #[test]
    fn application_parses_job_stage_shorthand() {
        let application: Application = "SWE123:applied".parse().expect("valid shorthand");
        assert_eq!(application.job().as_str(), "SWE123");
        assert_eq!(application.stage(), Stage::Applied);
        assert!("SWE123".parse::<Application>().is_err());
        assert!("SWE123:unknown".parse::<Application>().is_err());
    }
}
