use std::fmt;

use chrono::NaiveDateTime;

use super::application::Job;
use super::contact::Name;

/// An interview slot booked for an applicant on a job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interview {
    applicant: Name,
    job: Job,
    scheduled_at: NaiveDateTime,
}

impl Interview {
    pub fn new(applicant: Name, job: Job, scheduled_at: NaiveDateTime) -> Self {
        Self {
            applicant,
            job,
            scheduled_at,
        }
    }

    pub fn applicant(&self) -> &Name {
        &self.applicant
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_at
    }

    /// Same slot and job, booked under a different applicant name.
    pub fn with_applicant(&self, applicant: Name) -> Self {
        Self {
            applicant,
            job: self.job.clone(),
            scheduled_at: self.scheduled_at,
        }
    }

    /// An applicant cannot sit two interviews in the same slot.
    pub fn is_same_interview(&self, other: &Interview) -> bool {
        self.applicant == other.applicant && self.scheduled_at == other.scheduled_at
    }
}

impl fmt::Display for Interview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for {} at {}",
            self.applicant,
            self.job,
            self.scheduled_at.format("%Y-%m-%d %H:%M")
        )
    }
}
