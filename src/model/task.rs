use std::fmt;

use chrono::NaiveDate;

use super::validation::{starts_with_content, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Description(String);

impl Description {
    pub const CONSTRAINT: &'static str = "task descriptions must not be blank";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if starts_with_content(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::invalid("description", raw, Self::CONSTRAINT))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A recruiter to-do item, optionally due on a date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    description: Description,
    deadline: Option<NaiveDate>,
    done: bool,
}

impl Task {
    pub fn new(description: Description, deadline: Option<NaiveDate>, done: bool) -> Self {
        Self {
            description,
            deadline,
            done,
        }
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_same_task(&self, other: &Task) -> bool {
        self.description == other.description
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { "X" } else { " " };
        write!(f, "[{mark}] {}", self.description)?;
        if let Some(deadline) = self.deadline {
            write!(f, " (by {deadline})")?;
        }
        Ok(())
    }
}
