//! Validated contact fields of an applicant.
//!
//! Each type wraps the raw string it was parsed from and can only be built
//! through `parse`, so holding a value means the format rule already passed.

use std::fmt;
use std::str::FromStr;

use super::validation::{starts_with_content, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const CONSTRAINT: &'static str =
        "names should only contain alphanumeric characters and spaces, and must not be blank";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let valid = starts_with_content(raw)
            && raw.chars().all(|c| c.is_alphanumeric() || c == ' ');
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::invalid("name", raw, Self::CONSTRAINT))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl Phone {
    pub const CONSTRAINT: &'static str =
        "phone numbers should only contain digits, and must be at least 3 digits long";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.len() >= 3 && raw.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::invalid("phone", raw, Self::CONSTRAINT))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    pub const CONSTRAINT: &'static str = "emails should be of the format local-part@domain; the \
         local part holds alphanumerics and + _ . - (not at either end), the domain is \
         dot-separated labels of alphanumerics and inner hyphens ending in a label of at least 2 characters";

    const LOCAL_SPECIALS: [char; 4] = ['+', '_', '.', '-'];

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let valid = match raw.split_once('@') {
            Some((local, domain)) => Self::valid_local(local) && Self::valid_domain(domain),
            None => false,
        };
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::invalid("email", raw, Self::CONSTRAINT))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn valid_local(local: &str) -> bool {
        let bounded = match (local.chars().next(), local.chars().last()) {
            (Some(first), Some(last)) => first.is_alphanumeric() && last.is_alphanumeric(),
            _ => false,
        };
        bounded
            && local
                .chars()
                .all(|c| c.is_alphanumeric() || Self::LOCAL_SPECIALS.contains(&c))
    }

    fn valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        let Some(last) = labels.last() else {
            return false;
        };
        last.chars().count() >= 2 && labels.iter().all(|label| Self::valid_label(label))
    }

    fn valid_label(label: &str) -> bool {
        let bounded = match (label.chars().next(), label.chars().last()) {
            (Some(first), Some(last)) => first.is_alphanumeric() && last.is_alphanumeric(),
            _ => false,
        };
        bounded && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    pub const CONSTRAINT: &'static str = "addresses can take any value, but must not be blank";

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if starts_with_content(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::invalid("address", raw, Self::CONSTRAINT))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_field_impls {
    ($($ty:ident),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl FromStr for $ty {
                type Err = ValidationError;

                fn from_str(raw: &str) -> Result<Self, Self::Err> {
                    Self::parse(raw)
                }
            }
        )*
    };
}

string_field_impls!(Name, Phone, Email, Address);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_alphanumerics_and_spaces() {
        assert!(Name::parse("Alex Yeoh").is_ok());
        assert!(Name::parse("Charlotte Oliveiro 2nd").is_ok());
        assert!(Name::parse("").is_err());
        assert!(Name::parse(" leading").is_err());
        assert!(Name::parse("peter*").is_err());
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::parse("911").is_ok());
        assert!(Phone::parse("87438807").is_ok());
        assert!(Phone::parse("91").is_err());
        assert!(Phone::parse("9011p041").is_err());
        assert!(Phone::parse("9312 1534").is_err());
    }

    #[test]
    fn email_checks_local_part_and_domain() {
        assert!(Email::parse("alexyeoh@example.com").is_ok());
        assert!(Email::parse("a+b.c_d-e@mail-server.example.org").is_ok());
        assert!(Email::parse("peter@ab").is_ok());
        assert!(Email::parse("peterjack").is_err());
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse(".peter@example.com").is_err());
        assert!(Email::parse("peter-@example.com").is_err());
        assert!(Email::parse("peter@example.c").is_err());
        assert!(Email::parse("peter@-example.com").is_err());
        assert!(Email::parse("peter@example..com").is_err());
        assert!(Email::parse("peter@exa mple.com").is_err());
    }

    #[test]
    fn address_must_not_be_blank() {
        assert!(Address::parse("Blk 30 Geylang Street 29, #06-40").is_ok());
        assert!(Address::parse("-").is_ok());
        assert!(Address::parse("").is_err());
        assert!(Address::parse(" ").is_err());
    }

    #[test]
    fn invalid_field_names_the_constraint() {
        let err = Phone::parse("12").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidField {
                field: "phone",
                value: "12".to_string(),
                constraint: Phone::CONSTRAINT,
            }
        );
    }
}
