/// Raised when a raw value does not satisfy the format rule of its field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid {field} '{value}': {constraint}")]
    InvalidField {
        field: &'static str,
        value: String,
        constraint: &'static str,
    },
    #[error("{entity}'s {field} field is missing")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
}

impl ValidationError {
    pub(crate) fn invalid(field: &'static str, value: &str, constraint: &'static str) -> Self {
        Self::InvalidField {
            field,
            value: value.to_string(),
            constraint,
        }
    }
}

/// Unwraps a field that must be present before the entity can be built.
pub fn require_present<T>(
    value: Option<T>,
    entity: &'static str,
    field: &'static str,
) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField { entity, field })
}

/// True when `raw` is non-empty and does not start with whitespace.
pub(crate) fn starts_with_content(raw: &str) -> bool {
    raw.chars().next().is_some_and(|c| !c.is_whitespace())
}
