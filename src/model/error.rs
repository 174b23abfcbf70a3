use super::{ActivityType, Field};
use std::fmt;
use thiserror::Error;

/// A value the submit guard requires before the form can be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Type,
    Description,
    Challenge,
    Token,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Requirement::Type => "activity type",
            Requirement::Description => "description",
            Requirement::Challenge => "challenge",
            Requirement::Token => "bearer token",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Field {field} is not used by {}", activity_type_name(.activity_type))]
    HiddenField {
        field: Field,
        activity_type: Option<ActivityType>,
    },
    #[error("Item {index} does not exist ({len} items)")]
    ItemOutOfRange { index: usize, len: usize },
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: Field, reason: String },
    #[error("Activity is incomplete, missing: {}", join(.0))]
    Incomplete(Vec<Requirement>),
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

fn activity_type_name(activity_type: &Option<ActivityType>) -> &'static str {
    activity_type
        .map(|activity_type| activity_type.as_str())
        .unwrap_or("an unset activity type")
}

fn join(requirements: &[Requirement]) -> String {
    requirements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_lists_requirements() {
        let error = FormError::Incomplete(vec![Requirement::Description, Requirement::Token]);
        assert_eq!(
            error.to_string(),
            "Activity is incomplete, missing: description, bearer token"
        );
    }

    #[test]
    fn hidden_field_names_type() {
        let error = FormError::HiddenField {
            field: Field::Phonemes,
            activity_type: Some(ActivityType::SentenceMatchingActivity),
        };
        assert_eq!(
            error.to_string(),
            "Field phonemes is not used by SentenceMatchingActivity"
        );
    }
}
