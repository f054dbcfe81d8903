use std::fmt;
use std::str::FromStr;

use crate::errors::GenerationError;

/// How an invalid value is produced for a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidationStrategy {
    /// Replace the value with null.
    SetToNull,
    /// Produce a value of the wrong length or kind.
    #[default]
    IncorrectLength,
}

impl FromStr for InvalidationStrategy {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "set_to_null" => Ok(InvalidationStrategy::SetToNull),
            "incorrect_length" => Ok(InvalidationStrategy::IncorrectLength),
            other => Err(GenerationError::InvalidArgument(format!(
                "unknown invalidation strategy '{other}'"
            ))),
        }
    }
}

impl fmt::Display for InvalidationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidationStrategy::SetToNull => f.write_str("set_to_null"),
            InvalidationStrategy::IncorrectLength => f.write_str("incorrect_length"),
        }
    }
}

/// Value produced by invalid-value synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedValue {
    Null,
    Text(String),
    /// A new, empty instance of the field's list type.
    EmptyList,
}

impl GeneratedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, GeneratedValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            GeneratedValue::Text(value) => Some(value),
            _ => None,
        }
    }
}
