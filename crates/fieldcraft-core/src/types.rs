use std::fmt;

use serde::{Deserialize, Serialize};

/// Named subset of characters a random string may be drawn from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Anything,
    Letters,
    LettersUpperCase,
    Digits,
    DigitsOrLetters,
    /// No class declared on the descriptor.
    #[default]
    NotAssigned,
}

impl CharacterClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Anything => "anything",
            CharacterClass::Letters => "letters",
            CharacterClass::LettersUpperCase => "letters_upper_case",
            CharacterClass::Digits => "digits",
            CharacterClass::DigitsOrLetters => "digits_or_letters",
            CharacterClass::NotAssigned => "not_assigned",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic kind of a field value, used when no enum, allowed-value set or
/// pattern drives generation.
///
/// Kinds declared in configuration that are not known here are kept as
/// [`ValueKind::Other`] so that generation can report them precisely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ValueKind {
    #[default]
    String,
    Int,
    Decimal,
    Bool,
    Date,
    Email,
    Other(String),
}

impl ValueKind {
    pub fn as_str(&self) -> &str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Decimal => "decimal",
            ValueKind::Bool => "bool",
            ValueKind::Date => "date",
            ValueKind::Email => "email",
            ValueKind::Other(name) => name.as_str(),
        }
    }
}

impl From<String> for ValueKind {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "string" => ValueKind::String,
            "int" => ValueKind::Int,
            "decimal" => ValueKind::Decimal,
            "bool" => ValueKind::Bool,
            "date" => ValueKind::Date,
            "email" => ValueKind::Email,
            _ => ValueKind::Other(value),
        }
    }
}

impl From<&str> for ValueKind {
    fn from(value: &str) -> Self {
        ValueKind::from(value.to_string())
    }
}

impl From<ValueKind> for String {
    fn from(value: ValueKind) -> Self {
        match value {
            ValueKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An enumeration with an explicit, ordered list of member labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<String>,
}

impl EnumType {
    /// Build an enum type from any ordered sequence of displayable members.
    ///
    /// ```
    /// use fieldcraft_core::EnumType;
    ///
    /// let colors = EnumType::from_members("Color", ["Red", "Green", "Blue"]);
    /// assert_eq!(colors.members, vec!["Red", "Green", "Blue"]);
    /// ```
    pub fn from_members<I, T>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.members.iter().any(|member| member == label)
    }
}
