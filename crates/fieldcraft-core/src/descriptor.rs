use serde::{Deserialize, Serialize};

use crate::types::{CharacterClass, EnumType, ValueKind};

/// Constraints attached to one field of one record type.
///
/// A descriptor is built once when its record is registered and only read
/// afterwards. Several constraint sources may be described, but generation
/// is driven by exactly one of them, see [`FieldDescriptor::active_source`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldDescriptor {
    pub required: bool,
    /// Maximum length; `None` and `Some(0)` both mean unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    pub character_class: CharacterClass,
    pub value_kind: ValueKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_type: Option<EnumType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
    /// Rounding precision for decimals; `None` means the generator default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_points: Option<u32>,
    pub invalidation_eligible: bool,
}

impl Default for FieldDescriptor {
    fn default() -> Self {
        Self {
            required: false,
            max_length: None,
            character_class: CharacterClass::NotAssigned,
            value_kind: ValueKind::String,
            regex: None,
            enum_type: None,
            allowed_values: None,
            decimal_points: None,
            invalidation_eligible: true,
        }
    }
}

/// The constraint that drives generation for a descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintSource<'a> {
    Enum(&'a EnumType),
    AllowedValues(&'a [String]),
    Pattern(&'a str),
    Kind(&'a ValueKind),
}

impl FieldDescriptor {
    /// String field with a maximum length and character class.
    pub fn text(max_length: usize, character_class: CharacterClass) -> Self {
        Self {
            max_length: Some(max_length),
            character_class,
            value_kind: ValueKind::String,
            ..Self::default()
        }
    }

    pub fn of_kind(value_kind: ValueKind) -> Self {
        Self {
            value_kind,
            ..Self::default()
        }
    }

    pub fn decimal(decimal_points: u32) -> Self {
        Self {
            value_kind: ValueKind::Decimal,
            decimal_points: Some(decimal_points),
            ..Self::default()
        }
    }

    pub fn pattern(max_length: usize, regex: impl Into<String>) -> Self {
        Self {
            max_length: Some(max_length),
            regex: Some(regex.into()),
            ..Self::default()
        }
    }

    pub fn enumeration(enum_type: EnumType) -> Self {
        Self {
            enum_type: Some(enum_type),
            ..Self::default()
        }
    }

    pub fn enumeration_with_length(max_length: usize, enum_type: EnumType) -> Self {
        Self {
            max_length: Some(max_length),
            enum_type: Some(enum_type),
            ..Self::default()
        }
    }

    pub fn allowed_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_values: Some(values.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn not_invalidatable(mut self) -> Self {
        self.invalidation_eligible = false;
        self
    }

    /// Declared maximum length, treating zero as unset.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length.filter(|len| *len > 0)
    }

    /// Resolve the constraint source in priority order: enum, allowed values,
    /// pattern, then value kind.
    pub fn active_source(&self) -> ConstraintSource<'_> {
        if let Some(enum_type) = &self.enum_type {
            return ConstraintSource::Enum(enum_type);
        }
        if let Some(values) = &self.allowed_values {
            return ConstraintSource::AllowedValues(values);
        }
        if let Some(regex) = &self.regex {
            return ConstraintSource::Pattern(regex);
        }
        ConstraintSource::Kind(&self.value_kind)
    }

    /// Check that the descriptor names a single usable constraint source.
    ///
    /// Returns the reason the descriptor is malformed, if any.
    pub fn validate(&self) -> Result<(), String> {
        let sources = [
            self.enum_type.is_some(),
            self.allowed_values.is_some(),
            self.regex.is_some(),
        ];
        if sources.iter().filter(|set| **set).count() > 1 {
            return Err(
                "at most one of enum_type, allowed_values and regex may be set".to_string(),
            );
        }
        if self
            .enum_type
            .as_ref()
            .is_some_and(|enum_type| enum_type.members.is_empty())
        {
            return Err("enum_type has no members".to_string());
        }
        if self
            .allowed_values
            .as_ref()
            .is_some_and(|values| values.is_empty())
        {
            return Err("allowed_values is empty".to_string());
        }
        Ok(())
    }
}
