use serde::{Deserialize, Serialize};

use crate::descriptor::FieldDescriptor;

/// A record type and its fields, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordType {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl RecordType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field; declaration order is preserved.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }
}

/// One field of a record type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub shape: FieldShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<FieldDescriptor>,
}

impl FieldSpec {
    /// Scalar field carrying a descriptor.
    pub fn described(name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        Self {
            name: name.into(),
            shape: FieldShape::Scalar,
            descriptor: Some(descriptor),
        }
    }

    /// Scalar field without a descriptor.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: FieldShape::Scalar,
            descriptor: None,
        }
    }

    pub fn with_shape(mut self, shape: FieldShape) -> Self {
        self.shape = shape;
        self
    }
}

/// Declared type of a field, as far as invalidation cares.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldShape {
    #[default]
    Scalar,
    /// A list-like collection; `default_constructible` tells whether an
    /// empty instance of the declared type can be produced.
    List { default_constructible: bool },
}

/// Current value of a field handed to invalid-value synthesis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn is_list(&self) -> bool {
        matches!(self, FieldValue::List(_))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Static registration surface for Rust types that describe their fields.
///
/// ```
/// use fieldcraft_core::{
///     CharacterClass, DescribedRecord, FieldDescriptor, FieldSpec, RecordType,
/// };
///
/// struct Customer;
///
/// impl DescribedRecord for Customer {
///     const RECORD_NAME: &'static str = "Customer";
///
///     fn describe() -> RecordType {
///         RecordType::new(Self::RECORD_NAME).field(FieldSpec::described(
///             "name",
///             FieldDescriptor::text(20, CharacterClass::Letters).required(),
///         ))
///     }
/// }
///
/// assert_eq!(Customer::describe().fields.len(), 1);
/// ```
pub trait DescribedRecord {
    const RECORD_NAME: &'static str;

    fn describe() -> RecordType;
}
