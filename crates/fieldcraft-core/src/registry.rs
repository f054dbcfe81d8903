use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::descriptor::FieldDescriptor;
use crate::error::{Error, Result};
use crate::schema::{DescribedRecord, FieldSpec, RecordType};
use crate::validation::validate_record;

/// Which described fields [`DescriptorRegistry::list_fields`] yields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldFilter {
    #[default]
    All,
    Required,
    Optional,
}

impl FromStr for FieldFilter {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FieldFilter::All),
            "required" => Ok(FieldFilter::Required),
            "optional" => Ok(FieldFilter::Optional),
            other => Err(Error::InvalidArgument(format!(
                "unknown field filter '{other}'"
            ))),
        }
    }
}

impl fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldFilter::All => "all",
            FieldFilter::Required => "required",
            FieldFilter::Optional => "optional",
        };
        f.write_str(name)
    }
}

/// Registry of record types and the descriptors of their fields.
///
/// Records are registered once at startup; lookups only hand out shared
/// references, so descriptors stay read-only for the registry's lifetime.
#[derive(Debug, Clone, Default)]
pub struct DescriptorRegistry {
    records: BTreeMap<String, RecordType>,
}

impl DescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a record type.
    pub fn register(&mut self, record: RecordType) -> Result<()> {
        validate_record(&record)?;
        if self.records.contains_key(&record.name) {
            return Err(Error::InvalidRegistry(format!(
                "duplicate record name: {}",
                record.name
            )));
        }
        debug!(
            record = %record.name,
            fields = record.fields.len(),
            "record registered"
        );
        self.records.insert(record.name.clone(), record);
        Ok(())
    }

    /// Register a Rust type through its [`DescribedRecord`] implementation.
    pub fn register_type<T: DescribedRecord>(&mut self) -> Result<()> {
        let record = T::describe();
        if record.name != T::RECORD_NAME {
            return Err(Error::InvalidRegistry(format!(
                "record {} describes itself as {}",
                T::RECORD_NAME,
                record.name
            )));
        }
        self.register(record)
    }

    pub fn record(&self, name: &str) -> Result<&RecordType> {
        self.records
            .get(name)
            .ok_or_else(|| Error::RecordNotFound(name.to_string()))
    }

    /// Names of all registered records, sorted.
    pub fn records(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn field(&self, record: &str, field: &str) -> Result<&FieldSpec> {
        self.record(record)?
            .fields
            .iter()
            .find(|spec| spec.name == field)
            .ok_or_else(|| Error::FieldNotFound {
                record: record.to_string(),
                field: field.to_string(),
            })
    }

    /// Descriptor of a field, or `None` when the field exists but carries no
    /// descriptor.
    pub fn descriptor(&self, record: &str, field: &str) -> Result<Option<&FieldDescriptor>> {
        Ok(self.field(record, field)?.descriptor.as_ref())
    }

    pub fn descriptor_of<T: DescribedRecord>(&self, field: &str) -> Result<Option<&FieldDescriptor>> {
        self.descriptor(T::RECORD_NAME, field)
    }

    /// Described fields of a record, filtered on the `required` flag and
    /// optionally on invalidation eligibility.
    ///
    /// The returned iterator is lazy and can be cloned to restart it.
    pub fn list_fields(
        &self,
        record: &str,
        filter: FieldFilter,
        only_invalidation_eligible: bool,
    ) -> Result<Fields<'_>> {
        let record = self.record(record)?;
        Ok(Fields {
            inner: record.fields.iter(),
            filter,
            only_invalidation_eligible,
        })
    }
}

/// Lazy iterator over the described fields of one record.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    inner: std::slice::Iter<'a, FieldSpec>,
    filter: FieldFilter,
    only_invalidation_eligible: bool,
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a FieldSpec;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        let only_invalidation_eligible = self.only_invalidation_eligible;
        self.inner.by_ref().find(|field| {
            let Some(descriptor) = &field.descriptor else {
                return false;
            };
            if only_invalidation_eligible && !descriptor.invalidation_eligible {
                return false;
            }
            match filter {
                FieldFilter::All => true,
                FieldFilter::Required => descriptor.required,
                FieldFilter::Optional => !descriptor.required,
            }
        })
    }
}
