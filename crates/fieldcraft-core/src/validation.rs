use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::RecordType;

/// Validate internal consistency of a record type.
///
/// This checks:
/// - the record and every field have a name
/// - no field is declared twice (two declarations means two descriptors)
/// - every present descriptor names a single usable constraint source
pub fn validate_record(record: &RecordType) -> Result<()> {
    if record.name.trim().is_empty() {
        return Err(Error::InvalidRegistry(
            "record name must not be empty".to_string(),
        ));
    }

    let mut seen = BTreeSet::new();
    for field in &record.fields {
        if field.name.trim().is_empty() {
            return Err(Error::InvalidRegistry(format!(
                "record {} has a field without a name",
                record.name
            )));
        }

        if !seen.insert(field.name.as_str()) {
            return Err(Error::AmbiguousDescriptor {
                record: record.name.clone(),
                field: field.name.clone(),
                reason: "field is declared more than once".to_string(),
            });
        }

        if let Some(descriptor) = &field.descriptor {
            descriptor
                .validate()
                .map_err(|reason| Error::AmbiguousDescriptor {
                    record: record.name.clone(),
                    field: field.name.clone(),
                    reason,
                })?;
        }
    }

    Ok(())
}
