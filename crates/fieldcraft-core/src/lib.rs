//! Core contracts for fieldcraft.
//!
//! This crate defines field descriptors, record types and the registry that
//! resolves a `(record, field)` pair to the constraints used for test-data
//! synthesis.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod schema;
pub mod types;
pub mod validation;

pub use config::RegistryConfig;
pub use descriptor::{ConstraintSource, FieldDescriptor};
pub use error::{Error, Result};
pub use registry::{DescriptorRegistry, FieldFilter, Fields};
pub use schema::{DescribedRecord, FieldShape, FieldSpec, FieldValue, RecordType};
pub use types::{CharacterClass, EnumType, ValueKind};
pub use validation::validate_record;
