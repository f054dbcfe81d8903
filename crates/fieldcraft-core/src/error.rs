use thiserror::Error;

/// Core error type shared across fieldcraft crates.
#[derive(Debug, Error)]
pub enum Error {
    /// No record type with this name was registered.
    #[error("record not found: {0}")]
    RecordNotFound(String),
    /// The record exists but has no field with this name.
    #[error("could not find field {field} for record {record}")]
    FieldNotFound { record: String, field: String },
    /// A field carries more than one descriptor, or a malformed one.
    #[error("ambiguous descriptor for {record}.{field}: {reason}")]
    AmbiguousDescriptor {
        record: String,
        field: String,
        reason: String,
    },
    /// An enum-like parameter had a value outside its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The registry violates internal invariants.
    #[error("invalid registry: {0}")]
    InvalidRegistry(String),
    /// A registry configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results returned by fieldcraft crates.
pub type Result<T> = std::result::Result<T, Error>;
