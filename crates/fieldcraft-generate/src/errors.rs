use thiserror::Error;

/// Errors emitted while synthesizing field values.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("unsupported value kind: {0}")]
    UnsupportedKind(String),
    #[error("field {0} is a list but has no default constructor")]
    NoDefaultConstructor(String),
    #[error("field {record}.{field} has no descriptor")]
    MissingDescriptor { record: String, field: String },
    #[error(transparent)]
    Descriptor(#[from] fieldcraft_core::Error),
}
