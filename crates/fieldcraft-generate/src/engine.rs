use fieldcraft_core::{
    CharacterClass, DescriptorRegistry, FieldDescriptor, FieldFilter, FieldSpec, FieldValue,
};
use rand::CryptoRng;
use rand::rngs::ThreadRng;
use tracing::debug;

use crate::errors::GenerationError;
use crate::generators::{
    create_invalid, create_random_safe_string, create_random_string,
    create_random_string_in_range, create_valid, generate_matching,
};
use crate::model::{GeneratedValue, InvalidationStrategy};

/// Entry point for synthesizing valid and invalid field values.
///
/// The synthesizer owns its random source. [`Synthesizer::new`] uses the
/// thread-local generator, which keeps the synthesizer on the thread that
/// created it; test runners that run cases in parallel build one
/// synthesizer per thread. [`Synthesizer::with_rng`] injects any
/// cryptographically secure generator, e.g. a seeded ChaCha for
/// reproducible runs.
#[derive(Debug, Clone)]
pub struct Synthesizer<R = ThreadRng> {
    rng: R,
}

impl Synthesizer<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for Synthesizer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CryptoRng> Synthesizer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn random_string(
        &mut self,
        length: usize,
        class: CharacterClass,
    ) -> Result<String, GenerationError> {
        create_random_string(&mut self.rng, length, class)
    }

    pub fn random_string_in_range(
        &mut self,
        length: usize,
        class: CharacterClass,
        lower: u8,
        upper: u8,
    ) -> Result<String, GenerationError> {
        create_random_string_in_range(&mut self.rng, length, class, lower, upper)
    }

    pub fn random_safe_string(
        &mut self,
        length: usize,
        class: CharacterClass,
        replace_unsafe: bool,
    ) -> Result<String, GenerationError> {
        create_random_safe_string(&mut self.rng, length, class, replace_unsafe)
    }

    pub fn matching(&mut self, pattern: &str) -> Result<String, GenerationError> {
        generate_matching(&mut self.rng, pattern)
    }

    pub fn create_valid(&mut self, descriptor: &FieldDescriptor) -> Result<String, GenerationError> {
        create_valid(&mut self.rng, descriptor)
    }

    pub fn create_invalid(
        &mut self,
        current: &FieldValue,
        field: &FieldSpec,
        strategy: InvalidationStrategy,
    ) -> Result<GeneratedValue, GenerationError> {
        create_invalid(&mut self.rng, current, field, strategy)
    }

    /// Valid value for a registered field; the field must carry a descriptor.
    pub fn valid_for(
        &mut self,
        registry: &DescriptorRegistry,
        record: &str,
        field: &str,
    ) -> Result<String, GenerationError> {
        let descriptor = registry.descriptor(record, field)?.ok_or_else(|| {
            GenerationError::MissingDescriptor {
                record: record.to_string(),
                field: field.to_string(),
            }
        })?;
        self.create_valid(descriptor)
    }

    /// Invalid value for a registered field.
    pub fn invalid_for(
        &mut self,
        registry: &DescriptorRegistry,
        record: &str,
        field: &str,
        current: &FieldValue,
        strategy: InvalidationStrategy,
    ) -> Result<GeneratedValue, GenerationError> {
        let spec = registry.field(record, field)?;
        debug!(record, field, %strategy, "generating invalid value");
        self.create_invalid(current, spec, strategy)
    }

    /// One valid value per described field of `record`, in declaration order.
    pub fn valid_record(
        &mut self,
        registry: &DescriptorRegistry,
        record: &str,
        filter: FieldFilter,
    ) -> Result<Vec<(String, String)>, GenerationError> {
        let mut values = Vec::new();
        for spec in registry.list_fields(record, filter, false)? {
            let Some(descriptor) = &spec.descriptor else {
                continue;
            };
            values.push((spec.name.clone(), self.create_valid(descriptor)?));
        }
        debug!(record, %filter, fields = values.len(), "valid record generated");
        Ok(values)
    }
}
