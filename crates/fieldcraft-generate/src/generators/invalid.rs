use fieldcraft_core::{
    CharacterClass, ConstraintSource, FieldDescriptor, FieldShape, FieldSpec, FieldValue,
    ValueKind,
};
use rand::CryptoRng;
use tracing::warn;

use crate::errors::GenerationError;
use crate::generators::primitives::create_random_safe_string;
use crate::generators::valid::DEFAULT_STRING_LENGTH;
use crate::model::{GeneratedValue, InvalidationStrategy};

/// Length used when invalidating enum and allowed-value fields.
const INVALID_MEMBER_LENGTH: usize = 11;

/// Produce a value for `field` that violates one dimension of its
/// constraints.
pub fn create_invalid(
    rng: &mut dyn CryptoRng,
    current: &FieldValue,
    field: &FieldSpec,
    strategy: InvalidationStrategy,
) -> Result<GeneratedValue, GenerationError> {
    match strategy {
        InvalidationStrategy::SetToNull => Ok(GeneratedValue::Null),
        InvalidationStrategy::IncorrectLength => incorrect_length(rng, current, field),
    }
}

fn incorrect_length(
    rng: &mut dyn CryptoRng,
    current: &FieldValue,
    field: &FieldSpec,
) -> Result<GeneratedValue, GenerationError> {
    let Some(descriptor) = &field.descriptor else {
        warn!(
            field = %field.name,
            "generating invalid value for field without descriptor"
        );
        return text(create_random_safe_string(
            rng,
            DEFAULT_STRING_LENGTH,
            CharacterClass::Letters,
            false,
        ));
    };

    if let (FieldValue::List(_), FieldShape::List { default_constructible }) =
        (current, field.shape)
    {
        return if default_constructible {
            Ok(GeneratedValue::EmptyList)
        } else {
            Err(GenerationError::NoDefaultConstructor(field.name.clone()))
        };
    }

    match descriptor.active_source() {
        // Not checked against the members: the length is the signal.
        ConstraintSource::Enum(_) => text(create_random_safe_string(
            rng,
            INVALID_MEMBER_LENGTH,
            CharacterClass::DigitsOrLetters,
            false,
        )),
        ConstraintSource::AllowedValues(values) => loop {
            let candidate = create_random_safe_string(
                rng,
                INVALID_MEMBER_LENGTH,
                CharacterClass::DigitsOrLetters,
                false,
            )?;
            if !values.contains(&candidate) {
                return text(Ok(candidate));
            }
        },
        ConstraintSource::Pattern(_) => text(too_long(rng, descriptor)),
        ConstraintSource::Kind(kind) => invalid_for_kind(rng, descriptor, kind),
    }
}

fn invalid_for_kind(
    rng: &mut dyn CryptoRng,
    descriptor: &FieldDescriptor,
    kind: &ValueKind,
) -> Result<GeneratedValue, GenerationError> {
    let value = match kind {
        ValueKind::String => too_long(rng, descriptor),
        ValueKind::Int | ValueKind::Decimal | ValueKind::Bool => create_random_safe_string(
            rng,
            DEFAULT_STRING_LENGTH,
            CharacterClass::Letters,
            false,
        ),
        ValueKind::Date => create_random_safe_string(
            rng,
            DEFAULT_STRING_LENGTH,
            CharacterClass::DigitsOrLetters,
            false,
        ),
        ValueKind::Email => create_random_safe_string(
            rng,
            DEFAULT_STRING_LENGTH,
            CharacterClass::Anything,
            false,
        ),
        ValueKind::Other(name) => return Err(GenerationError::UnsupportedKind(name.clone())),
    };
    text(value)
}

// One character past the declared maximum; an unset maximum counts as zero.
fn too_long(
    rng: &mut dyn CryptoRng,
    descriptor: &FieldDescriptor,
) -> Result<String, GenerationError> {
    let length = descriptor.max_length().unwrap_or(0) + 1;
    create_random_safe_string(rng, length, CharacterClass::Letters, false)
}

fn text(value: Result<String, GenerationError>) -> Result<GeneratedValue, GenerationError> {
    value.map(GeneratedValue::Text)
}

/// Convenience for callers that only hold a descriptor.
///
/// Without a declared field type, a list-valued `current` is taken as a
/// default-constructible list and is replaced by an empty one.
pub fn create_invalid_for_descriptor(
    rng: &mut dyn CryptoRng,
    current: &FieldValue,
    name: &str,
    descriptor: Option<&FieldDescriptor>,
    strategy: InvalidationStrategy,
) -> Result<GeneratedValue, GenerationError> {
    let shape = if current.is_list() {
        FieldShape::List {
            default_constructible: true,
        }
    } else {
        FieldShape::Scalar
    };
    let field = FieldSpec {
        name: name.to_string(),
        shape,
        descriptor: descriptor.cloned(),
    };
    create_invalid(rng, current, &field, strategy)
}
