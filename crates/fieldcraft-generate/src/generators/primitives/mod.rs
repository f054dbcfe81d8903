use fieldcraft_core::CharacterClass;
use rand::{CryptoRng, Rng};

use crate::errors::GenerationError;

/// Lowest byte accepted by default (space).
pub const DEFAULT_LOWER_BOUND: u8 = 32;
/// Highest byte accepted by default (`~`).
pub const DEFAULT_UPPER_BOUND: u8 = 126;
/// Backfill after trimming starts above the space character.
const BACKFILL_LOWER_BOUND: u8 = 33;
/// Characters that corrupt the downstream serialization format.
const UNSAFE_CHARACTERS: &[char] = &['#', '\\'];

/// Random string of `length` characters of `class`, drawn from printable
/// ASCII.
pub fn create_random_string(
    rng: &mut dyn CryptoRng,
    length: usize,
    class: CharacterClass,
) -> Result<String, GenerationError> {
    create_random_string_in_range(rng, length, class, DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND)
}

/// Random string of `length` characters of `class`, built one random byte at
/// a time.
///
/// Bytes outside `[lower, upper]` are discarded, as is a leading `'0'` for
/// [`CharacterClass::Digits`]. Bytes above 127 are read as Latin-1 code
/// points. There is no bound on the number of draws: a class that has no
/// member inside the byte range never returns.
pub fn create_random_string_in_range(
    rng: &mut dyn CryptoRng,
    length: usize,
    class: CharacterClass,
    lower: u8,
    upper: u8,
) -> Result<String, GenerationError> {
    if class == CharacterClass::NotAssigned {
        return Err(GenerationError::InvalidArgument(
            "character class must be assigned".to_string(),
        ));
    }
    if lower > upper {
        return Err(GenerationError::InvalidArgument(format!(
            "byte range {lower}..={upper} is empty"
        )));
    }

    let mut value = String::with_capacity(length);
    let mut accepted = 0;
    while accepted < length {
        let byte: u8 = rng.random();
        if byte < lower || byte > upper {
            continue;
        }

        let c = char::from(byte);
        if class == CharacterClass::Digits && accepted == 0 && c == '0' {
            continue;
        }

        if let Some(c) = accept(class, c) {
            value.push(c);
            accepted += 1;
        }
    }

    Ok(value)
}

/// Random string that never starts or ends with whitespace.
///
/// Surrounding whitespace is trimmed and the trimmed amount is backfilled at
/// the end, so the result always has exactly `length` characters. With
/// `replace_unsafe`, every `#` and `\` is swapped for a fresh alphanumeric
/// character.
pub fn create_random_safe_string(
    rng: &mut dyn CryptoRng,
    length: usize,
    class: CharacterClass,
    replace_unsafe: bool,
) -> Result<String, GenerationError> {
    let raw = create_random_string(rng, length, class)?;
    let trimmed = raw.trim();
    let trim_amount = raw.chars().count() - trimmed.chars().count();

    let mut value = trimmed.to_string();
    if trim_amount > 0 {
        let backfill = create_random_string_in_range(
            rng,
            trim_amount,
            class,
            BACKFILL_LOWER_BOUND,
            DEFAULT_UPPER_BOUND,
        )?;
        value.push_str(&backfill);
    }

    if replace_unsafe && value.contains(UNSAFE_CHARACTERS) {
        let mut replaced = String::with_capacity(value.len());
        for c in value.chars() {
            if UNSAFE_CHARACTERS.contains(&c) {
                let substitute = create_random_string(rng, 1, CharacterClass::DigitsOrLetters)?;
                replaced.push_str(&substitute);
            } else {
                replaced.push(c);
            }
        }
        value = replaced;
    }

    Ok(value)
}

fn accept(class: CharacterClass, c: char) -> Option<char> {
    match class {
        CharacterClass::Digits => c.is_ascii_digit().then_some(c),
        CharacterClass::Letters => c.is_alphabetic().then_some(c),
        CharacterClass::LettersUpperCase => c.is_alphabetic().then(|| to_upper(c)),
        CharacterClass::DigitsOrLetters => (c.is_alphabetic() || c.is_ascii_digit()).then_some(c),
        CharacterClass::Anything => Some(c),
        CharacterClass::NotAssigned => None,
    }
}

// Characters whose upper case spans several characters (`ß`) stay as they are.
fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
