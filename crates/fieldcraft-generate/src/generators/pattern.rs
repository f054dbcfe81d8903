use rand::{CryptoRng, Rng};
use rand_regex::Regex as RandRegex;
use tracing::debug;

use crate::errors::GenerationError;

/// Upper bound used for unbounded repetitions such as `*` and `+`.
const DEFAULT_MAX_REPEAT: u32 = 32;

/// Generate a string accepted by `pattern`.
///
/// The generator is compiled on every call. Generation always produces a
/// whole string, so a leading `^`/`\A` and a trailing `$`/`\z` are dropped
/// before compiling.
pub fn generate_matching(
    rng: &mut dyn CryptoRng,
    pattern: &str,
) -> Result<String, GenerationError> {
    let body = strip_anchors(pattern);
    let regex = RandRegex::compile(body, DEFAULT_MAX_REPEAT).map_err(|err| {
        GenerationError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    })?;
    debug!(pattern, "pattern generator compiled");
    Ok(rng.sample::<String, _>(&regex))
}

fn strip_anchors(pattern: &str) -> &str {
    let body = pattern
        .strip_prefix('^')
        .or_else(|| pattern.strip_prefix("\\A"))
        .unwrap_or(pattern);

    if let Some(rest) = body.strip_suffix("\\z") {
        if !ends_with_escape(rest) {
            return rest;
        }
    }
    if let Some(rest) = body.strip_suffix('$') {
        if !ends_with_escape(rest) {
            return rest;
        }
    }
    body
}

// An odd run of trailing backslashes escapes the character that follows.
fn ends_with_escape(value: &str) -> bool {
    value.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}
