//! Named assertions that report their outcome as data.
//!
//! Every function returns a [`CheckResult`]. A failed check is a `Failed`
//! result, never a panic or an error. When `detail` is `None`, a default
//! message describing the compared values is used.

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::result::{CheckResult, State};

const NULL_MARKER: &str = "<null>";
const EMPTY_MARKER: &str = "<empty string>";

/// Readable form of an optional string: `<null>` for `None`, `<empty string>`
/// for `""`.
pub fn readable(value: Option<&str>) -> &str {
    match value {
        None => NULL_MARKER,
        Some("") => EMPTY_MARKER,
        Some(value) => value,
    }
}

fn outcome(passed: bool, name: impl Into<String>, detail: String) -> CheckResult {
    let state = if passed { State::Passed } else { State::Failed };
    CheckResult::new(state, name, detail)
}

fn detail_or(detail: Option<&str>, default: impl FnOnce() -> String) -> String {
    detail.map(str::to_string).unwrap_or_else(default)
}

/// Compare two optional strings.
pub fn are_equal(
    actual: Option<&str>,
    expected: Option<&str>,
    name: impl Into<String>,
    detail: Option<&str>,
) -> CheckResult {
    if actual == expected {
        let detail = detail_or(detail, || format!("Value was '{}'", readable(actual)));
        return outcome(true, name, detail);
    }
    let detail = detail_or(detail, || {
        format!(
            "Value should be '{}', but was '{}'",
            readable(expected),
            readable(actual)
        )
    });
    outcome(false, name, detail)
}

/// Compare two values by equality.
pub fn are_equal_values<T: PartialEq + Display>(
    actual: T,
    expected: T,
    name: impl Into<String>,
    detail: Option<&str>,
) -> CheckResult {
    if actual == expected {
        let detail = detail_or(detail, || format!("Value was '{actual}'"));
        return outcome(true, name, detail);
    }
    let detail = detail_or(detail, || {
        format!("Value should be '{expected}', but was '{actual}'")
    });
    outcome(false, name, detail)
}

/// Run `f` and fail when it returns an error or panics.
pub fn does_not_throw<T, E, F>(f: F, name: impl Into<String>) -> CheckResult
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
{
    let name = name.into();
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(_)) => CheckResult::new(State::Passed, name, "Did not throw"),
        Ok(Err(err)) => CheckResult::new(State::Failed, name, format!("Threw {err}")),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            debug!(check = %name, %message, "check caught a panic");
            CheckResult::new(State::Failed, name, format!("Threw {message}"))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic".to_string()
    }
}

pub fn has_count_greater_than<I: IntoIterator>(
    items: I,
    count: usize,
    name: impl Into<String>,
    detail: Option<&str>,
) -> CheckResult {
    let actual = items.into_iter().count();
    if actual > count {
        let detail = detail_or(detail, || {
            format!("Count should be > {count}, was {actual}")
        });
        return outcome(true, name, detail);
    }
    let detail = detail_or(detail, || {
        format!("Count should have been > {count}, but was {actual}")
    });
    outcome(false, name, detail)
}

pub fn is_not_null<T>(value: Option<T>, name: impl Into<String>, detail: Option<&str>) -> CheckResult {
    if value.is_some() {
        let detail = detail_or(detail, || {
            "Value should not be null and wasn't null.".to_string()
        });
        return outcome(true, name, detail);
    }
    let detail = detail_or(detail, || "Value should not be null but was null.".to_string());
    outcome(false, name, detail)
}

/// The failure message is the passing message of [`is_not_null`], kept for
/// report compatibility.
pub fn is_null<T>(value: Option<T>, name: impl Into<String>, detail: Option<&str>) -> CheckResult {
    if value.is_none() {
        let detail = detail_or(detail, || "Value should be null and was null.".to_string());
        return outcome(true, name, detail);
    }
    let detail = detail_or(detail, || {
        "Value should not be null and wasn't null.".to_string()
    });
    outcome(false, name, detail)
}

pub fn string_containing(
    message: Option<&str>,
    contains: &str,
    name: impl Into<String>,
    detail: Option<&str>,
) -> CheckResult {
    let Some(message) = message else {
        let detail = detail_or(detail, || {
            format!("String should have contained '{contains}', but was {NULL_MARKER}")
        });
        return outcome(false, name, detail);
    };
    if message.contains(contains) {
        let detail = detail_or(detail, || {
            format!("String contained '{contains}', was '{message}'")
        });
        return outcome(true, name, detail);
    }
    let detail = detail_or(detail, || {
        format!("String should have contained '{contains}', but was '{message}'")
    });
    outcome(false, name, detail)
}
