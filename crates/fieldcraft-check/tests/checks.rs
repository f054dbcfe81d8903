use fieldcraft_check::State;
use fieldcraft_check::check::{
    are_equal, are_equal_values, does_not_throw, has_count_greater_than, is_not_null, is_null,
    string_containing,
};

#[test]
fn equal_strings_pass_with_value_detail() {
    let result = are_equal(Some("abc"), Some("abc"), "same", None);
    assert_eq!(result.state(), State::Passed);
    assert_eq!(result.detail(), "Value was 'abc'");
    assert_eq!(result.to_string(), "State: Passed, Name: same, Detail: Value was 'abc'");
}

#[test]
fn differing_strings_use_readable_markers() {
    let result = are_equal(None, Some(""), "markers", None);
    assert_eq!(result.state(), State::Failed);
    assert_eq!(
        result.detail(),
        "Value should be '<empty string>', but was '<null>'"
    );

    let both_null = are_equal(None, None, "nulls", None);
    assert_eq!(both_null.state(), State::Passed);
    assert_eq!(both_null.detail(), "Value was '<null>'");
}

#[test]
fn supplied_detail_replaces_the_default() {
    let result = are_equal(Some("a"), Some("b"), "custom", Some("mismatch"));
    assert_eq!(result.state(), State::Failed);
    assert_eq!(result.detail(), "mismatch");
}

#[test]
fn equal_values_compare_by_equality() {
    let passed = are_equal_values(42, 42, "answer", None);
    assert_eq!(passed.state(), State::Passed);
    assert_eq!(passed.detail(), "Value was '42'");

    let failed = are_equal_values(1.5, 2.5, "ratio", None);
    assert_eq!(failed.state(), State::Failed);
    assert_eq!(failed.detail(), "Value should be '2.5', but was '1.5'");
}

#[test]
fn does_not_throw_reports_ok_err_and_panic() {
    let ok = does_not_throw(|| Ok::<_, String>(1), "ok");
    assert_eq!(ok.state(), State::Passed);
    assert_eq!(ok.detail(), "Did not throw");

    let err = does_not_throw(|| Err::<(), _>("disk full"), "err");
    assert_eq!(err.state(), State::Failed);
    assert_eq!(err.detail(), "Threw disk full");

    let panicked = does_not_throw(
        || -> Result<(), String> { panic!("exploded") },
        "panic",
    );
    assert_eq!(panicked.state(), State::Failed);
    assert_eq!(panicked.detail(), "Threw exploded");
}

#[test]
fn count_greater_than_reports_both_outcomes() {
    let items = vec![1, 2, 3];
    let passed = has_count_greater_than(&items, 2, "count", None);
    assert_eq!(passed.state(), State::Passed);
    assert_eq!(passed.detail(), "Count should be > 2, was 3");

    let failed = has_count_greater_than(&items, 3, "count", None);
    assert_eq!(failed.state(), State::Failed);
    assert_eq!(failed.detail(), "Count should have been > 3, but was 3");
}

#[test]
fn null_checks_use_fixed_messages() {
    let present = is_not_null(Some(1), "present", None);
    assert_eq!(present.state(), State::Passed);
    assert_eq!(present.detail(), "Value should not be null and wasn't null.");

    let missing = is_not_null(None::<i32>, "missing", None);
    assert_eq!(missing.state(), State::Failed);
    assert_eq!(missing.detail(), "Value should not be null but was null.");

    let null = is_null(None::<&str>, "null", None);
    assert_eq!(null.state(), State::Passed);
    assert_eq!(null.detail(), "Value should be null and was null.");

    let not_null = is_null(Some("x"), "not null", None);
    assert_eq!(not_null.state(), State::Failed);
    assert_eq!(not_null.detail(), "Value should not be null and wasn't null.");
}

#[test]
fn string_containing_handles_null_and_substrings() {
    let null = string_containing(None, "needle", "null", None);
    assert_eq!(null.state(), State::Failed);
    assert_eq!(
        null.detail(),
        "String should have contained 'needle', but was <null>"
    );

    let found = string_containing(Some("haystack with needle"), "needle", "found", None);
    assert_eq!(found.state(), State::Passed);
    assert_eq!(
        found.detail(),
        "String contained 'needle', was 'haystack with needle'"
    );

    let absent = string_containing(Some("haystack"), "needle", "absent", None);
    assert_eq!(absent.state(), State::Failed);
    assert_eq!(
        absent.detail(),
        "String should have contained 'needle', but was 'haystack'"
    );
}
