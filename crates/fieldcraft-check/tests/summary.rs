use fieldcraft_check::check::are_equal;
use fieldcraft_check::{CheckResult, ComparisonCase, ResultSummary, State, TestCase, TestResult};
use fieldcraft_generate::Synthesizer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn case(name: &str, states: &[State]) -> ComparisonCase<String> {
    let mut case = ComparisonCase::new(name, String::new(), String::new());
    for (index, state) in states.iter().enumerate() {
        case.push(CheckResult::new(*state, format!("check {index}"), "detail"));
    }
    case
}

#[test]
fn generated_strings_compare_equal_to_themselves() {
    let mut synthesizer = Synthesizer::with_rng(ChaCha8Rng::seed_from_u64(61));
    let mut result = TestResult::new("String comparison");
    for _ in 0..100 {
        let value = synthesizer.matching("^.{1,30}$").expect("generate");
        let check = are_equal(Some(value.as_str()), Some(value.as_str()), value.clone(), None);
        result.push(
            ComparisonCase::new("Check string comparison is equal.", value.clone(), value)
                .with_check(check),
        );
    }

    let summary = result.summary();
    assert_eq!(result.calculate_result(), State::Passed, "{summary}");
    assert_eq!(summary.passed, 100);
    assert_eq!(summary.total_checks, 100);
}

#[test]
fn any_failed_case_fails_the_result() {
    let mut result = TestResult::new("Mixed");
    result.push(case("good", &[State::Passed, State::Passed]));
    result.push(case("bad", &[State::Passed, State::Failed]));
    assert_eq!(result.calculate_result(), State::Failed);
}

#[test]
fn ignored_cases_do_not_fail_the_result() {
    let mut result = TestResult::new("Ignored");
    result.push(case("good", &[State::Passed]));
    result.push(case("skipped", &[State::Failed]).excluded());
    assert_eq!(result.calculate_result(), State::Passed);
    assert_eq!(result.cases[1].calculate_result(), State::Ignored);
}

#[test]
fn summary_counts_cases_per_state_and_renders_text() {
    let mut result = TestResult::new("Checkout flow");
    result.push(case("one", &[State::Passed, State::Passed]));
    result.push(case("two", &[State::Failed]));
    result.push(case("three", &[State::Passed]).excluded());
    result.push(case("four", &[]));

    let summary = result.summary();
    assert_eq!(
        summary,
        ResultSummary {
            name: "Checkout flow".to_string(),
            passed: 2,
            failed: 1,
            ignored: 1,
            total_cases: 4,
            total_checks: 4,
        }
    );
    assert_eq!(
        summary.to_string(),
        "\nCheckout flow\nSummary:\n TestCases Passed: 2\n TestCases Failed: 1\n TestCases Ignored: 1\n  Total test cases: 4\nTotal number of checks: 4\n"
    );
    assert_eq!(result.to_string(), "Name: Checkout flow");
}

#[test]
fn summary_serializes_to_json() {
    let mut result = TestResult::new("Json");
    result.push(case("one", &[State::Passed]));
    let json = serde_json::to_value(result.summary()).expect("serialize");
    assert_eq!(json["name"], "Json");
    assert_eq!(json["passed"], 1);
    assert_eq!(json["total_checks"], 1);
}

#[test]
fn case_display_reports_its_state() {
    let failing = case("login", &[State::Passed, State::Failed]);
    assert_eq!(
        failing.to_string(),
        "Name: login, Number of checks: 2, State: Failed"
    );
}
