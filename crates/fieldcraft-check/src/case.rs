use std::fmt;

use crate::result::{CheckResult, State};

/// A named group of checks that aggregates to a single state.
pub trait TestCase {
    fn name(&self) -> &str;

    fn checks(&self) -> &[CheckResult];

    /// Excluded cases are reported as `Ignored` whatever their checks say.
    fn include(&self) -> bool;

    fn calculate_result(&self) -> State {
        if !self.include() {
            State::Ignored
        } else if self.checks().iter().any(CheckResult::is_failed) {
            State::Failed
        } else {
            State::Passed
        }
    }
}

/// Test case comparing an actual value with an expected one.
#[derive(Debug, Clone)]
pub struct ComparisonCase<T> {
    pub name: String,
    pub actual: T,
    pub expected: T,
    pub checks: Vec<CheckResult>,
    pub include: bool,
}

impl<T> ComparisonCase<T> {
    pub fn new(name: impl Into<String>, actual: T, expected: T) -> Self {
        Self {
            name: name.into(),
            actual,
            expected,
            checks: Vec::new(),
            include: true,
        }
    }

    pub fn push(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    pub fn with_check(mut self, check: CheckResult) -> Self {
        self.checks.push(check);
        self
    }

    pub fn excluded(mut self) -> Self {
        self.include = false;
        self
    }
}

impl<T> TestCase for ComparisonCase<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    fn include(&self) -> bool {
        self.include
    }
}

impl<T> fmt::Display for ComparisonCase<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Number of checks: {}, State: {}",
            self.name,
            self.checks.len(),
            self.calculate_result()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_without_checks_passes() {
        let case = ComparisonCase::new("empty", 1, 1);
        assert_eq!(case.calculate_result(), State::Passed);
        assert_eq!(case.to_string(), "Name: empty, Number of checks: 0, State: Passed");
    }

    #[test]
    fn excluded_case_is_ignored_even_when_failing() {
        let case = ComparisonCase::new("skip", 1, 2)
            .with_check(CheckResult::new(State::Failed, "cmp", "differs"))
            .excluded();
        assert_eq!(case.calculate_result(), State::Ignored);
    }
}
