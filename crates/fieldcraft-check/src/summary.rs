use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::case::TestCase;
use crate::result::State;

/// Named collection of test cases.
#[derive(Debug, Clone)]
pub struct TestResult<C> {
    pub name: String,
    pub cases: Vec<C>,
}

impl<C: TestCase> TestResult<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    pub fn push(&mut self, case: C) {
        self.cases.push(case);
    }

    /// `Failed` when any case failed, `Passed` otherwise.
    pub fn calculate_result(&self) -> State {
        if self
            .cases
            .iter()
            .any(|case| case.calculate_result() == State::Failed)
        {
            State::Failed
        } else {
            State::Passed
        }
    }

    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary {
            name: self.name.clone(),
            total_cases: self.cases.len(),
            ..ResultSummary::default()
        };
        for case in &self.cases {
            match case.calculate_result() {
                State::Passed => summary.passed += 1,
                State::Failed => summary.failed += 1,
                State::Ignored => summary.ignored += 1,
            }
            summary.total_checks += case.checks().len();
        }
        debug!(
            name = %summary.name,
            passed = summary.passed,
            failed = summary.failed,
            ignored = summary.ignored,
            "test result summarized"
        );
        summary
    }
}

impl<C> fmt::Display for TestResult<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}", self.name)
    }
}

/// Per-state case counts of a [`TestResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub name: String,
    pub passed: usize,
    pub failed: usize,
    pub ignored: usize,
    pub total_cases: usize,
    pub total_checks: usize,
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.name)?;
        writeln!(f, "Summary:")?;
        writeln!(f, " TestCases {}: {}", State::Passed, self.passed)?;
        writeln!(f, " TestCases {}: {}", State::Failed, self.failed)?;
        writeln!(f, " TestCases {}: {}", State::Ignored, self.ignored)?;
        writeln!(f, "  Total test cases: {}", self.total_cases)?;
        writeln!(f, "Total number of checks: {}", self.total_checks)
    }
}
