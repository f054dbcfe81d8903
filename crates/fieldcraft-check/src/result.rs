use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a single check or an aggregated test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    Passed,
    Failed,
    Ignored,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Passed => "Passed",
            State::Failed => "Failed",
            State::Ignored => "Ignored",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named assertion outcome with its explanatory detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    state: State,
    name: String,
    detail: String,
}

impl CheckResult {
    pub fn new(state: State, name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            state,
            name: name.into(),
            detail: detail.into(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn is_failed(&self) -> bool {
        self.state == State::Failed
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "State: {}, Name: {}, Detail: {}",
            self.state, self.name, self.detail
        )
    }
}
