//! Assertion outcomes as data, and their aggregation into summaries.

pub mod case;
pub mod check;
pub mod result;
pub mod summary;

pub use case::{ComparisonCase, TestCase};
pub use result::{CheckResult, State};
pub use summary::{ResultSummary, TestResult};
