//! Ready-made test result records

use crate::error::{Error, Result};
use crate::outcome::Outcome;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Identifier of a test, as reported by the runner
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestId(String);

impl TestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for TestId {
    fn from(id: &'a str) -> Self {
        TestId(id.to_owned())
    }
}

impl From<String> for TestId {
    fn from(id: String) -> Self {
        TestId(id)
    }
}

/// Status of a test execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    /// Test passed successfully.
    Success,
    /// Test failed with an assertion or expectation error.
    Failure,
    /// Test encountered an unexpected error during execution.
    Error,
    /// Test was skipped or disabled.
    Skip,
    /// Test is marked as not yet expected to work.
    Todo,
    /// Test failed as expected (marked as expected to fail).
    ExpectedFailure,
    /// Test passed but was marked as expected to fail.
    UnexpectedSuccess,
}

impl Outcome for TestStatus {
    fn is_pass(&self) -> bool {
        matches!(self, TestStatus::Success)
    }

    /// Failures include: Failure, Error, and UnexpectedSuccess.
    fn is_fail(&self) -> bool {
        matches!(
            self,
            TestStatus::Failure | TestStatus::Error | TestStatus::UnexpectedSuccess
        )
    }

    /// An expected failure is an outstanding todo, not a failure.
    fn is_todo(&self) -> bool {
        matches!(self, TestStatus::Todo | TestStatus::ExpectedFailure)
    }

    fn is_skip(&self) -> bool {
        matches!(self, TestStatus::Skip)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Success => write!(f, "success"),
            TestStatus::Failure => write!(f, "failure"),
            TestStatus::Error => write!(f, "error"),
            TestStatus::Skip => write!(f, "skip"),
            TestStatus::Todo => write!(f, "todo"),
            TestStatus::ExpectedFailure => write!(f, "xfail"),
            TestStatus::UnexpectedSuccess => write!(f, "uxsuccess"),
        }
    }
}

impl FromStr for TestStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" | "pass" | "ok" => Ok(TestStatus::Success),
            "failure" | "fail" => Ok(TestStatus::Failure),
            "error" => Ok(TestStatus::Error),
            "skip" | "skipped" => Ok(TestStatus::Skip),
            "todo" => Ok(TestStatus::Todo),
            "xfail" => Ok(TestStatus::ExpectedFailure),
            "uxsuccess" => Ok(TestStatus::UnexpectedSuccess),
            other => Err(Error::Parse(format!("unknown test status '{}'", other))),
        }
    }
}

/// Result of a single test execution.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Unique identifier for the test.
    pub test_id: TestId,
    /// Execution status (success, failure, error, etc.).
    pub status: TestStatus,
    /// Time taken to execute the test, if available.
    pub duration: Option<Duration>,
    /// Brief message describing the result (e.g., error message).
    pub message: Option<String>,
    /// Tags associated with this test result.
    pub tags: Vec<String>,
}

impl TestResult {
    /// Create a result with the given status and no further details
    pub fn new(test_id: impl Into<TestId>, status: TestStatus) -> Self {
        TestResult {
            test_id: test_id.into(),
            status,
            duration: None,
            message: None,
            tags: vec![],
        }
    }

    /// Create a successful test result
    pub fn success(test_id: impl Into<TestId>) -> Self {
        Self::new(test_id, TestStatus::Success)
    }

    /// Create a failed test result
    pub fn failure(test_id: impl Into<TestId>, message: impl Into<String>) -> Self {
        TestResult {
            message: Some(message.into()),
            ..Self::new(test_id, TestStatus::Failure)
        }
    }

    /// Create an error test result
    pub fn error(test_id: impl Into<TestId>, message: impl Into<String>) -> Self {
        TestResult {
            message: Some(message.into()),
            ..Self::new(test_id, TestStatus::Error)
        }
    }

    /// Create a skipped test result
    pub fn skip(test_id: impl Into<TestId>) -> Self {
        Self::new(test_id, TestStatus::Skip)
    }

    /// Create a todo test result
    pub fn todo(test_id: impl Into<TestId>, reason: impl Into<String>) -> Self {
        TestResult {
            message: Some(reason.into()),
            ..Self::new(test_id, TestStatus::Todo)
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Returns true if the result carries any of `filter_tags`, or if the
    /// filter is empty.
    pub fn matches_tags(&self, filter_tags: &[String]) -> bool {
        filter_tags.is_empty() || self.tags.iter().any(|tag| filter_tags.contains(tag))
    }
}

impl Outcome for TestResult {
    fn is_pass(&self) -> bool {
        self.status.is_pass()
    }

    fn is_fail(&self) -> bool {
        self.status.is_fail()
    }

    fn is_todo(&self) -> bool {
        self.status.is_todo()
    }

    fn is_skip(&self) -> bool {
        self.status.is_skip()
    }
}
