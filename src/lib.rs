//! historystack - A shared history of test results
//!
//! historystack accumulates the results of a running test suite and keeps
//! running statistics alongside them, so that "is the suite currently
//! passing?" can be answered without rescanning every result.
//!
//! # Architecture
//!
//! - [`history`]: the [`HistoryStack`] container and its counters
//! - [`shared`]: the lazily created process-wide history
//! - [`outcome`]: the [`Outcome`] trait records implement to be counted
//! - [`record`]: a ready-made [`TestResult`] record type
//! - [`config`]: INI configuration for new histories
//! - [`error`]: Error types and Result alias
//!
//! The history does not decide how a result is classified. It counts what
//! each record reports through [`Outcome`].
//!
//! # Example
//!
//! ```
//! use historystack::{HistoryStack, TestResult};
//!
//! let history = HistoryStack::new();
//! history.append(TestResult::success("test_example::test_passing"));
//! history.append(TestResult::todo("test_example::test_pending", "not done"));
//!
//! assert_eq!(history.test_count(), 2);
//! assert_eq!(history.todo_count(), 1);
//! assert!(history.is_passing());
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod outcome;
pub mod record;
pub mod shared;

pub use config::HistoryConfig;
pub use error::{Error, Result};
pub use history::{Counts, HistoryStack, Summary};
pub use outcome::Outcome;
pub use record::{TestId, TestResult, TestStatus};
pub use shared::{reset_shared, set_shared, shared, SharedHistory, SharedRecord};
