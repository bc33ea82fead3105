//! The result history and its running counters
//!
//! A [`HistoryStack`] keeps every appended record in insertion order and
//! maintains five counters alongside them. The counters are updated as part
//! of each append, so questions such as "is the suite passing?" are answered
//! without rescanning the records.
//!
//! # Examples
//!
//! ```
//! use historystack::{HistoryStack, TestResult};
//!
//! let history = HistoryStack::new();
//! history.append(TestResult::success("test_a"));
//! history.extend([
//!     TestResult::failure("test_b", "assertion failed"),
//!     TestResult::skip("test_c"),
//! ]);
//!
//! assert_eq!(history.test_count(), 3);
//! assert_eq!(history.fail_count(), 1);
//! assert!(!history.is_passing());
//! assert_eq!(history.summary().collect::<Vec<_>>(), vec![true, false, true]);
//! ```

use crate::config::HistoryConfig;
use crate::outcome::Outcome;
use crate::record::{TestId, TestResult};
use std::ops::AddAssign;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

/// Snapshot of the five running counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Counts {
    /// Number of records appended.
    pub tests: usize,
    /// Records that reported a pass.
    pub passes: usize,
    /// Records that reported a failure.
    pub failures: usize,
    /// Records that reported a todo.
    pub todos: usize,
    /// Records that reported a skip.
    pub skips: usize,
}

impl Counts {
    /// The contribution of a single record.
    pub fn of<R: Outcome + ?Sized>(record: &R) -> Self {
        Counts {
            tests: 1,
            passes: usize::from(record.is_pass()),
            failures: usize::from(record.is_fail()),
            todos: usize::from(record.is_todo()),
            skips: usize::from(record.is_skip()),
        }
    }

    /// Adds two sets of counters, clamping each at `usize::MAX`.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Counts {
            tests: self.tests.saturating_add(rhs.tests),
            passes: self.passes.saturating_add(rhs.passes),
            failures: self.failures.saturating_add(rhs.failures),
            todos: self.todos.saturating_add(rhs.todos),
            skips: self.skips.saturating_add(rhs.skips),
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

#[derive(Debug)]
struct Inner<R> {
    records: Vec<R>,
    counts: Counts,
}

/// An append-only history of test results with running statistics.
///
/// Records and counters share one lock: an append is applied as a unit, and
/// readers never see a record without its counter contributions (or the
/// reverse).
///
/// `test_count` tracks appends seen, not the current number of records.
/// The two only diverge if the record list is edited through
/// [`with_records_mut`](Self::with_records_mut).
#[derive(Debug)]
pub struct HistoryStack<R = TestResult> {
    inner: RwLock<Inner<R>>,
}

impl<R> Default for HistoryStack<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> HistoryStack<R> {
    /// Creates an empty history with all counters at zero.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty history with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        HistoryStack {
            inner: RwLock::new(Inner {
                records: Vec::with_capacity(capacity),
                counts: Counts::default(),
            }),
        }
    }

    /// Creates an empty history sized according to `config`.
    pub fn with_config(config: &HistoryConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    // Counter arithmetic saturates and is done before any field is written,
    // so a poisoned lock still holds consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Inner<R>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<R>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of records currently stored.
    pub fn result_count(&self) -> usize {
        self.read().records.len()
    }

    /// Returns true if at least one record is stored.
    pub fn has_results(&self) -> bool {
        self.result_count() > 0
    }

    /// All five counters, read together.
    pub fn counts(&self) -> Counts {
        self.read().counts
    }

    /// Number of records appended.
    pub fn test_count(&self) -> usize {
        self.counts().tests
    }

    /// Number of passes counted.
    pub fn pass_count(&self) -> usize {
        self.counts().passes
    }

    /// Number of failures counted.
    pub fn fail_count(&self) -> usize {
        self.counts().failures
    }

    /// Number of todos counted.
    pub fn todo_count(&self) -> usize {
        self.counts().todos
    }

    /// Number of skips counted.
    pub fn skip_count(&self) -> usize {
        self.counts().skips
    }

    /// Returns true if no failure has been counted.
    ///
    /// This only looks at the failure counter. If the counter was overridden
    /// with [`set_fail_count`](Self::set_fail_count), the override wins over
    /// whatever the records say.
    pub fn is_passing(&self) -> bool {
        self.fail_count() == 0
    }

    /// Overrides all counters at once.
    ///
    /// Counters set this way are not reconciled with the stored records.
    pub fn set_counts(&self, counts: Counts) {
        let mut inner = self.write();
        log::warn!(
            "history counters overridden: {:?} -> {:?}",
            inner.counts,
            counts
        );
        inner.counts = counts;
    }

    /// Overrides the test counter.
    pub fn set_test_count(&self, value: usize) {
        self.update_counts(|counts| counts.tests = value);
    }

    /// Overrides the pass counter.
    pub fn set_pass_count(&self, value: usize) {
        self.update_counts(|counts| counts.passes = value);
    }

    /// Overrides the fail counter.
    pub fn set_fail_count(&self, value: usize) {
        self.update_counts(|counts| counts.failures = value);
    }

    /// Overrides the todo counter.
    pub fn set_todo_count(&self, value: usize) {
        self.update_counts(|counts| counts.todos = value);
    }

    /// Overrides the skip counter.
    pub fn set_skip_count(&self, value: usize) {
        self.update_counts(|counts| counts.skips = value);
    }

    fn update_counts(&self, f: impl FnOnce(&mut Counts)) {
        let mut inner = self.write();
        let before = inner.counts;
        f(&mut inner.counts);
        log::warn!(
            "history counters overridden: {:?} -> {:?}",
            before,
            inner.counts
        );
    }

    /// Gives direct access to the stored records.
    ///
    /// Nothing here touches the counters. Removing records makes
    /// [`result_count`](Self::result_count) fall below
    /// [`test_count`](Self::test_count), and keeping the two in step is the
    /// caller's responsibility.
    pub fn with_records_mut<T>(&self, f: impl FnOnce(&mut Vec<R>) -> T) -> T {
        let mut inner = self.write();
        let out = f(&mut inner.records);
        if inner.records.len() != inner.counts.tests {
            log::warn!(
                "history holds {} records but has counted {} tests",
                inner.records.len(),
                inner.counts.tests
            );
        }
        out
    }
}

impl<R: Outcome> HistoryStack<R> {
    /// Appends one record.
    pub fn append(&self, record: R) {
        self.append_all(vec![record]);
    }

    /// Appends one record. Same as [`append`](Self::append).
    pub fn push(&self, record: R) {
        self.append_all(vec![record]);
    }

    /// Appends records in the order given.
    pub fn extend<I: IntoIterator<Item = R>>(&self, records: I) {
        self.append_all(records.into_iter().collect());
    }

    fn append_all(&self, records: Vec<R>) {
        if records.is_empty() {
            return;
        }

        let mut delta = Counts::default();
        for record in &records {
            delta += Counts::of(record);
        }

        let mut inner = self.write();
        let counts = inner.counts.saturating_add(delta);
        inner.records.extend(records);
        inner.counts = counts;
        log::debug!(
            "appended {} result(s) ({} failing), {} tests seen",
            delta.tests,
            delta.failures,
            inner.counts.tests
        );
    }

    /// One entry per stored record, true where the record is not a failure.
    ///
    /// The entries are computed from the records each time this is called.
    pub fn summary(&self) -> Summary {
        let flags: Vec<bool> = self.read().records.iter().map(|r| !r.is_fail()).collect();
        Summary {
            inner: flags.into_iter(),
        }
    }
}

impl<R: Clone> HistoryStack<R> {
    /// A snapshot of the stored records in insertion order.
    pub fn results(&self) -> Vec<R> {
        self.read().records.clone()
    }
}

impl<R: Outcome> FromIterator<R> for HistoryStack<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let history = HistoryStack::new();
        history.extend(iter);
        history
    }
}

impl HistoryStack<TestResult> {
    /// Ids of the failing results, in the order they were appended.
    pub fn failing_tests(&self) -> Vec<TestId> {
        self.read()
            .records
            .iter()
            .filter(|r| r.is_fail())
            .map(|r| r.test_id.clone())
            .collect()
    }

    /// Total duration of all results with timing information
    pub fn total_duration(&self) -> Option<Duration> {
        let inner = self.read();
        let mut durations = inner.records.iter().filter_map(|r| r.duration).peekable();
        durations.peek()?;
        Some(durations.sum())
    }

    /// Count failures carrying any of the given tags
    ///
    /// Unlike [`fail_count`](Self::fail_count) this scans the stored records.
    /// An empty filter matches every record.
    pub fn count_tagged_failures(&self, filter_tags: &[String]) -> usize {
        self.read()
            .records
            .iter()
            .filter(|r| r.matches_tags(filter_tags) && r.is_fail())
            .count()
    }
}

/// Pass/fail projection of a history, produced by [`HistoryStack::summary`].
#[derive(Debug, Clone)]
pub struct Summary {
    inner: std::vec::IntoIter<bool>,
}

impl Iterator for Summary {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Summary {
    fn next_back(&mut self) -> Option<bool> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Summary {}
