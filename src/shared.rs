//! The process-wide history
//!
//! Code that does not create its own [`HistoryStack`] reports into the shared
//! one. It is built lazily on first access and can be swapped out, which is
//! how test harnesses isolate one run from the next.
//!
//! ```
//! use historystack::shared;
//! use historystack::TestResult;
//! use std::sync::Arc;
//!
//! let previous = shared::reset_shared();
//! shared::shared().append(Arc::new(TestResult::success("test_a")));
//! assert_eq!(shared::shared().test_count(), 1);
//! shared::set_shared(previous);
//! ```

use crate::history::HistoryStack;
use crate::outcome::Outcome;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Record type held by the shared history.
pub type SharedRecord = Arc<dyn Outcome + Send + Sync>;

/// The shared history type.
pub type SharedHistory = HistoryStack<SharedRecord>;

static SHARED: OnceLock<RwLock<Arc<SharedHistory>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<SharedHistory>> {
    SHARED.get_or_init(|| {
        log::debug!("creating shared result history");
        RwLock::new(Arc::new(HistoryStack::new()))
    })
}

/// Returns the shared history, creating it on first use.
///
/// Every call returns the same instance until [`set_shared`] replaces it.
pub fn shared() -> Arc<SharedHistory> {
    let guard = slot().read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Replaces the shared history and returns the one it displaced.
///
/// Holders of the previous instance keep using it; nothing is migrated.
/// Callers should stop reporting into the old history before swapping.
pub fn set_shared(history: Arc<SharedHistory>) -> Arc<SharedHistory> {
    let mut guard = slot().write().unwrap_or_else(PoisonError::into_inner);
    log::debug!(
        "replacing shared result history ({} tests seen)",
        guard.test_count()
    );
    std::mem::replace(&mut *guard, history)
}

/// Installs a fresh, empty shared history and returns the previous one.
pub fn reset_shared() -> Arc<SharedHistory> {
    set_shared(Arc::new(HistoryStack::new()))
}
