//! Property-based tests for the running counters.
//!
//! These tests use proptest to check that the counters always agree with
//! the records appended, whatever mix and batching of results is used.

use historystack::{Counts, HistoryStack, Outcome};
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
struct Flags {
    pass: bool,
    fail: bool,
    todo: bool,
    skip: bool,
}

impl Outcome for Flags {
    fn is_pass(&self) -> bool {
        self.pass
    }

    fn is_fail(&self) -> bool {
        self.fail
    }

    fn is_todo(&self) -> bool {
        self.todo
    }

    fn is_skip(&self) -> bool {
        self.skip
    }
}

prop_compose! {
    fn arbitrary_flags()(pass in any::<bool>(), fail in any::<bool>(),
                         todo in any::<bool>(), skip in any::<bool>()) -> Flags {
        Flags { pass, fail, todo, skip }
    }
}

fn batches() -> impl Strategy<Value = Vec<Vec<Flags>>> {
    prop::collection::vec(prop::collection::vec(arbitrary_flags(), 0..6), 0..12)
}

proptest! {
    #[test]
    fn each_append_adds_its_contribution(batches in batches()) {
        let history = HistoryStack::new();
        for batch in batches {
            let before = history.counts();
            let mut expected = before;
            for record in &batch {
                expected += Counts::of(record);
            }

            history.extend(batch.clone());

            let after = history.counts();
            prop_assert_eq!(after.tests, before.tests + batch.len());
            prop_assert_eq!(after, expected);
        }
    }

    #[test]
    fn passing_iff_no_failure_appended(records in prop::collection::vec(arbitrary_flags(), 0..40)) {
        let history = HistoryStack::new();
        for record in &records {
            history.append(*record);
        }
        prop_assert_eq!(history.is_passing(), !records.iter().any(|r| r.fail));
    }

    #[test]
    fn summary_mirrors_records(records in prop::collection::vec(arbitrary_flags(), 0..40)) {
        let history: HistoryStack<Flags> = records.iter().copied().collect();

        let summary: Vec<bool> = history.summary().collect();
        let expected: Vec<bool> = records.iter().map(|r| !r.fail).collect();
        prop_assert_eq!(summary, expected);
        prop_assert_eq!(history.result_count(), history.results().len());
        prop_assert_eq!(history.result_count(), records.len());
    }

    #[test]
    fn instances_do_not_share_state(records in prop::collection::vec(arbitrary_flags(), 1..20)) {
        let a = HistoryStack::new();
        let b: HistoryStack<Flags> = HistoryStack::new();
        a.extend(records.clone());

        prop_assert_eq!(b.counts(), Counts::default());
        prop_assert!(!b.has_results());
        prop_assert_eq!(a.test_count(), records.len());
    }
}
