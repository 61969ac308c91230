// Test code is allowed to panic on failure
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

//! Property-based tests for webhook-validator.
//!
//! Uses proptest to generate callback chains with random outcomes and checks
//! ordering and short-circuit invariants for every entry point.

#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;

use common::fixtures::{CallLog, test_configmap};
use k8s_openapi::api::core::v1::ConfigMap;
use webhook_validator::webhooks::{
    Context, Error, Mutator, Validator, mutate_fn, validate_create_fn, validate_delete_fn,
    validate_update_fn, with_mutation_fns, with_validate_creation_fns, with_validate_deletion_fns,
    with_validate_update_fns,
};

/// Strategy for a chain of callback outcomes: `true` means the callback fails.
fn chain_outcomes() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..12)
}

/// Error message produced by failing callback `index`.
fn failure(index: usize) -> Error {
    Error::msg(format!("callback {index} failed"))
}

/// Callbacks expected to run, and the error expected back, for `outcomes`.
fn expected(outcomes: &[bool]) -> (Vec<usize>, Option<String>) {
    match outcomes.iter().position(|fails| *fails) {
        Some(first) => (
            (0..=first).collect(),
            Some(failure(first).to_string()),
        ),
        None => ((0..outcomes.len()).collect(), None),
    }
}

fn create_validator(outcomes: &[bool], log: &CallLog) -> Validator<ConfigMap> {
    let fns = outcomes.iter().copied().enumerate().map(|(i, fails)| {
        let log = log.clone();
        validate_create_fn(move |_: &Context, _: &ConfigMap| {
            log.record(i);
            if fails { Err(failure(i)) } else { Ok(()) }
        })
    });
    Validator::new([with_validate_creation_fns(fns)])
}

fn update_validator(outcomes: &[bool], log: &CallLog) -> Validator<ConfigMap> {
    let fns = outcomes.iter().copied().enumerate().map(|(i, fails)| {
        let log = log.clone();
        validate_update_fn(move |_: &Context, _: &ConfigMap, _: &ConfigMap| {
            log.record(i);
            if fails { Err(failure(i)) } else { Ok(()) }
        })
    });
    Validator::new([with_validate_update_fns(fns)])
}

fn delete_validator(outcomes: &[bool], log: &CallLog) -> Validator<ConfigMap> {
    let fns = outcomes.iter().copied().enumerate().map(|(i, fails)| {
        let log = log.clone();
        validate_delete_fn(move |_: &Context, _: &ConfigMap| {
            log.record(i);
            if fails { Err(failure(i)) } else { Ok(()) }
        })
    });
    Validator::new([with_validate_deletion_fns(fns)])
}

proptest! {
    /// Property: CREATE runs callbacks in order up to and including the first
    /// failure, and returns that failure.
    #[test]
    fn test_create_first_error_wins(outcomes in chain_outcomes()) {
        let log = CallLog::new();
        let v = create_validator(&outcomes, &log);

        let result = v.validate_create(&Context::new(), &test_configmap("app"));
        let (calls, err) = expected(&outcomes);

        prop_assert_eq!(log.calls(), calls);
        prop_assert_eq!(result.err().map(|e| e.to_string()), err);
    }

    /// Property: UPDATE follows the same ordering and short-circuit rules.
    #[test]
    fn test_update_first_error_wins(outcomes in chain_outcomes()) {
        let log = CallLog::new();
        let v = update_validator(&outcomes, &log);

        let obj = test_configmap("app");
        let result = v.validate_update(&Context::new(), &obj, &obj);
        let (calls, err) = expected(&outcomes);

        prop_assert_eq!(log.calls(), calls);
        prop_assert_eq!(result.err().map(|e| e.to_string()), err);
    }

    /// Property: DELETE follows the same ordering and short-circuit rules.
    #[test]
    fn test_delete_first_error_wins(outcomes in chain_outcomes()) {
        let log = CallLog::new();
        let v = delete_validator(&outcomes, &log);

        let result = v.validate_delete(&Context::new(), &test_configmap("app"));
        let (calls, err) = expected(&outcomes);

        prop_assert_eq!(log.calls(), calls);
        prop_assert_eq!(result.err().map(|e| e.to_string()), err);
    }

    /// Property: repeated calls see the same registration order every time.
    #[test]
    fn test_order_stable_across_calls(
        outcomes in prop::collection::vec(Just(false), 0..8),
        repeats in 1..4usize
    ) {
        let log = CallLog::new();
        let v = create_validator(&outcomes, &log);

        for _ in 0..repeats {
            v.validate_create(&Context::new(), &test_configmap("app")).unwrap();
        }

        let one_pass: Vec<usize> = (0..outcomes.len()).collect();
        let all_passes: Vec<usize> = one_pass
            .iter()
            .copied()
            .cycle()
            .take(one_pass.len() * repeats)
            .collect();
        prop_assert_eq!(log.calls(), all_passes);
    }

    /// Property: the mutator stops at the first failure and keeps the
    /// mutations applied before it.
    #[test]
    fn test_mutator_first_error_wins(outcomes in chain_outcomes()) {
        let fns = outcomes.iter().copied().enumerate().map(|(i, fails)| {
            mutate_fn(move |_: &Context, cm: &mut ConfigMap| {
                if fails {
                    return Err(failure(i));
                }
                cm.data
                    .get_or_insert_with(Default::default)
                    .insert(format!("step-{i}"), "done".to_string());
                Ok(())
            })
        });
        let m = Mutator::new([with_mutation_fns(fns)]);

        let mut cm = test_configmap("app");
        let result = m.default(&Context::new(), &mut cm);
        let (calls, err) = expected(&outcomes);
        let applied = calls.iter().filter(|i| !outcomes[**i]).count();

        prop_assert_eq!(result.err().map(|e| e.to_string()), err);
        prop_assert_eq!(cm.data.map(|d| d.len()).unwrap_or(0), applied);
    }
}
