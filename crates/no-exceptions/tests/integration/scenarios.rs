//! Capture scenarios over the built-in fault taxonomy.

use std::collections::{BTreeSet, HashMap, HashSet};

use no_exceptions::{Fault, FaultKind, Outcome, ops, try_expecting};

#[test]
fn test_division_by_zero_is_caught() {
    let outcome = try_expecting(|| ops::divide(10.0, 0.0), FaultKind::ZeroDivision).unwrap();
    assert!(outcome.is_failure());
    assert_eq!(outcome.into_failure(), Some(Fault::ZeroDivision));
}

#[test]
fn test_division_succeeds() {
    let outcome = try_expecting(|| ops::divide(10.0, 2.0), FaultKind::ZeroDivision).unwrap();
    assert!(outcome.is_success());
    assert_eq!(outcome.unwrap(), 5.0);
}

#[test]
fn test_division_by_zero_falls_back_to_default() {
    let value = try_expecting(|| ops::divide(10.0, 0.0), FaultKind::ZeroDivision)
        .unwrap()
        .unwrap_or(0.0);
    assert_eq!(value, 0.0);
}

#[test]
fn test_missing_key_is_caught() {
    let empty: HashMap<&str, i32> = HashMap::new();
    let outcome = try_expecting(|| ops::lookup(&empty, "missing").copied(), FaultKind::Key).unwrap();
    assert!(outcome.is_failure());
}

#[test]
fn test_missing_key_with_wrong_category_propagates() {
    let empty: HashMap<&str, i32> = HashMap::new();
    let result = try_expecting(|| ops::lookup(&empty, "missing").copied(), FaultKind::Index);
    let err = result.expect_err("index expectation must not catch a key fault");
    assert_eq!(err, Fault::key("missing"));
}

#[test]
fn test_chained_map_on_failure_uses_default() {
    let value = try_expecting(|| ops::divide(10.0, 0.0), FaultKind::ZeroDivision)
        .unwrap()
        .map(|x| x * 2.0)
        .unwrap_or(-1.0);
    assert_eq!(value, -1.0);
}

#[test]
fn test_chained_map_on_success() {
    let value = try_expecting(|| ops::divide(10.0, 4.0), FaultKind::ZeroDivision)
        .unwrap()
        .map(|x| x * 2.0)
        .unwrap_or(-1.0);
    assert_eq!(value, 5.0);
}

#[test]
fn test_question_mark_forwards_unexpected_conditions() {
    fn first_port(ports: &[&str]) -> no_exceptions::Result<Outcome<u16, Fault>> {
        try_expecting(
            || {
                let raw = ops::index(ports, 0)?;
                ops::parse::<u16>(raw)
            },
            FaultKind::Value,
        )
    }

    assert_eq!(first_port(&["8080"]).unwrap(), Outcome::Success(8080));
    assert!(first_port(&["http"]).unwrap().is_failure());
    assert_eq!(first_port(&[]), Err(Fault::Index { index: 0, len: 0 }));
}

#[test]
fn test_every_collection_form_is_accepted() {
    let raise = || ops::next(&mut std::iter::empty::<i32>());

    assert!(try_expecting(raise, FaultKind::Exhausted).unwrap().is_failure());
    assert!(try_expecting(raise, [FaultKind::Key, FaultKind::Exhausted]).unwrap().is_failure());
    assert!(try_expecting(raise, &[FaultKind::Exhausted][..]).unwrap().is_failure());
    assert!(try_expecting(raise, &[FaultKind::Key, FaultKind::Exhausted]).unwrap().is_failure());
    assert!(try_expecting(raise, vec![FaultKind::Any]).unwrap().is_failure());
    let members = vec![FaultKind::Exhausted];
    assert!(try_expecting(raise, &members).unwrap().is_failure());
    assert!(try_expecting(raise, (FaultKind::Value, FaultKind::Exhausted)).unwrap().is_failure());

    let hashed: HashSet<_> = [FaultKind::Exhausted].into_iter().collect();
    assert!(try_expecting(raise, &hashed).unwrap().is_failure());

    let ordered: BTreeSet<_> = [FaultKind::Lookup].into_iter().collect();
    assert_eq!(try_expecting(raise, ordered), Err(Fault::Exhausted));
}

#[test]
fn test_family_expectation_catches_descendants() {
    let items = [1, 2, 3];
    let by_index = try_expecting(|| ops::index(&items, 9).copied(), FaultKind::Lookup).unwrap();
    assert_eq!(by_index, Outcome::Failure(Fault::Index { index: 9, len: 3 }));

    let overflow = try_expecting(|| ops::divide(i64::MIN, -1), FaultKind::Arithmetic).unwrap();
    assert_eq!(overflow, Outcome::Failure(Fault::Overflow { operation: "divide" }));
}

#[test]
fn test_recovery_pipeline() {
    let config: HashMap<&str, &str> = [("workers", "4"), ("timeout", "soon")].into_iter().collect();

    let setting = |name: &str| {
        try_expecting(
            || ops::lookup(&config, name).and_then(|raw| ops::parse::<u32>(raw)),
            [FaultKind::Key, FaultKind::Value],
        )
        .unwrap()
    };

    assert_eq!(setting("workers").unwrap_or(1), 4);
    assert_eq!(setting("timeout").unwrap_or(30), 30);
    assert_eq!(
        setting("retries")
            .map_failure(|fault| fault.kind())
            .into_failure(),
        Some(FaultKind::Key)
    );
    assert_eq!(
        setting("workers")
            .and_then(|n| Outcome::from(ops::divide(100, n)))
            .unwrap(),
        25
    );
}

#[test]
fn test_returned_condition_is_a_success() {
    let outcome = try_expecting(|| Ok::<Fault, Fault>(Fault::Exhausted), FaultKind::Any);
    assert_eq!(outcome, Ok(Outcome::Success(Fault::Exhausted)));
}
