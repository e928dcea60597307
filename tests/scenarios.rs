//! Fixed-market regression tests.
//!
//! Each scenario pins the exact assignment the engine must produce, then
//! re-checks it with the independent stability audit.

use deferred_acceptance::{
    audit, deferred_acceptance, ErrorKind, Market, MatchError, MatchingEngine, UNASSIGNED,
};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Every school ranks students by index (student 0 first).
fn index_order_rankings(n_schools: usize, n_students: usize) -> Vec<Vec<usize>> {
    (0..n_schools).map(|_| (0..n_students).collect()).collect()
}

fn run_and_audit(market: &Market) -> Vec<i32> {
    let result = MatchingEngine::new().run(market);
    audit(market, &result.assignment).expect("assignment must be stable");
    result.assignment.to_raw()
}

// ============================================================================
// SCENARIOS
// ============================================================================

/// Four students, three single-seat schools; student 3 loses out.
#[test]
fn scenario_a_locked_fixture() {
    let market = Market::new(
        vec![vec![0, 1, 2], vec![1, 0, 2], vec![0, 2, 1], vec![2, 1]],
        vec![vec![2, 1, 3, 0], vec![0, 2, 1, 3], vec![1, 2, 0, 3]],
        vec![1, 1, 1],
    )
    .unwrap();

    let result = MatchingEngine::new().run(&market);

    assert_eq!(result.assignment.to_raw(), vec![1, 2, 0, UNASSIGNED]);
    assert_eq!(result.stats.proposals, 8);
    assert_eq!(result.stats.evictions, 3);
    assert_eq!(result.stats.rejections, 2);
    assert_eq!(audit(&market, &result.assignment), Ok(()));
}

/// A student with no ranked schools is unassigned however schools rank it.
#[test]
fn scenario_b_empty_preference() {
    // Every school ranks student 1 first and has spare seats.
    let rankings = vec![vec![1, 0, 2], vec![1, 2, 0]];
    let market = Market::new(vec![vec![0], vec![], vec![1, 0]], rankings, vec![3, 3]).unwrap();

    let raw = run_and_audit(&market);

    assert_eq!(raw[1], UNASSIGNED);
    assert_eq!(raw, vec![0, UNASSIGNED, 1]);
}

/// A zero-capacity school never appears in the result.
#[test]
fn scenario_c_zero_capacity() {
    // Everyone ranks school 0 first.
    let market = Market::new(
        vec![vec![0, 1], vec![0, 2], vec![0, 1, 2], vec![0]],
        index_order_rankings(3, 4),
        vec![0, 1, 2],
    )
    .unwrap();

    let result = MatchingEngine::new().run(&market);

    assert_eq!(result.assignment.students_at(0).count(), 0);
    assert_eq!(result.assignment.to_raw(), vec![1, 2, 2, UNASSIGNED]);
    assert_eq!(audit(&market, &result.assignment), Ok(()));
}

/// More students than seats leaves at least the overflow unassigned.
#[test]
fn scenario_d_oversubscription() {
    let n_students = 7;
    let capacities = vec![2, 1, 1];
    let seats: usize = capacities.iter().sum();

    let market = Market::new(
        vec![vec![0, 1, 2]; n_students],
        vec![
            vec![6, 5, 4, 3, 2, 1, 0],
            vec![0, 1, 2, 3, 4, 5, 6],
            vec![3, 0, 6, 1, 5, 2, 4],
        ],
        capacities,
    )
    .unwrap();

    let result = MatchingEngine::new().run(&market);

    assert!(result.assignment.unassigned_count() >= n_students - seats);
    // Everyone ranks every school, so every seat fills.
    assert_eq!(result.assignment.assigned_count(), seats);
    assert_eq!(result.assignment.to_raw(), vec![1, UNASSIGNED, UNASSIGNED, 2, UNASSIGNED, 0, 0]);
    assert_eq!(audit(&market, &result.assignment), Ok(()));
}

/// Students who never rank a school can't be placed there even with free seats.
#[test]
fn individual_rationality_with_truncated_lists() {
    let market = Market::new(
        vec![vec![1], vec![1], vec![0]],
        index_order_rankings(2, 3),
        vec![5, 1],
    )
    .unwrap();

    assert_eq!(run_and_audit(&market), vec![1, UNASSIGNED, 0]);
}

#[test]
fn repeated_runs_are_identical() {
    let market = Market::new(
        vec![vec![0, 1, 2], vec![1, 0, 2], vec![0, 2, 1], vec![2, 1]],
        vec![vec![2, 1, 3, 0], vec![0, 2, 1, 3], vec![1, 2, 0, 3]],
        vec![1, 1, 1],
    )
    .unwrap();
    let engine = MatchingEngine::new();

    let first = engine.run(&market);
    for _ in 0..10 {
        let again = engine.run(&market);
        assert_eq!(again, first);
        assert_eq!(again.receipt(), first.receipt());
    }
}

// ============================================================================
// ERROR PATHS
// ============================================================================

#[test]
fn rejects_out_of_range_preference() {
    let err = deferred_acceptance(&[vec![0], vec![1, 3]], &index_order_rankings(2, 2), &[1, 1])
        .unwrap_err();

    assert_eq!(err, MatchError::InvalidPreference { student: 1, school: 3 });
    assert_eq!(err.kind(), ErrorKind::MalformedPreference);
    assert_eq!(err.index(), Some(1));
}

#[test]
fn rejects_ranking_missing_a_student() {
    let err = deferred_acceptance(&[vec![0], vec![0], vec![0]], &[vec![0, 2]], &[1]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedRanking);
    assert_eq!(err.index(), Some(0));
}

#[test]
fn rejects_ranking_with_duplicate() {
    let err = deferred_acceptance(
        &[vec![0], vec![0]],
        &[vec![0, 1], vec![1, 1]],
        &[1, 1],
    )
    .unwrap_err();

    assert_eq!(err, MatchError::RankingDuplicate { school: 1, student: 1 });
}

#[test]
fn rejects_capacity_count_mismatch() {
    let err = deferred_acceptance(&[vec![0]], &[vec![0]], &[1, 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
}
