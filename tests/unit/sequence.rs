//! Checked sequence operations: worked examples and rejected inputs.

use super::common::{assert_violation, LETTERS, SAMPLE, UNSORTED};
use vect::{
    drop, head, index, map, maximum, minimum, natural, position, replicate, sum, tail, take, zip,
    Axis, Violation, ViolationKind,
};

#[test]
fn worked_example_sequence_results() {
    assert_eq!(head(&SAMPLE), Ok(&1));
    assert_eq!(index(0, &SAMPLE), Ok(&1));
    assert_eq!(index(2, &SAMPLE), Ok(&3));
    assert_eq!(take(3, &SAMPLE).unwrap(), &[1, 2, 3]);
    assert_eq!(drop(2, &SAMPLE).unwrap(), &[3, 4, 5]);
    assert_eq!(
        zip(&SAMPLE, &LETTERS).unwrap(),
        vec![(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd'), (5, 'e')]
    );
    assert_eq!(minimum(&UNSORTED), Ok(&5));
    assert_eq!(maximum(&UNSORTED), Ok(&93));
}

#[test]
fn empty_input_is_a_contract_violation() {
    let empty: [i64; 0] = [];
    assert_violation(head(&empty), ViolationKind::Contract, "non-empty");
    assert_violation(tail(&empty), ViolationKind::Contract, "non-empty");
    assert_violation(minimum(&empty), ViolationKind::Contract, "non-empty");
    assert_violation(maximum(&empty), ViolationKind::Contract, "non-empty");
}

#[test]
fn index_past_end_is_a_bounds_violation() {
    assert_violation(index(3, &[1, 2, 3]), ViolationKind::Bounds, "out of bounds");
    assert_violation(index(0, &[] as &[i32]), ViolationKind::Bounds, "[0, 0)");
}

#[test]
fn negative_index_from_untyped_input_is_a_bounds_violation() {
    let v = [1, 2, 3];
    let err = position(Axis::Position, -1, v.len()).unwrap_err();
    assert!(matches!(err, Violation::Bounds { index: -1, len: 3, .. }));

    let i = position(Axis::Position, 1, v.len()).unwrap();
    assert_eq!(index(i, &v), Ok(&2));
}

#[test]
fn fractional_count_is_not_truncated() {
    assert_violation(natural("take", 2.5), ViolationKind::Contract, "integer");
    assert_violation(natural("drop", -3.0), ViolationKind::Contract, "non-negative");
    let n = natural("take", 2.0).unwrap();
    assert_eq!(take(n, &SAMPLE).unwrap(), &[1, 2]);
}

#[test]
fn take_and_drop_never_clamp() {
    assert_violation(take(6, &SAMPLE), ViolationKind::Contract, "need at least 6");
    assert_violation(drop(6, &SAMPLE), ViolationKind::Contract, "length 5");
}

#[test]
fn zip_requires_equal_lengths() {
    assert_violation(zip(&[1, 2, 3], &[1, 2]), ViolationKind::Contract, "same length");
}

#[test]
fn replicate_map_sum() {
    assert_eq!(replicate(4, 'z'), vec!['z'; 4]);
    assert_eq!(map(|x| x % 2 == 0, &SAMPLE), vec![false, true, false, true, false]);
    assert_eq!(sum(&SAMPLE), 15);
    assert_eq!(sum::<i64>(&[]), 0);
}
