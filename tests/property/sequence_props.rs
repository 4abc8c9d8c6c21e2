//! Properties of the checked sequence operations.

use super::common::{non_empty_strategy, seq_strategy};
use proptest::prelude::*;
use vect::{
    drop, head, index, map, maximum, minimum, replicate, sum, tail, take, zip, Axis, Violation,
    ViolationKind,
};

// ============================================================================
// HEAD / TAIL / INDEX
// ============================================================================

proptest! {
    /// Property: head is the first element and tail is one shorter.
    #[test]
    fn prop_head_tail_split(v in non_empty_strategy()) {
        prop_assert_eq!(head(&v).unwrap(), &v[0]);
        let rest = tail(&v).unwrap();
        prop_assert_eq!(rest.len(), v.len() - 1);
        prop_assert_eq!(rest, &v[1..]);
    }

    /// Property: index agrees with slice indexing on [0, len) and is a bounds
    /// violation everywhere else.
    #[test]
    fn prop_index_half_open(v in seq_strategy(), i in 0usize..64) {
        if i < v.len() {
            prop_assert_eq!(index(i, &v).unwrap(), &v[i]);
        } else {
            prop_assert_eq!(
                index(i, &v).unwrap_err(),
                Violation::Bounds { axis: Axis::Position, index: i as i128, len: v.len() }
            );
        }
    }
}

// ============================================================================
// TAKE / DROP
// ============================================================================

proptest! {
    /// Property: for len(v) == n + m, take has length n, drop has length m,
    /// and their concatenation is v.
    #[test]
    fn prop_take_drop_partition(v in seq_strategy(), split in 0usize..=32) {
        let n = split.min(v.len());
        let m = v.len() - n;

        let front = take(n, &v).unwrap();
        let back = drop(n, &v).unwrap();
        prop_assert_eq!(front.len(), n);
        prop_assert_eq!(back.len(), m);

        let rejoined: Vec<i64> = front.iter().chain(back).copied().collect();
        prop_assert_eq!(rejoined, v);
    }

    /// Property: asking for more than len elements is rejected, never clamped.
    #[test]
    fn prop_take_drop_reject_overlong(v in seq_strategy(), extra in 1usize..8) {
        let n = v.len() + extra;
        prop_assert_eq!(take(n, &v).unwrap_err().kind(), ViolationKind::Contract);
        prop_assert_eq!(drop(n, &v).unwrap_err().kind(), ViolationKind::Contract);
    }
}

// ============================================================================
// ZIP / REPLICATE / MAP / SUM
// ============================================================================

proptest! {
    /// Property: zip of equal lengths pairs position by position.
    #[test]
    fn prop_zip_pairs(v1 in seq_strategy()) {
        let v2: Vec<String> = v1.iter().map(|x| x.to_string()).collect();
        let zipped = zip(&v1, &v2).unwrap();
        prop_assert_eq!(zipped.len(), v1.len());
        for (k, (a, b)) in zipped.iter().enumerate() {
            prop_assert_eq!(a, &v1[k]);
            prop_assert_eq!(b, &v2[k]);
        }
    }

    /// Property: zip of unequal lengths is a contract violation.
    #[test]
    fn prop_zip_rejects_unequal(v1 in seq_strategy(), v2 in seq_strategy()) {
        prop_assume!(v1.len() != v2.len());
        prop_assert_eq!(zip(&v1, &v2).unwrap_err().kind(), ViolationKind::Contract);
    }

    /// Property: replicate produces exactly n copies of x.
    #[test]
    fn prop_replicate_exact(n in 0usize..100, x in any::<i64>()) {
        let copies = replicate(n, x);
        prop_assert_eq!(copies.len(), n);
        prop_assert!(copies.iter().all(|&c| c == x));
    }

    /// Property: map preserves length and order.
    #[test]
    fn prop_map_preserves_length(v in seq_strategy()) {
        let negated = map(|x: &i64| -x, &v);
        prop_assert_eq!(negated.len(), v.len());
        for (a, b) in v.iter().zip(&negated) {
            prop_assert_eq!(*b, -a);
        }
    }

    /// Property: sum agrees with iterator sum (zero for empty input).
    #[test]
    fn prop_sum_matches_iter(v in seq_strategy()) {
        prop_assert_eq!(sum(&v), v.iter().sum::<i64>());
    }
}

// ============================================================================
// MINIMUM / MAXIMUM
// ============================================================================

proptest! {
    /// Property: minimum <= every element <= maximum, and both are members.
    #[test]
    fn prop_min_max_bound_the_sequence(v in non_empty_strategy()) {
        let lo = minimum(&v).unwrap();
        let hi = maximum(&v).unwrap();
        prop_assert!(lo <= hi);
        prop_assert!(v.iter().all(|x| lo <= x && x <= hi));
        prop_assert!(v.contains(lo));
        prop_assert!(v.contains(hi));
    }
}

#[test]
fn min_max_reject_empty() {
    let empty: Vec<i64> = Vec::new();
    assert_eq!(minimum(&empty).unwrap_err().kind(), ViolationKind::Contract);
    assert_eq!(maximum(&empty).unwrap_err().kind(), ViolationKind::Contract);
}
