//! The structural non-empty wrapper.

use super::common::{assert_violation, SAMPLE, UNSORTED};
use vect::{from_sequence, head, to_sequence, NonEmpty, ViolationKind};

#[test]
fn from_sequence_keeps_order() {
    let w = from_sequence(&SAMPLE).unwrap();
    assert_eq!(w.head(), &1);
    assert_eq!(w.tail(), &[2, 3, 4, 5]);
    assert_eq!(w.len(), SAMPLE.len());
    assert_eq!(to_sequence(&w), SAMPLE.to_vec());
}

#[test]
fn from_sequence_rejects_empty() {
    assert_violation(from_sequence::<i64>(&[]), ViolationKind::Contract, "non-empty");
}

#[test]
fn wrapper_head_matches_checked_head() {
    let w = NonEmpty::try_from(UNSORTED.to_vec()).unwrap();
    assert_eq!(Some(w.head()), head(&UNSORTED).ok());
    assert_eq!(w.minimum(), &5);
    assert_eq!(w.maximum(), &93);
}

#[test]
fn length_is_at_least_one() {
    assert_eq!(NonEmpty::singleton(()).len(), 1);
    assert_eq!(NonEmpty::new(0, vec![0; 9]).len(), 10);
}
