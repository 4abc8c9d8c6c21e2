//! Runtime postcondition checks for the checked operations.
//!
//! Preconditions are reported as [`Violation`](super::Violation)s. Postconditions
//! are different: if one fails, the bug is in this crate, not in the caller. So
//! these are `debug_assert!`s that:
//!
//! 1. Are **zero-cost in release builds**
//! 2. Fail loudly in tests, property tests and fuzzing
//! 3. Mirror the **length-indexed signatures** each operation stands in for
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Every function in this module restates a guarantee the operation promises.
//! Removing or weakening these checks removes the only evidence the promise holds.
//!
//! | Contract Function            | Length-indexed signature                       |
//! |------------------------------|------------------------------------------------|
//! | `check_tail_length`          | `tail : Vect (S n) a -> Vect n a`              |
//! | `check_take_length`          | `take : (n : Nat) -> Vect (n + m) a -> Vect n a` |
//! | `check_drop_length`          | `drop : (n : Nat) -> Vect (n + m) a -> Vect m a` |
//! | `check_length_preserved`     | `zip`, `map : ... -> Vect n a -> Vect n b`     |
//! | `check_replicate_length`     | `replicate : (n : Nat) -> a -> Vect n a`       |
//! | `check_matrix_shape`         | `Matrix r c a`                                 |

/// Check `length(tail(v)) == length(v) - 1`.
#[inline]
pub fn check_tail_length(input_len: usize, output_len: usize) {
    debug_assert_eq!(
        output_len + 1,
        input_len,
        "Contract violation: tail - result length {} != {} - 1",
        output_len,
        input_len
    );
}

/// Check `length(take(n, v)) == n`.
#[inline]
pub fn check_take_length(n: usize, output_len: usize) {
    debug_assert_eq!(
        output_len, n,
        "Contract violation: take - result length {} != n {}",
        output_len, n
    );
}

/// Check `length(drop(n, v)) == length(v) - n`.
#[inline]
pub fn check_drop_length(n: usize, input_len: usize, output_len: usize) {
    debug_assert_eq!(
        output_len + n,
        input_len,
        "Contract violation: drop - result length {} != {} - {}",
        output_len,
        input_len,
        n
    );
}

/// Check that an elementwise operation kept the input length.
#[inline]
pub fn check_length_preserved(operation: &str, input_len: usize, output_len: usize) {
    debug_assert_eq!(
        output_len, input_len,
        "Contract violation: {} - result length {} != input length {}",
        operation, output_len, input_len
    );
}

/// Check `length(replicate(n, x)) == n`.
#[inline]
pub fn check_replicate_length(n: usize, output_len: usize) {
    debug_assert_eq!(
        output_len, n,
        "Contract violation: replicate - produced {} copies, expected {}",
        output_len, n
    );
}

/// Check that nested data really is `rows x cols`.
///
/// Matrices are validated at construction, so this only fires when an
/// operation builds its output data incorrectly.
#[inline]
pub fn check_matrix_shape<T>(rows: usize, cols: usize, data: &[Vec<T>]) {
    debug_assert_eq!(
        data.len(),
        rows,
        "Contract violation: Matrix - data has {} rows, expected {}",
        data.len(),
        rows
    );
    for (i, row) in data.iter().enumerate() {
        debug_assert_eq!(
            row.len(),
            cols,
            "Contract violation: Matrix - row {} has {} cols, expected {}",
            i,
            row.len(),
            cols
        );
    }
}
