// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked operations over fixed-length sequences.
//!
//! Each function takes a borrowed slice and either returns a value satisfying its
//! guarantee or a [`Violation`]. Nothing is truncated, wrapped or clamped: asking
//! for five elements of a four-element slice is an error, not four elements.
//!
//! Parameter order follows the length-indexed signatures (count or index first,
//! sequence last), so `take(3, &v)` reads as `take 3 v`.
//!
//! | Function    | Precondition            | Guarantee                        |
//! |-------------|-------------------------|----------------------------------|
//! | `head`      | `len >= 1`              | `v[0]`                           |
//! | `tail`      | `len >= 1`              | `len(result) == len - 1`         |
//! | `index`     | `i < len`               | `v[i]`                           |
//! | `take`      | `n <= len`              | `len(result) == n`               |
//! | `drop`      | `n <= len`              | `len(result) == len - n`         |
//! | `zip`       | `len(a) == len(b)`      | `len(result) == len(a)`          |
//! | `replicate` | none                    | `len(result) == n`               |
//! | `map`       | none                    | `len(result) == len`             |
//! | `sum`       | none                    | zero for empty input             |
//! | `minimum`   | `len >= 1`              | least element                    |
//! | `maximum`   | `len >= 1`              | greatest element                 |

use num_traits::Zero;

use crate::verify::contracts::{
    check_drop_length, check_length_preserved, check_replicate_length, check_tail_length,
    check_take_length,
};
use crate::verify::{Axis, Result, Violation};

fn require_non_empty<T>(operation: &'static str, v: &[T]) -> Result<()> {
    if v.is_empty() {
        return Err(Violation::contract(
            operation,
            "requires non-empty sequence (len >= 1)",
        ));
    }
    Ok(())
}

/// First element of a non-empty sequence.
pub fn head<T>(v: &[T]) -> Result<&T> {
    require_non_empty("head", v)?;
    Ok(&v[0])
}

/// All but the first element of a non-empty sequence.
pub fn tail<T>(v: &[T]) -> Result<&[T]> {
    require_non_empty("tail", v)?;
    let rest = &v[1..];
    check_tail_length(v.len(), rest.len());
    Ok(rest)
}

/// Element at position `i`, where `i < v.len()`.
pub fn index<T>(i: usize, v: &[T]) -> Result<&T> {
    v.get(i)
        .ok_or_else(|| Violation::out_of_bounds(Axis::Position, i, v.len()))
}

/// Exactly the first `n` elements.
pub fn take<T>(n: usize, v: &[T]) -> Result<&[T]> {
    if v.len() < n {
        return Err(Violation::contract(
            "take",
            format!(
                "sequence too short: len={}, need at least {}",
                v.len(),
                n
            ),
        ));
    }
    let prefix = &v[..n];
    check_take_length(n, prefix.len());
    Ok(prefix)
}

/// Everything after the first `n` elements.
pub fn drop<T>(n: usize, v: &[T]) -> Result<&[T]> {
    if v.len() < n {
        return Err(Violation::contract(
            "drop",
            format!(
                "requires n <= len: cannot drop {} elements from sequence of length {}",
                n,
                v.len()
            ),
        ));
    }
    let suffix = &v[n..];
    check_drop_length(n, v.len(), suffix.len());
    Ok(suffix)
}

/// Pair up two sequences of the same length.
pub fn zip<A: Clone, B: Clone>(v1: &[A], v2: &[B]) -> Result<Vec<(A, B)>> {
    if v1.len() != v2.len() {
        return Err(Violation::contract(
            "zip",
            format!(
                "sequences must have same length: {} != {}",
                v1.len(),
                v2.len()
            ),
        ));
    }
    let pairs: Vec<(A, B)> = v1.iter().cloned().zip(v2.iter().cloned()).collect();
    check_length_preserved("zip", v1.len(), pairs.len());
    Ok(pairs)
}

/// `n` copies of `x`.
///
/// `n` is a `usize`, so there is nothing to reject here.
pub fn replicate<T: Clone>(n: usize, x: T) -> Vec<T> {
    let copies = vec![x; n];
    check_replicate_length(n, copies.len());
    copies
}

/// Apply `f` to each element, preserving order and length.
pub fn map<A, B, F>(f: F, v: &[A]) -> Vec<B>
where
    F: FnMut(&A) -> B,
{
    let mapped: Vec<B> = v.iter().map(f).collect();
    check_length_preserved("map", v.len(), mapped.len());
    mapped
}

/// Sum of all elements; `T::zero()` for an empty sequence.
pub fn sum<T: Zero + Clone>(v: &[T]) -> T {
    v.iter().cloned().fold(T::zero(), |acc, x| acc + x)
}

/// Least element of a non-empty sequence. Ties return the first occurrence.
pub fn minimum<T: Ord>(v: &[T]) -> Result<&T> {
    require_non_empty("minimum", v)?;
    let mut best = &v[0];
    for x in &v[1..] {
        if x < best {
            best = x;
        }
    }
    Ok(best)
}

/// Greatest element of a non-empty sequence. Ties return the first occurrence.
pub fn maximum<T: Ord>(v: &[T]) -> Result<&T> {
    require_non_empty("maximum", v)?;
    let mut best = &v[0];
    for x in &v[1..] {
        if x > best {
            best = x;
        }
    }
    Ok(best)
}
