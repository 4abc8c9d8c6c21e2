// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for vect's checked operations.
//!
//! Property tests sample inputs. These proofs cover every input up to a small
//! bound: every length up to `MAX_LEN`, every count and index that fits in a
//! `u8`, every matrix shape up to `MAX_DIM x MAX_DIM`.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no operation panics on any input, in or out of contract
//! 2. **Length arithmetic**: `len(take n v) == n`, `len(drop n v) == len v - n`
//! 3. **Half-open indexing**: `index i v` succeeds iff `i < len v`
//! 4. **Shape checking**: `Matrix::new` succeeds iff the data is rectangular

/// Longest symbolic sequence.
pub const MAX_LEN: usize = 4;

/// Largest symbolic matrix dimension.
pub const MAX_DIM: usize = 3;

#[cfg(kani)]
mod kani_proofs {
    use super::*;
    use vect::{drop, head, index, take, Matrix, ViolationKind};

    fn any_vec() -> Vec<u8> {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut v = Vec::with_capacity(len);
        for _ in 0..len {
            v.push(kani::any());
        }
        v
    }

    /// take/drop either split v exactly or both reject n > len.
    #[kani::proof]
    #[kani::unwind(6)] // MAX_LEN + 2
    fn verify_take_drop_length_arithmetic() {
        let v = any_vec();
        let n: usize = kani::any::<u8>() as usize;

        match (take(n, &v), drop(n, &v)) {
            (Ok(front), Ok(back)) => {
                kani::assert(n <= v.len(), "accepted n must fit");
                kani::assert(front.len() == n, "take returns exactly n");
                kani::assert(back.len() == v.len() - n, "drop returns len - n");
            }
            (Err(a), Err(b)) => {
                kani::assert(n > v.len(), "rejected n must exceed len");
                kani::assert(
                    a.kind() == ViolationKind::Contract && b.kind() == ViolationKind::Contract,
                    "overlong count is a contract violation",
                );
            }
            _ => kani::assert(false, "take and drop must agree"),
        }
    }

    /// index succeeds exactly on [0, len).
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_index_half_open() {
        let v = any_vec();
        let i: usize = kani::any::<u8>() as usize;

        match index(i, &v) {
            Ok(x) => {
                kani::assert(i < v.len(), "accepted index must be in range");
                kani::assert(*x == v[i], "index returns v[i]");
            }
            Err(e) => {
                kani::assert(i >= v.len(), "rejected index must be out of range");
                kani::assert(e.kind() == ViolationKind::Bounds, "bounds violation");
            }
        }
    }

    /// head succeeds exactly on non-empty input.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_head_non_empty() {
        let v = any_vec();
        kani::assert(head(&v).is_ok() == !v.is_empty(), "head iff non-empty");
    }

    /// Matrix::new accepts exactly rectangular data.
    #[kani::proof]
    #[kani::unwind(5)] // MAX_DIM + 2
    fn verify_matrix_new_checks_shape() {
        let rows: usize = kani::any_where(|&r| r <= MAX_DIM);
        let cols: usize = kani::any_where(|&c| c <= MAX_DIM);
        let data_rows: usize = kani::any_where(|&r| r <= MAX_DIM);

        let mut data = Vec::with_capacity(data_rows);
        let mut rectangular = data_rows == rows;
        for _ in 0..data_rows {
            let width: usize = kani::any_where(|&w| w <= MAX_DIM);
            rectangular &= width == cols;
            data.push(vec![0u8; width]);
        }

        let result = Matrix::new(rows, cols, data);
        kani::assert(result.is_ok() == rectangular, "new iff rectangular");
        if let Err(e) = result {
            kani::assert(e.kind() == ViolationKind::Shape, "shape violation");
        }
    }
}
