//! Fixtures shared across unit tests, integration tests, benches and the demo.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical worked-example data so every consumer agrees on it.

#![doc(hidden)]

use crate::matrix::Matrix;

/// `[1, 2, 3, 4, 5]`.
pub const SAMPLE: [i64; 5] = [1, 2, 3, 4, 5];

/// Letters paired with [`SAMPLE`] by `zip`.
pub const LETTERS: [char; 5] = ['a', 'b', 'c', 'd', 'e'];

/// Input for the minimum/maximum example.
pub const UNSORTED: [i64; 4] = [42, 17, 93, 5];

/// The 2x3 left operand of the addition example.
pub fn left_matrix() -> Matrix<i64> {
    Matrix::from_array([[1, 2, 3], [4, 5, 6]])
}

/// The 2x3 right operand of the addition example.
pub fn right_matrix() -> Matrix<i64> {
    Matrix::from_array([[7, 8, 9], [10, 11, 12]])
}

/// A `rows x cols` matrix whose entry `(i, j)` is `i * cols + j`.
pub fn counting_matrix(rows: usize, cols: usize) -> Matrix<i64> {
    let data = (0..rows)
        .map(|i| (0..cols).map(|j| (i * cols + j) as i64).collect())
        .collect();
    match Matrix::new(rows, cols, data) {
        Ok(m) => m,
        Err(e) => unreachable!("counting_matrix builds exact rows: {}", e),
    }
}
