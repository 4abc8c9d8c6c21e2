// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rectangular matrices that carry their own dimensions.
//!
//! A `Matrix<T>` stores `rows` and `cols` beside its nested data and checks, once,
//! at construction that the data really has that shape. After that every row has
//! exactly `cols` entries for as long as the value lives: fields are private and
//! nothing hands out mutable access to the rows.
//!
//! # Invariants (enforced at construction)
//! - `data.len() == rows`
//! - `data[i].len() == cols` for every `i`
//!
//! Deserialization goes through the same constructor, so a ragged JSON matrix is
//! rejected with the same [`Violation::Shape`] a direct call would produce. JSON
//! can also declare `"rows": -1` or `"cols": 2.5`; those are read as plain
//! numbers, run through [`natural`], and reported as a shape disagreement with
//! the data rather than as a decoding error.

use std::fmt;
use std::ops::Add;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::verify::contracts::check_matrix_shape;
use crate::verify::{natural, Axis, Dimension, Result, Violation};

/// A `rows x cols` matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix<T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<Vec<T>>,
}

/// Unchecked wire shape, validated into a [`Matrix`].
///
/// Dimensions are read as untyped numbers so negative and fractional counts
/// reach validation instead of failing inside the decoder.
#[derive(Deserialize)]
struct RawMatrix<T> {
    rows: f64,
    cols: f64,
    data: Vec<Vec<T>>,
}

impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = Violation;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        let rows = declared_count(raw.rows, raw.data.len(), |value| {
            Dimension::DeclaredRows { value }
        })?;
        let width = raw.data.first().map_or(0, Vec::len);
        let cols = declared_count(raw.cols, width, |value| Dimension::DeclaredColumns {
            value,
        })?;
        Matrix::new(rows, cols, raw.data)
    }
}

/// A declared dimension as a count, or a shape violation against `observed`.
///
/// The violation's `actual` is the declared value cast to `usize`, which
/// saturates negatives to 0 and truncates fractions.
fn declared_count(
    declared: f64,
    observed: usize,
    dimension: impl FnOnce(String) -> Dimension,
) -> Result<usize> {
    natural("construct", declared).map_err(|_| {
        Violation::shape(dimension(declared.to_string()), observed, declared as usize)
    })
}

impl<T> Matrix<T> {
    /// Create a matrix, validating that `data` is `rows x cols`.
    ///
    /// Fails with [`Violation::Shape`] naming the row count or the first row
    /// whose width disagrees with `cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<Vec<T>>) -> Result<Self> {
        if data.len() != rows {
            return Err(Violation::shape(Dimension::Rows, rows, data.len()));
        }
        if let Some((row, width)) = data
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, width)| width != cols)
        {
            return Err(Violation::shape(Dimension::RowWidth { row }, cols, width));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from a fixed-size array. The shape is in the type, so this can't fail.
    pub fn from_array<const R: usize, const C: usize>(data: [[T; C]; R]) -> Self {
        let data: Vec<Vec<T>> = data.into_iter().map(Vec::from).collect();
        check_matrix_shape(R, C, &data);
        Self {
            rows: R,
            cols: C,
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The nested row data.
    pub fn data(&self) -> &[Vec<T>] {
        &self.data
    }

    /// Row `i`, or a row-axis [`Violation::Bounds`].
    pub fn row(&self, i: usize) -> Result<&[T]> {
        self.data
            .get(i)
            .map(Vec::as_slice)
            .ok_or_else(|| Violation::out_of_bounds(Axis::Row, i, self.rows))
    }

    /// Entry `(i, j)`.
    ///
    /// Row and column failures are reported separately, row first.
    pub fn at(&self, i: usize, j: usize) -> Result<&T> {
        let row = self.row(i)?;
        row.get(j)
            .ok_or_else(|| Violation::out_of_bounds(Axis::Column, j, self.cols))
    }

    pub fn into_data(self) -> Vec<Vec<T>> {
        self.data
    }

    /// Iterate rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Elementwise addition of two matrices of the same shape.
    ///
    /// Neither operand is modified. Overflow behaves as `T`'s `+` does.
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>>
    where
        T: Add<Output = T> + Clone,
    {
        if self.rows != other.rows {
            return Err(Violation::shape(Dimension::Rows, self.rows, other.rows));
        }
        if self.cols != other.cols {
            return Err(Violation::shape(Dimension::Columns, self.cols, other.cols));
        }

        let data: Vec<Vec<T>> = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(left, right)| {
                left.iter()
                    .zip(right)
                    .map(|(a, b)| a.clone() + b.clone())
                    .collect()
            })
            .collect();

        check_matrix_shape(self.rows, self.cols, &data);
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl<T: Zero + Clone> Matrix<T> {
    /// A `rows x cols` matrix of `T::zero()`.
    ///
    /// Dimensions are `usize`, so there is no negative shape to reject.
    pub fn zero(rows: usize, cols: usize) -> Self {
        let data = vec![vec![T::zero(); cols]; rows];
        check_matrix_shape(rows, cols, &data);
        Self { rows, cols, data }
    }
}

/// `zero(rows, cols)`, in free-function form.
pub fn zero<T: Zero + Clone>(rows: usize, cols: usize) -> Matrix<T> {
    Matrix::zero(rows, cols)
}

/// `add(m1, m2)`, in free-function form.
pub fn add<T: Add<Output = T> + Clone>(m1: &Matrix<T>, m2: &Matrix<T>) -> Result<Matrix<T>> {
    m1.add(m2)
}

/// `at(i, j, m)`, in free-function form.
pub fn at<T>(i: usize, j: usize, m: &Matrix<T>) -> Result<&T> {
    m.at(i, j)
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", x)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
