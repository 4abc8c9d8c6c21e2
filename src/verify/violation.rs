// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The violation taxonomy every checked operation reports through.
//!
//! A violation means the caller passed something that could have been checked
//! before the call. Nothing here is transient, so nothing here is retried: each
//! operation returns either a value satisfying its postcondition or exactly one
//! of these.
//!
//! | Kind       | Raised when                                   | Carries                     |
//! |------------|-----------------------------------------------|-----------------------------|
//! | `Contract` | emptiness, non-negativity, length mismatch    | operation, failed requirement |
//! | `Bounds`   | index outside its half-open range             | axis, index, valid length   |
//! | `Shape`    | two structured inputs disagree on a dimension | dimension, both sizes       |

use std::fmt;
use thiserror::Error;

/// Result alias used by every checked operation.
pub type Result<T> = std::result::Result<T, Violation>;

/// Which index a [`Violation::Bounds`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A position within a single sequence.
    Position,
    /// A matrix row index.
    Row,
    /// A matrix column index.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Position => write!(f, "index"),
            Axis::Row => write!(f, "row index"),
            Axis::Column => write!(f, "column index"),
        }
    }
}

/// Which dimension a [`Violation::Shape`] disagreed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Row counts differ.
    Rows,
    /// Column counts differ.
    Columns,
    /// A single row's width differs from the declared column count.
    RowWidth { row: usize },
    /// An untyped row count is negative or fractional. `value` is the number
    /// as written; `expected` is what the data holds.
    DeclaredRows { value: String },
    /// As `DeclaredRows`, for the column count.
    DeclaredColumns { value: String },
}

/// Coarse classification for harnesses that only care about the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    Contract,
    Bounds,
    Shape,
}

/// A failed precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// General precondition failure not covered by a more specific kind.
    #[error("{operation} {requirement}")]
    Contract {
        operation: &'static str,
        requirement: String,
    },

    /// Index outside `[0, len)`.
    ///
    /// `index` is wide enough to hold both a negative `i64` and any `usize`
    /// exactly as the caller passed it.
    #[error("{axis} {index} out of bounds [0, {len})")]
    Bounds { axis: Axis, index: i128, len: usize },

    /// Declared or paired sizes disagree.
    #[error("{}", shape_message(.dimension, .expected, .actual))]
    Shape {
        dimension: Dimension,
        expected: usize,
        actual: usize,
    },
}

fn shape_message(dimension: &Dimension, expected: &usize, actual: &usize) -> String {
    match dimension {
        Dimension::Rows => format!("row mismatch: {} != {}", expected, actual),
        Dimension::Columns => format!("column mismatch: {} != {}", expected, actual),
        Dimension::RowWidth { row } => {
            format!("row {} has {} cols, expected {}", row, actual, expected)
        }
        Dimension::DeclaredRows { value } => format!(
            "declared rows {} is not a non-negative integer (data has {})",
            value, expected
        ),
        Dimension::DeclaredColumns { value } => format!(
            "declared cols {} is not a non-negative integer (data has {})",
            value, expected
        ),
    }
}

impl Violation {
    pub(crate) fn contract(operation: &'static str, requirement: impl Into<String>) -> Self {
        let violation = Violation::Contract {
            operation,
            requirement: requirement.into(),
        };
        tracing::debug!(%violation, "contract rejected input");
        violation
    }

    pub(crate) fn out_of_bounds(axis: Axis, index: usize, len: usize) -> Self {
        Self::bounds(axis, index as i128, len)
    }

    fn bounds(axis: Axis, index: i128, len: usize) -> Self {
        let violation = Violation::Bounds { axis, index, len };
        tracing::debug!(%violation, "index rejected");
        violation
    }

    pub(crate) fn shape(dimension: Dimension, expected: usize, actual: usize) -> Self {
        let violation = Violation::Shape {
            dimension,
            expected,
            actual,
        };
        tracing::debug!(%violation, "shape rejected");
        violation
    }

    /// The violation's kind, without its payload.
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::Contract { .. } => ViolationKind::Contract,
            Violation::Bounds { .. } => ViolationKind::Bounds,
            Violation::Shape { .. } => ViolationKind::Shape,
        }
    }
}

/// Convert an untyped number into a count (`n >= 0`, integral).
///
/// Native Rust callers pass `usize` and never need this. It exists for
/// inputs that arrive as JSON numbers, where `-1` or `2.5` are representable
/// and must be rejected rather than truncated.
pub fn natural(operation: &'static str, value: f64) -> Result<usize> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(Violation::contract(
            operation,
            format!("requires n to be a non-negative integer, got {}", value),
        ));
    }
    if value < 0.0 {
        return Err(Violation::contract(
            operation,
            format!("requires n to be non-negative, got {}", value),
        ));
    }
    if value > usize::MAX as f64 {
        return Err(Violation::contract(
            operation,
            format!("requires n to fit an addressable length, got {}", value),
        ));
    }
    Ok(value as usize)
}

/// Convert a signed index into a position within `[0, len)`.
pub fn position(axis: Axis, index: i64, len: usize) -> Result<usize> {
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(Violation::bounds(axis, i128::from(index), len)),
    }
}
