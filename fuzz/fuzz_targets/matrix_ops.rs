// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for matrix construction, addition and indexing.
//!
//! The fuzzer supplies declared dimensions and raw nested data that usually
//! disagree. Construction must catch every disagreement; operations on what
//! survives must never index out of range.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vect::{Axis, Matrix, Violation, ViolationKind};

#[derive(Debug, Arbitrary)]
struct MatrixInput {
    rows: u8,
    cols: u8,
    data: Vec<Vec<i16>>,
    other: Vec<Vec<i16>>,
    i: u8,
    j: u8,
}

fn widen(data: Vec<Vec<i16>>) -> Vec<Vec<i32>> {
    data.into_iter()
        .map(|row| row.into_iter().map(i32::from).collect())
        .collect()
}

fuzz_target!(|input: MatrixInput| {
    let (rows, cols) = (input.rows as usize, input.cols as usize);
    let rectangular = |d: &[Vec<i16>]| d.len() == rows && d.iter().all(|r| r.len() == cols);

    // Property 1: construction succeeds exactly on rectangular data
    let expect_left = rectangular(&input.data);
    let expect_right = rectangular(&input.other);
    let left = Matrix::new(rows, cols, widen(input.data));
    let right = Matrix::new(rows, cols, widen(input.other));
    assert_eq!(left.is_ok(), expect_left);
    assert_eq!(right.is_ok(), expect_right);
    if let Err(e) = &left {
        assert_eq!(e.kind(), ViolationKind::Shape);
    }

    let Ok(left) = left else { return };

    // Property 2: at() is in range or reports the failing axis
    let (i, j) = (input.i as usize, input.j as usize);
    match left.at(i, j) {
        Ok(x) => assert_eq!(x, &left.data()[i][j]),
        Err(Violation::Bounds { axis: Axis::Row, .. }) => assert!(i >= rows),
        Err(Violation::Bounds { axis: Axis::Column, .. }) => assert!(j >= cols),
        Err(other) => panic!("unexpected violation from at(): {}", other),
    }

    // Property 3: adding a same-shaped matrix keeps the shape (i16 + i16 fits i32)
    if let Ok(right) = right {
        let sum = left.add(&right).expect("same shape must add");
        assert_eq!(sum.shape(), (rows, cols));
    }
});
