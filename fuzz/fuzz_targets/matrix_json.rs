// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for matrix deserialization.
//!
//! JSON is the only place a matrix arrives from outside the type system. The
//! decoder should return Err on garbage, not panic, and anything it does accept
//! must satisfy the shape invariant.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vect::Matrix;

fuzz_target!(|data: &[u8]| {
    // Property 1: decoding never panics
    let Ok(m) = serde_json::from_slice::<Matrix<i64>>(data) else {
        return;
    };

    // Property 2: accepted matrices are rectangular
    assert_eq!(m.data().len(), m.rows());
    for row in m.data() {
        assert_eq!(row.len(), m.cols());
    }

    // Property 3: re-encoding decodes to the same matrix
    let json = serde_json::to_vec(&m).expect("valid matrix should encode");
    let back: Matrix<i64> = serde_json::from_slice(&json).expect("re-encoded matrix should decode");
    assert_eq!(back, m);
});
