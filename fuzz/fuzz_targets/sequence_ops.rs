// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the checked sequence operations.
//!
//! Every operation must either return a value satisfying its guarantee or a
//! violation of the documented kind. Panicking is never acceptable, and neither
//! is silently clamping an out-of-range count.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vect::{drop, head, index, maximum, minimum, tail, take, zip, ViolationKind};

/// Arbitrary sequences plus an arbitrary count/index to apply to them.
#[derive(Debug, Arbitrary)]
struct SeqInput {
    v1: Vec<i32>,
    v2: Vec<u8>,
    n: u16,
}

fuzz_target!(|input: SeqInput| {
    let v = &input.v1;
    let n = input.n as usize;

    // Property 1: head/tail/min/max succeed exactly on non-empty input
    assert_eq!(head(v).is_ok(), !v.is_empty());
    assert_eq!(tail(v).is_ok(), !v.is_empty());
    if let (Ok(lo), Ok(hi)) = (minimum(v), maximum(v)) {
        assert!(lo <= hi, "minimum {} > maximum {}", lo, hi);
    } else {
        assert!(v.is_empty());
    }

    // Property 2: index is half-open
    match index(n, v) {
        Ok(x) => assert_eq!(x, &v[n]),
        Err(e) => {
            assert_eq!(e.kind(), ViolationKind::Bounds);
            assert!(n >= v.len());
        }
    }

    // Property 3: take/drop are exact or rejected, and partition v
    match (take(n, v), drop(n, v)) {
        (Ok(front), Ok(back)) => {
            assert_eq!(front.len(), n);
            assert_eq!(back.len(), v.len() - n);
            assert_eq!([front, back].concat(), *v);
        }
        (Err(a), Err(b)) => {
            assert!(n > v.len(), "rejected n={} for len={}", n, v.len());
            assert_eq!(a.kind(), ViolationKind::Contract);
            assert_eq!(b.kind(), ViolationKind::Contract);
        }
        _ => panic!("take and drop disagree for n={} len={}", n, v.len()),
    }

    // Property 4: zip accepts exactly equal lengths
    match zip(v, &input.v2) {
        Ok(pairs) => assert_eq!(pairs.len(), v.len()),
        Err(e) => {
            assert_eq!(e.kind(), ViolationKind::Contract);
            assert_ne!(v.len(), input.v2.len());
        }
    }
});
