//! The smallest example in the crate: one public function built on a private one.
//!
//! `api_function(x) = (x + 1) * 2`. Arithmetic is checked, so the only way to
//! fail is overflow, which is reported as a `Contract` violation instead of
//! wrapping.

use crate::verify::{Result, Violation};

fn helper_function(x: i64) -> Option<i64> {
    x.checked_add(1)
}

/// `(x + 1) * 2`.
pub fn api_function(x: i64) -> Result<i64> {
    helper_function(x)
        .and_then(|y| y.checked_mul(2))
        .ok_or_else(|| Violation::contract("api_function", format!("overflows i64 for x = {}", x)))
}
