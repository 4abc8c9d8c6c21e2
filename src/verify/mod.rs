// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: classified violations and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Violations** (`Violation::Contract`, `Bounds`, `Shape`) returned when a
//!    caller's input breaks a precondition. These are the public contract and are
//!    checked in every build.
//!
//! 2. **Runtime contracts** that panic in debug builds when an operation's own
//!    output breaks its postcondition. Zero-cost in release, but catch bugs
//!    during development.
//!
//! Use both. Violations keep bad input out. The contracts keep bad output in.

mod violation;
pub mod contracts;

pub use violation::*;
