//! Length- and shape-checked sequences and matrices.
//!
//! Each operation here stands in for a length-indexed signature such as
//! `take : (n : Nat) -> Vect (n + m) a -> Vect n a`. Rust can't state that in
//! the type, so the precondition becomes a check at the top of the function and
//! the postcondition becomes a debug-build contract on the way out. Where Rust
//! *can* rule a case out statically (`usize` counts can't be negative,
//! `[[T; C]; R]` can't be ragged) it does, and the runtime check disappears.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌───────────────┐
//! │   seq.rs    │   │  matrix.rs   │   │ non_empty.rs  │
//! │ (head, take,│   │ (Matrix::new,│   │ (NonEmpty,    │
//! │  zip, sum)  │   │  add, at)    │   │  from_slice)  │
//! └─────────────┘   └──────────────┘   └───────────────┘
//!        │                 │                   │
//!        ▼                 ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                          │
//! │  (Violation: Contract / Bounds / Shape,             │
//! │   contracts: debug postconditions)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Failure kinds
//!
//! | Kind       | Example                                        |
//! |------------|------------------------------------------------|
//! | `Contract` | `head(&[])`, `zip` of unequal lengths          |
//! | `Bounds`   | `index(3, &[1, 2, 3])`, `m.at(2, 0)` on 2 rows |
//! | `Shape`    | `Matrix::new(2, 3, ragged)`, adding 2x3 + 3x3  |
//!
//! # Usage
//!
//! ```
//! use vect::{take, drop, Matrix, ViolationKind};
//!
//! let v = [1, 2, 3, 4, 5];
//! assert_eq!(take(3, &v)?, &[1, 2, 3]);
//! assert_eq!(drop(2, &v)?, &[3, 4, 5]);
//!
//! let m = Matrix::new(2, 3, vec![vec![1, 2, 3], vec![4, 5, 6]])?;
//! assert_eq!(m.at(1, 2)?, &6);
//! assert_eq!(m.at(2, 0).unwrap_err().kind(), ViolationKind::Bounds);
//! # Ok::<(), vect::Violation>(())
//! ```

// Module declarations
pub mod basic;
pub mod matrix;
pub mod non_empty;
pub mod seq;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use basic::api_function;
pub use matrix::Matrix;
pub use non_empty::{from_sequence, to_sequence, NonEmpty};
pub use seq::{drop, head, index, map, maximum, minimum, replicate, sum, tail, take, zip};
pub use verify::{natural, position, Axis, Dimension, Result, Violation, ViolationKind};
