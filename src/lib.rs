//! # Sparse vectors on an owned chain
//!
//! A fixed size vector that only stores its nonzero values, as `(index, value)` nodes in a singly
//! linked chain ordered by index. Vectors can be copied, compared, added and subtracted; every
//! operation keeps the chain strictly ordered and free of zeros.
//!
//! ```
//! use sparse_chain::data::linear_algebra::vector::SparseVector;
//!
//! let mut a = SparseVector::<i32>::new(5);
//! a.set(1, 10)?;
//! a.set(3, -5)?;
//! let b = SparseVector::from_tuples(vec![(1, -10), (2, 7), (3, 5)], 5);
//!
//! let sum = &a + &b;
//! assert_eq!(sum.iter().collect::<Vec<_>>(), vec![(2, &7)]);
//! # Ok::<(), sparse_chain::error::Error>(())
//! ```
//!
//! Internal consistency checks run in debug builds, or in release builds with the
//! `check-invariants` feature. Diagnostics are reported through the `log` facade.
#![warn(missing_docs)]

pub mod data;
pub mod error;
