//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent data in a sparse format.

pub mod traits;
pub mod vector;
pub(crate) mod utilities;

/// An index and the nonzero value stored there.
pub type SparseTuple<F> = (usize, F);
