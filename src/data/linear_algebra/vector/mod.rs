//! # Vector types
//!
//! Sparse vectors that store their nonzero values in a linked chain. These were written by hand,
//! because the chain has to stay ordered and free of zeros under every operation, including the
//! merge of two chains.
pub use chain::{IntoIter, Iter};
pub use sparse::Sparse as SparseVector;

mod chain;
mod merge;
mod sparse;
