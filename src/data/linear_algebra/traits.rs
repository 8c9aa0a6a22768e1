//! # Traits for elements in sparse datastructures
//!
//! A sparse data structure only stores the values that differ from zero, so its elements need to
//! know what zero is. The remaining bounds are needed to derive a few practical traits for the
//! vector types.
use std::fmt::{Debug, Display};

use num_traits::Zero;

/// Element of a sparse `Vector` type.
///
/// Implemented for every type that satisfies the bounds.
pub trait SparseElement: Zero + PartialEq + Clone + Display + Debug {}

impl<T> SparseElement for T
where
    T: Zero + PartialEq + Clone + Display + Debug,
{}

/// Whether elements are added or subtracted when two vectors are combined.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Sign {
    /// Elementwise addition.
    Plus,
    /// Elementwise subtraction.
    Minus,
}

impl Sign {
    /// Combine a value that is present in both operands.
    pub(crate) fn apply<F>(self, left: F, right: &F) -> F
    where
        F: Zero + Clone + std::ops::Sub<Output=F>,
    {
        match self {
            Sign::Plus => left + right.clone(),
            Sign::Minus => left - right.clone(),
        }
    }

    /// A value that is only present in the right operand.
    pub(crate) fn apply_to_missing<F>(self, right: &F) -> F
    where
        F: Zero + Clone + std::ops::Sub<Output=F>,
    {
        self.apply(F::zero(), right)
    }
}
