//! # Sparse vector
//!
//! Fixed size, only nonzero values are stored. They are kept in an owned chain of
//! `(index, value)` nodes, ordered by index.
//!
//! After every public operation:
//!
//! * the indices in the chain are strictly increasing;
//! * no stored value is zero;
//! * the length is the one the vector was created with.
use std::fmt;
use std::iter::Sum;
use std::mem;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use itertools::Itertools;
use log::trace;
use num_traits::{One, Zero};

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::traits::{Sign, SparseElement};
use crate::data::linear_algebra::utilities::{check_bounds, check_no_zeros, check_order};
use crate::data::linear_algebra::vector::chain::{Chain, IntoIter, Iter};
use crate::data::linear_algebra::vector::merge::Combine;
use crate::error::Error;

/// A sparse vector using an ordered, singly linked chain of (index, value) nodes as back-end.
/// Indices start at `0`.
///
/// Reading an index that has no node yields zero. This includes indices at or beyond `len`:
/// writing there is refused, so nothing can be stored there.
pub struct Sparse<F> {
    chain: Chain<F>,
    len: usize,
}

impl<F> Sparse<F> {
    /// Create an all-zero vector.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements represented, this doesn't change afterwards.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { chain: Chain::new(), len }
    }

    /// Create an all-zero vector from a signed length.
    ///
    /// # Errors
    ///
    /// When `len` is negative, or too large to index with on this platform.
    pub fn try_new(len: i64) -> Result<Self, Error> {
        usize::try_from(len)
            .map(Self::new)
            .map_err(|_| Error::NegativeLength { len })
    }

    /// The length of this vector.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this vector has zero length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of values that are explicitly stored.
    ///
    /// The chain doesn't cache its length, so this walks all nodes.
    pub fn size(&self) -> usize {
        self.chain.count()
    }

    /// Iterate over the stored `(index, value)` pairs, in increasing index order.
    pub fn iter(&self) -> Iter<'_, F> {
        self.chain.iter()
    }

    /// Retrieve the value at an index.
    ///
    /// # Return value
    ///
    /// `None` if the value at the index is zero.
    pub fn get(&self, index: usize) -> Option<&F> {
        self.chain.find(index)
    }
}

impl<F: SparseElement> Sparse<F> {
    /// Create a vector of length `len` from `data`.
    ///
    /// Requires that `data` is sorted by index, that all indices are smaller than `len` and that
    /// zero values are already filtered.
    #[must_use]
    pub fn from_tuples(data: Vec<SparseTuple<F>>, len: usize) -> Self {
        let vector = Self { chain: Chain::from_sorted(data), len };
        check_bounds(vector.iter(), vector.len);
        vector.check_order();
        vector.check_no_zeros();

        vector
    }

    /// Create a `SparseVector` representation of standard basis unit vector e_i.
    ///
    /// # Arguments
    ///
    /// * `i`: Only index where there should be a 1. Note that indexing starts at zero, and runs
    /// until (not through) `len`.
    /// * `len`: Size of the `SparseVector`.
    #[must_use]
    pub fn standard_basis_vector(i: usize, len: usize) -> Self
    where
        F: One,
    {
        debug_assert!(i < len);

        Self::from_tuples(vec![(i, F::one())], len)
    }

    /// The value at an index, zero if nothing is stored there.
    pub fn value_at(&self, index: usize) -> F {
        self.get(index).cloned().unwrap_or_else(F::zero)
    }

    /// Set the value at index `index` to `value`.
    ///
    /// A zero value removes the node at `index`, if there is one. Any other value overwrites the
    /// node, or is spliced into the chain in front of the first node with a larger index.
    ///
    /// # Errors
    ///
    /// When `index` is not smaller than the length of the vector. The vector is not changed.
    pub fn set(&mut self, index: usize, value: F) -> Result<(), Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds { index, len: self.len });
        }

        if value.is_zero() {
            self.chain.remove(index);
        } else {
            self.chain.insert(index, value);
        }

        self.check_order();
        self.check_no_zeros();
        Ok(())
    }

    /// Add `other` to, or subtract it from, this vector.
    ///
    /// Both chains are walked once. Values that cancel out are removed afterwards, in a single
    /// pass over the result.
    ///
    /// # Errors
    ///
    /// When the lengths differ. This vector is not changed in that case.
    pub fn combine(&mut self, other: &Self, sign: Sign) -> Result<(), Error>
    where
        F: Sub<Output=F>,
    {
        if self.len != other.len {
            return Err(Error::LengthMismatch { left: self.len, right: other.len });
        }

        let ours = mem::take(&mut self.chain);
        self.chain = Chain::from_sorted(Combine::new(ours, &other.chain, sign));
        self.check_order();

        let cancelled = self.chain.retain(|_, value| !value.is_zero());
        if cancelled > 0 {
            trace!("{} values cancelled combining vectors of length {}", cancelled, self.len);
        }
        self.check_no_zeros();

        Ok(())
    }

    /// Add `other` to this vector.
    ///
    /// # Errors
    ///
    /// When the lengths differ.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<(), Error>
    where
        F: Sub<Output=F>,
    {
        self.combine(other, Sign::Plus)
    }

    /// Subtract `other` from this vector.
    ///
    /// # Errors
    ///
    /// When the lengths differ.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<(), Error>
    where
        F: Sub<Output=F>,
    {
        self.combine(other, Sign::Minus)
    }

    /// The sum of two vectors, leaving both unchanged.
    ///
    /// # Errors
    ///
    /// When the lengths differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, Error>
    where
        F: Sub<Output=F>,
    {
        let mut result = self.clone();
        result.try_add_assign(other)?;
        Ok(result)
    }

    /// The difference of two vectors, leaving both unchanged.
    ///
    /// # Errors
    ///
    /// When the lengths differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, Error>
    where
        F: Sub<Output=F>,
    {
        let mut result = self.clone();
        result.try_sub_assign(other)?;
        Ok(result)
    }

    /// Calculate the inner product between two vectors.
    ///
    /// # Errors
    ///
    /// When the lengths differ.
    pub fn inner_product(&self, other: &Self) -> Result<F, Error>
    where
        for<'r> &'r F: Mul<&'r F, Output=F>,
    {
        if self.len != other.len {
            return Err(Error::LengthMismatch { left: self.len, right: other.len });
        }

        let mut total = F::zero();
        let mut theirs = other.iter().peekable();
        for (index, value) in self.iter() {
            while theirs.next_if(|&(j, _)| j < index).is_some() {}
            if let Some((_, other_value)) = theirs.next_if(|&(j, _)| j == index) {
                total = total + value * other_value;
            }
        }

        Ok(total)
    }

    /// Multiply each element of the vector by a value.
    ///
    /// Multiplying by zero releases all nodes.
    pub fn element_wise_multiply(&mut self, value: &F)
    where
        for<'r> F: MulAssign<&'r F>,
    {
        if value.is_zero() {
            self.chain.clear();
            return;
        }

        for v in self.chain.values_mut() {
            *v *= value;
        }
        self.chain.retain(|_, v| !v.is_zero());
        self.check_no_zeros();
    }

    /// All values, including the zeros.
    pub fn to_dense(&self) -> Vec<F> {
        let mut dense = vec![F::zero(); self.len];
        for (index, value) in self.iter() {
            dense[index] = value.clone();
        }

        dense
    }

    fn check_order(&self) {
        check_order(self.iter());
    }

    fn check_no_zeros(&self) {
        check_no_zeros(self.iter());
    }
}

impl<F> Sparse<F>
where
    for<'r> &'r F: Mul<&'r F, Output=F>,
    F: Sum,
{
    /// Sum of the squares of all values.
    pub fn squared_norm(&self) -> F {
        self.iter()
            .map(|(_, value)| value * value)
            .sum()
    }
}

impl<F> Default for Sparse<F> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<F: Clone> Clone for Sparse<F> {
    fn clone(&self) -> Self {
        Self { chain: self.chain.clone(), len: self.len }
    }

    /// Release the current nodes, then copy those of `source`.
    fn clone_from(&mut self, source: &Self) {
        self.chain.clone_from(&source.chain);
        self.len = source.len;
    }
}

impl<F: PartialEq> PartialEq for Sparse<F> {
    /// Equal when the lengths are equal and the chains hold the same tuples.
    ///
    /// Stops at the first difference.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<F: Eq> Eq for Sparse<F> {}

impl<F: fmt::Debug> fmt::Debug for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sparse")
            .field("data", &self.chain)
            .field("len", &self.len)
            .finish()
    }
}

impl<F: SparseElement> FromIterator<F> for Sparse<F> {
    /// Create a vector from all of its values, zeros included.
    fn from_iter<I: IntoIterator<Item=F>>(iter: I) -> Self {
        let mut len = 0;
        let chain = Chain::from_sorted(
            iter.into_iter()
                .inspect(|_| len += 1)
                .enumerate()
                .filter(|(_, value)| !value.is_zero()),
        );

        Self { chain, len }
    }
}

impl<F> IntoIterator for Sparse<F> {
    type Item = SparseTuple<F>;
    type IntoIter = IntoIter<F>;

    fn into_iter(self) -> Self::IntoIter {
        self.chain.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a Sparse<F> {
    type Item = (usize, &'a F);
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Operator versions of `combine`.
///
/// A length mismatch is a bug in the calling code, so these panic instead of returning an error.
macro_rules! combine_operators {
    ($operator:ident, $method:ident, $assign_operator:ident, $assign_method:ident, $sign:expr) => {
        impl<F> $assign_operator<&Sparse<F>> for Sparse<F>
        where
            F: SparseElement + Sub<Output=F>,
        {
            fn $assign_method(&mut self, rhs: &Sparse<F>) {
                if let Err(error) = self.combine(rhs, $sign) {
                    panic!("{}", error);
                }
            }
        }

        impl<F> $assign_operator<Sparse<F>> for Sparse<F>
        where
            F: SparseElement + Sub<Output=F>,
        {
            fn $assign_method(&mut self, rhs: Sparse<F>) {
                $assign_operator::$assign_method(self, &rhs);
            }
        }

        impl<F> $operator<&Sparse<F>> for &Sparse<F>
        where
            F: SparseElement + Sub<Output=F>,
        {
            type Output = Sparse<F>;

            fn $method(self, rhs: &Sparse<F>) -> Self::Output {
                let mut result = self.clone();
                $assign_operator::$assign_method(&mut result, rhs);
                result
            }
        }

        impl<F> $operator<Sparse<F>> for Sparse<F>
        where
            F: SparseElement + Sub<Output=F>,
        {
            type Output = Sparse<F>;

            fn $method(mut self, rhs: Sparse<F>) -> Self::Output {
                $assign_operator::$assign_method(&mut self, &rhs);
                self
            }
        }
    };
}

combine_operators!(Add, add, AddAssign, add_assign, Sign::Plus);
combine_operators!(Sub, sub, SubAssign, sub_assign, Sign::Minus);

impl<F: SparseElement + Neg<Output=F>> Neg for Sparse<F> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for value in self.chain.values_mut() {
            let old = mem::replace(value, F::zero());
            *value = -old;
        }

        self
    }
}

impl<F: SparseElement + Neg<Output=F>> Neg for &Sparse<F> {
    type Output = Sparse<F>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<F: fmt::Display> fmt::Display for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        write!(f, "{}", self.iter().map(|(index, value)| format!("({} {})", index, value)).join(", "))?;
        write!(f, "]")
    }
}
