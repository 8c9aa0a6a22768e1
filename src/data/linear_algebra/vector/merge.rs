//! # Ordered merge of two chains
//!
//! Walks an owned chain and a borrowed chain with one cursor each. Both are ordered by index, so
//! comparing the indices under the cursors tells which of the three cases applies:
//!
//! * equal: both vectors store a value at this index, combine them;
//! * less: only the owned chain stores a value, it is kept as is;
//! * greater: only the borrowed chain stores a value, it is taken over with the sign applied.
//!
//! The tuples come out in increasing index order. Values that cancel out are emitted as zeros; the
//! caller removes those afterwards.
use std::cmp::Ordering;
use std::iter::{FusedIterator, Peekable};
use std::ops::Sub;

use num_traits::Zero;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::traits::Sign;
use crate::data::linear_algebra::vector::chain::{self, Chain};

/// Iterator over the elementwise sum or difference of two chains.
pub(super) struct Combine<'a, F> {
    ours: Peekable<chain::IntoIter<F>>,
    theirs: Peekable<chain::Iter<'a, F>>,
    sign: Sign,
}

impl<'a, F> Combine<'a, F> {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `ours`: Chain that is consumed, its nodes are read only once.
    /// * `theirs`: Chain of which the values are added to (or subtracted from) `ours`.
    /// * `sign`: Whether to add or subtract.
    pub(super) fn new(ours: Chain<F>, theirs: &'a Chain<F>, sign: Sign) -> Self {
        Self {
            ours: ours.into_iter().peekable(),
            theirs: theirs.iter().peekable(),
            sign,
        }
    }
}

impl<F> Iterator for Combine<'_, F>
where
    F: Zero + Clone + Sub<Output=F>,
{
    type Item = SparseTuple<F>;

    fn next(&mut self) -> Option<Self::Item> {
        let order = match (self.ours.peek(), self.theirs.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some((ours, _)), Some((theirs, _))) => ours.cmp(theirs),
        };

        match order {
            Ordering::Equal => {
                let (index, value) = self.ours.next()?;
                let (_, other) = self.theirs.next()?;
                Some((index, self.sign.apply(value, other)))
            },
            Ordering::Less => self.ours.next(),
            Ordering::Greater => {
                let sign = self.sign;
                self.theirs.next().map(|(index, other)| (index, sign.apply_to_missing(other)))
            },
        }
    }
}

impl<F> FusedIterator for Combine<'_, F>
where
    F: Zero + Clone + Sub<Output=F>,
{
}
