//! Helper algorithms for the `linear_algebra` module.
//!
//! The checks in this module guard against bugs in the sparse data structures themselves. They
//! are active in debug builds, or when the `check-invariants` feature is enabled, and do nothing
//! otherwise. A violation is logged and then panics; it is never an error for the caller to handle.
use std::fmt::Debug;

use itertools::Itertools;
use log::error;
use num_traits::Zero;

/// Whether the invariant checks are compiled in.
pub(crate) const CHECK_INVARIANTS: bool = cfg!(any(debug_assertions, feature = "check-invariants"));

/// Verify that the indices of sparse tuples are strictly increasing.
///
/// # Arguments
///
/// * `tuples`: Index and value pairs, in storage order.
pub(crate) fn check_order<'a, F, I>(tuples: I)
where
    F: Debug + 'a,
    I: IntoIterator<Item=(usize, &'a F)>,
{
    if !CHECK_INVARIANTS {
        return;
    }

    let violation = tuples.into_iter()
        .tuple_windows()
        .find(|((previous, _), (current, _))| current <= previous);

    if let Some(((previous_index, previous_value), (index, value))) = violation {
        error!("Nodes are out of order!");
        error!("Previous index: {}, previous value: {:?}", previous_index, previous_value);
        error!("Current index: {}, current value: {:?}", index, value);
        panic!("sparse tuples out of order: index {} follows index {}", index, previous_index);
    }
}

/// Verify that no explicitly stored value is zero.
///
/// Every offending tuple is logged before panicking.
pub(crate) fn check_no_zeros<'a, F, I>(tuples: I)
where
    F: Zero + Debug + 'a,
    I: IntoIterator<Item=(usize, &'a F)>,
{
    if !CHECK_INVARIANTS {
        return;
    }

    let zeros = tuples.into_iter()
        .filter(|(_, value)| value.is_zero())
        .inspect(|(index, value)| error!("There is still a zero node: index {}, value {:?}", index, value))
        .map(|(index, _)| index)
        .collect::<Vec<_>>();

    if !zeros.is_empty() {
        panic!("zero values stored at indices {:?}", zeros);
    }
}

/// Verify that all indices lie within `[0, len)`.
pub(crate) fn check_bounds<'a, F, I>(tuples: I, len: usize)
where
    F: Debug + 'a,
    I: IntoIterator<Item=(usize, &'a F)>,
{
    if !CHECK_INVARIANTS {
        return;
    }

    if let Some((index, value)) = tuples.into_iter().find(|&(index, _)| index >= len) {
        error!("Node outside of the vector: index {}, value {:?}, length {}", index, value, len);
        panic!("sparse tuple index {} out of bounds for length {}", index, len);
    }
}
