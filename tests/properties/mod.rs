//! # Properties over generated vectors
//!
//! Random operation sequences, checked against a dense `Vec<i32>` model. Seeds are fixed, so
//! failures reproduce.
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use sparse_chain::data::linear_algebra::vector::SparseVector;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

const LEN: usize = 40;
const SEEDS: std::ops::Range<u64> = 0..32;

/// A dense vector with mostly zeros, values from a small range so that sums cancel often.
fn random_dense(rng: &mut StdRng, len: usize) -> Vec<i32> {
    (0..len)
        .map(|_| if rng.gen_bool(0.3) { rng.gen_range(-3..=3) } else { 0 })
        .collect()
}

/// Indices of the stored values must be strictly increasing, and no stored value is zero.
fn assert_well_formed(vector: &SparseVector<i32>) {
    let tuples = vector.iter().collect::<Vec<_>>();
    assert!(tuples.windows(2).all(|pair| pair[0].0 < pair[1].0), "out of order: {}", vector);
    assert!(tuples.iter().all(|&(_, &value)| value != 0), "stored zero: {}", vector);
    assert!(tuples.iter().all(|&(index, _)| index < vector.len()), "out of bounds: {}", vector);
}

fn generate(seed: u64) -> (StdRng, Vec<i32>, SparseVector<i32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let dense = random_dense(&mut rng, LEN);
    let sparse = dense.iter().copied().collect();

    (rng, dense, sparse)
}
