use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sparse_chain::data::linear_algebra::traits::Sign;
use sparse_chain::data::linear_algebra::vector::SparseVector;

use super::{assert_well_formed, generate, random_dense, LEN, SEEDS};
use crate::init_logging;

#[test]
fn fresh_vector_is_zero() {
    for len in [0, 1, 7, LEN] {
        let v = SparseVector::<i32>::new(len);
        assert!((0..len).all(|i| v.value_at(i) == 0));
        assert_eq!(v.size(), 0);
    }
}

#[test]
fn set_sequence_matches_dense() {
    init_logging();

    for seed in SEEDS {
        let (mut rng, mut dense, mut sparse) = generate(seed);
        for _ in 0..200 {
            let index = rng.gen_range(0..LEN);
            let value = if rng.gen_bool(0.4) { 0 } else { rng.gen_range(-5..=5) };
            sparse.set(index, value).unwrap();
            dense[index] = value;

            assert_eq!(sparse.value_at(index), value);
            assert_well_formed(&sparse);
        }
        assert_eq!(sparse.to_dense(), dense);
    }
}

#[test]
fn set_twice_stores_once() {
    for seed in SEEDS {
        let (mut rng, _, mut sparse) = generate(seed);
        let index = rng.gen_range(0..LEN);
        let before = sparse.size();
        let was_stored = sparse.get(index).is_some();

        sparse.set(index, 9).unwrap();
        sparse.set(index, 9).unwrap();

        assert_eq!(sparse.iter().filter(|&(i, _)| i == index).count(), 1);
        assert_eq!(sparse.size(), if was_stored { before } else { before + 1 });
    }
}

#[test]
fn zero_removes() {
    for seed in SEEDS {
        let (_, _, mut sparse) = generate(seed);
        for index in 0..LEN {
            sparse.set(index, 0).unwrap();
            assert_eq!(sparse.get(index), None);
        }
        assert_eq!(sparse, SparseVector::new(LEN));
    }
}

#[test]
fn copy_does_not_alias() {
    for seed in SEEDS {
        let (mut rng, dense, original) = generate(seed);
        let mut copy = original.clone();
        for _ in 0..20 {
            copy.set(rng.gen_range(0..LEN), rng.gen_range(-5..=5)).unwrap();
        }
        copy -= &original;

        assert_eq!(original.to_dense(), dense);
    }
}

#[test]
fn additive_inverse() {
    init_logging();

    for seed in SEEDS {
        let (_, _, v) = generate(seed);

        let difference = &v - &v;
        assert_eq!(difference.size(), 0);
        assert_eq!(difference, SparseVector::new(LEN));

        let mut w = v.clone();
        w.combine(&v, Sign::Minus).unwrap();
        assert_eq!(w, SparseVector::new(LEN));

        assert_eq!(&v + &(-&v), SparseVector::new(LEN));
    }
}

#[test]
fn combine_matches_dense() {
    init_logging();

    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = random_dense(&mut rng, LEN);
        let b = random_dense(&mut rng, LEN);
        let sparse_a = a.iter().copied().collect::<SparseVector<_>>();
        let sparse_b = b.iter().copied().collect::<SparseVector<_>>();

        let sum = &sparse_a + &sparse_b;
        let difference = &sparse_a - &sparse_b;
        assert_well_formed(&sum);
        assert_well_formed(&difference);

        assert_eq!(sum.to_dense(), a.iter().zip(&b).map(|(x, y)| x + y).collect::<Vec<_>>());
        assert_eq!(difference.to_dense(), a.iter().zip(&b).map(|(x, y)| x - y).collect::<Vec<_>>());
    }
}

#[test]
fn commutativity() {
    for seed in SEEDS {
        let (mut rng, _, a) = generate(seed);
        let b = random_dense(&mut rng, LEN).into_iter().collect::<SparseVector<_>>();

        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a - &b, -(&b - &a));
    }
}

#[test]
fn equality() {
    for seed in SEEDS {
        let (mut rng, _, a) = generate(seed);
        let b = random_dense(&mut rng, LEN).into_iter().collect::<SparseVector<_>>();

        assert_eq!(a, a);
        assert_eq!(a == b, b == a);
        assert_eq!(a == b, a.to_dense() == b.to_dense());
        assert_eq!(a.inner_product(&b), Ok(a.to_dense().iter().zip(b.to_dense()).map(|(x, y)| x * y).sum::<i32>()));
    }
}
