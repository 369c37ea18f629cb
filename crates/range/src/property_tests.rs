//! Property-based tests for decomposition, completeness, and range rejection

use crate::decompose::{decompose, range_bound, recompose};
use crate::prover::prove;
use crate::verifier::verify;
use ark_ff::UniformRand;
use proptest::prelude::*;
use rand::thread_rng;
use zkrp_core::{Scalar, ZkrpError};
use zkrp_setup::setup;

/// Decomposing and recomposing is the identity on the provable interval
proptest! {
    #[test]
    fn test_decompose_round_trip(
        digits in prop::collection::vec(0u64..10, 1..8),
    ) {
        let base = 10u64;
        let value = recompose(&digits, base);

        let decomposed = decompose(value, base, digits.len())?;
        prop_assert_eq!(&decomposed, &digits);
        prop_assert!(decomposed.iter().all(|&d| d < base));
        prop_assert_eq!(recompose(&decomposed, base), value);
    }
}

/// Every in-range value proves and verifies
proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]
    #[test]
    fn test_completeness(
        value in 0u64..81,
        base in 3u64..5,
    ) {
        let num_digits = 4;
        prop_assume!((value as u128) < range_bound(base, num_digits).unwrap());

        let mut rng = thread_rng();
        let (params, _secret) = setup(base, num_digits, &mut rng).unwrap();

        let blinding = Scalar::rand(&mut rng);
        let proof = prove(value, blinding, &params, &mut rng)?;
        prop_assert!(verify(&proof, &params, &params.verification_key));
    }
}

/// Out-of-range values never yield a proof
proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]
    #[test]
    fn test_range_rejection(
        excess in 0u64..1000,
        base in 2u64..5,
    ) {
        let num_digits = 3;
        let bound = range_bound(base, num_digits).unwrap() as u64;
        let value = bound + excess;

        let mut rng = thread_rng();
        let (params, _secret) = setup(base, num_digits, &mut rng).unwrap();

        let blinding = Scalar::rand(&mut rng);
        prop_assert_eq!(
            prove(value, blinding, &params, &mut rng),
            Err(ZkrpError::OutOfRange { value, base, num_digits })
        );
    }
}
