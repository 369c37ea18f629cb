//! Range proof prover

use ark_bls12_381::Bls12_381;
use ark_ec::pairing::Pairing;
use ark_ff::UniformRand;
use ark_std::rand::Rng;
use rayon::prelude::*;
use zkrp_core::{g1, g2, pairing_base, Result, Scalar, ZkrpError, G2, Gt};
use zkrp_setup::{DigitSignature, PublicParams};

use crate::commitment::commit;
use crate::decompose::{decompose, positional_weights};
use crate::proof::{derive_challenge, RangeProof};

/// Fresh random scalars drawn for one digit of one proof
struct DigitRandomness {
    /// v_i, randomizes the authority signature
    signature_randomizer: Scalar,
    /// s_i, masks the digit value
    digit_mask: Scalar,
    /// t_i, masks the signature randomizer
    randomizer_mask: Scalar,
}

/// Proves that `value` lies in [0, base^num_digits) under the commitment
/// g2^value · h^blinding.
///
/// Fails with a range error before any signature lookup when the value
/// falls outside the provable interval; a successful return always
/// verifies under the same parameters.
pub fn prove<R: Rng>(
    value: u64,
    blinding: Scalar,
    params: &PublicParams,
    rng: &mut R,
) -> Result<RangeProof> {
    let digits = decompose(value, params.base, params.num_digits)?;
    let signatures: Vec<&DigitSignature> = digits
        .iter()
        .map(|&digit| {
            params.signature_for(digit).ok_or(ZkrpError::OutOfRange {
                value,
                base: params.base,
                num_digits: params.num_digits,
            })
        })
        .collect::<Result<_>>()?;

    let aggregate_mask = Scalar::rand(rng);
    let randomness: Vec<DigitRandomness> = (0..params.num_digits)
        .map(|_| DigitRandomness {
            signature_randomizer: Scalar::rand(rng),
            digit_mask: Scalar::rand(rng),
            randomizer_mask: Scalar::rand(rng),
        })
        .collect();
    let weights = positional_weights(params.base, params.num_digits);

    // Per-digit work is independent; only the aggregate reduction is shared
    let rows: Vec<(G2, Gt, G2)> = signatures
        .par_iter()
        .zip(randomness.par_iter())
        .zip(weights.par_iter())
        .map(|((signature, digit_randomness), weight)| {
            let blinded = signature.0 * digit_randomness.signature_randomizer;
            let digit_commitment = Bls12_381::pairing(g1(), blinded)
                * -digit_randomness.digit_mask
                + pairing_base() * digit_randomness.randomizer_mask;
            let weighted_mask = g2() * (digit_randomness.digit_mask * weight);
            (blinded, digit_commitment, weighted_mask)
        })
        .collect();

    let mut blinded_signatures = Vec::with_capacity(params.num_digits);
    let mut digit_commitments = Vec::with_capacity(params.num_digits);
    let mut aggregate = params.h * aggregate_mask;
    for (blinded, digit_commitment, weighted_mask) in rows {
        blinded_signatures.push(blinded);
        digit_commitments.push(digit_commitment);
        aggregate += weighted_mask;
    }

    let commitment = commit(Scalar::from(value), blinding, params);
    let challenge = derive_challenge(&digit_commitments, &aggregate);

    let blinding_response = aggregate_mask - blinding * challenge;
    let digit_responses = digits
        .iter()
        .zip(&randomness)
        .map(|(&digit, digit_randomness)| {
            digit_randomness.digit_mask - Scalar::from(digit) * challenge
        })
        .collect();
    let randomizer_responses = randomness
        .iter()
        .map(|digit_randomness| {
            digit_randomness.randomizer_mask
                - digit_randomness.signature_randomizer * challenge
        })
        .collect();

    Ok(RangeProof {
        blinded_signatures,
        digit_commitments,
        aggregate,
        commitment,
        challenge,
        digit_responses,
        randomizer_responses,
        blinding_response,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;
    use zkrp_setup::setup;

    #[test]
    fn test_prove_covers_interval_endpoints() {
        let mut rng = thread_rng();
        let (params, _secret) = setup(2, 8, &mut rng).unwrap();

        for value in [0u64, 1, 128, 255] {
            let blinding = Scalar::rand(&mut rng);
            let proof = prove(value, blinding, &params, &mut rng).unwrap();
            assert_eq!(proof.num_digits(), 8);
            assert_eq!(proof.digit_commitments.len(), 8);
            assert_eq!(proof.digit_responses.len(), 8);
            assert_eq!(proof.randomizer_responses.len(), 8);
        }
    }

    #[test]
    fn test_prove_rejects_out_of_range_values() {
        let mut rng = thread_rng();
        let (params, _secret) = setup(2, 8, &mut rng).unwrap();

        let blinding = Scalar::rand(&mut rng);
        for value in [256u64, 300, u64::MAX] {
            assert_eq!(
                prove(value, blinding, &params, &mut rng),
                Err(ZkrpError::OutOfRange {
                    value,
                    base: 2,
                    num_digits: 8,
                })
            );
        }
    }

    #[test]
    fn test_proofs_of_one_value_are_distinct() {
        let mut rng = thread_rng();
        let (params, _secret) = setup(4, 4, &mut rng).unwrap();

        let blinding = Scalar::rand(&mut rng);
        let first = prove(100, blinding, &params, &mut rng).unwrap();
        let second = prove(100, blinding, &params, &mut rng).unwrap();

        assert_ne!(first.to_bytes(), second.to_bytes());
    }
}
