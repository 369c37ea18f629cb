//! Range proof verifier

use ark_bls12_381::Bls12_381;
use ark_ec::pairing::Pairing;
use rayon::prelude::*;
use zkrp_core::{g1, g2, pairing_base};
use zkrp_setup::{PublicParams, VerificationKey};

use crate::decompose::positional_weights;
use crate::proof::{derive_challenge, RangeProof};

/// Verifies a range proof against the public parameters and the authority's
/// verification key.
///
/// Returns false for any malformed or non-verifying proof; one mismatch
/// anywhere rejects the whole proof. Rejection is a normal protocol
/// outcome, not an error.
pub fn verify(
    proof: &RangeProof,
    params: &PublicParams,
    verification_key: &VerificationKey,
) -> bool {
    let num_digits = params.num_digits;
    if proof.blinded_signatures.len() != num_digits
        || proof.digit_commitments.len() != num_digits
        || proof.digit_responses.len() != num_digits
        || proof.randomizer_responses.len() != num_digits
    {
        return false;
    }

    // The challenge must be the hash of the first-round values
    if derive_challenge(&proof.digit_commitments, &proof.aggregate) != proof.challenge {
        return false;
    }

    check_consistency(proof, params) && check_digits(proof, verification_key)
}

/// D = C^c · h^zr · Π g2^(zsig_i · u^i)
fn check_consistency(proof: &RangeProof, params: &PublicParams) -> bool {
    let mut expected = proof.commitment * proof.challenge + params.h * proof.blinding_response;
    for (response, weight) in proof
        .digit_responses
        .iter()
        .zip(positional_weights(params.base, params.num_digits))
    {
        expected += g2() * (*response * weight);
    }
    expected == proof.aggregate
}

/// a_i = e(y, V_i)^c · e(g1, V_i)^(−zsig_i) · e(g1, g2)^(zv_i) per digit
fn check_digits(proof: &RangeProof, verification_key: &VerificationKey) -> bool {
    (0..proof.num_digits()).into_par_iter().all(|i| {
        let blinded = proof.blinded_signatures[i];
        let expected = Bls12_381::pairing(verification_key.0, blinded) * proof.challenge
            + Bls12_381::pairing(g1(), blinded) * -proof.digit_responses[i]
            + pairing_base() * proof.randomizer_responses[i];
        expected == proof.digit_commitments[i]
    })
}
