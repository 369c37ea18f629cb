//! Range proof transcript and its wire encoding

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use zkrp_core::{Gt, Scalar, Transcript, ZkrpError, G2};

/// Domain separator for the Fiat-Shamir challenge
const TRANSCRIPT_DOMAIN: &[u8] = b"zkrp-range-proof-v1";

/// A range proof that a committed value lies in [0, base^num_digits).
///
/// Produced by one [`prove`](crate::prove) call and consumed by
/// [`verify`](crate::verify). Carries no witness material: the secret
/// value, its digits, the commitment blinding, and every per-digit random
/// scalar stay with the prover.
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct RangeProof {
    /// Blinded authority signature V_i for each digit
    pub blinded_signatures: Vec<G2>,
    /// First-round pairing value a_i for each digit
    pub digit_commitments: Vec<Gt>,
    /// Aggregate D binding each digit's randomness to its positional weight
    pub aggregate: G2,
    /// Pedersen commitment C to the proven value
    pub commitment: G2,
    /// Fiat-Shamir challenge c
    pub challenge: Scalar,
    /// Response zsig_i opening digit i against the challenge
    pub digit_responses: Vec<Scalar>,
    /// Response zv_i for digit i's signature randomizer
    pub randomizer_responses: Vec<Scalar>,
    /// Response zr for the commitment blinding
    pub blinding_response: Scalar,
}

/// Derives the Fiat-Shamir challenge from the prover's first-round values.
///
/// Deterministic: the same digit commitments and aggregate always hash to
/// the same challenge scalar.
pub fn derive_challenge(digit_commitments: &[Gt], aggregate: &G2) -> Scalar {
    let mut transcript = Transcript::new(TRANSCRIPT_DOMAIN);
    for digit_commitment in digit_commitments {
        transcript.append_element(b"digit-commitment", digit_commitment);
    }
    transcript.append_element(b"aggregate", aggregate);
    transcript.challenge_scalar(b"challenge")
}

impl RangeProof {
    /// Number of digits this proof covers
    pub fn num_digits(&self) -> usize {
        self.blinded_signatures.len()
    }

    /// Canonical compressed byte encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.compressed_size());
        self.serialize_compressed(&mut bytes)
            .expect("serialization into a Vec cannot fail");
        bytes
    }

    /// Decodes a proof from its canonical compressed encoding
    pub fn from_bytes(bytes: &[u8]) -> zkrp_core::Result<Self> {
        Self::deserialize_compressed(bytes).map_err(|e| ZkrpError::Serialization(e.to_string()))
    }
}
