//! Fiat-Shamir transcript
//!
//! Derives the non-interactive challenge by hashing the prover's first-round
//! messages under a fixed length-prefixed labeled encoding. Identical
//! append sequences always squeeze identical challenges.

use crate::Scalar;
use ark_ff::PrimeField;
use ark_serialize::CanonicalSerialize;
use blake2::{Blake2s256, Digest};

/// Cryptographic transcript for the Fiat-Shamir transform
#[derive(Debug, Clone)]
pub struct Transcript {
    hasher: Blake2s256,
}

impl Transcript {
    /// Creates a new transcript under the given domain separator
    pub fn new(domain_separator: &[u8]) -> Self {
        let mut hasher = Blake2s256::new();
        hasher.update(b"zkrp-transcript");
        hasher.update((domain_separator.len() as u64).to_le_bytes());
        hasher.update(domain_separator);
        Self { hasher }
    }

    /// Appends a labeled byte message
    pub fn append_bytes(&mut self, label: &[u8], message: &[u8]) {
        self.hasher.update((label.len() as u64).to_le_bytes());
        self.hasher.update(label);
        self.hasher.update((message.len() as u64).to_le_bytes());
        self.hasher.update(message);
    }

    /// Appends a group or field element in its canonical compressed encoding
    pub fn append_element<T: CanonicalSerialize>(&mut self, label: &[u8], element: &T) {
        let mut bytes = Vec::with_capacity(element.compressed_size());
        element
            .serialize_compressed(&mut bytes)
            .expect("serialization into a Vec cannot fail");
        self.append_bytes(label, &bytes);
    }

    /// Squeezes a challenge scalar out of the current transcript state
    pub fn challenge_scalar(&mut self, label: &[u8]) -> Scalar {
        self.append_bytes(label, b"challenge");
        let digest = self.hasher.finalize_reset();

        // Widen to 64 bytes before reduction so the output stays uniform
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(&digest);
        let mut extender = Blake2s256::new();
        extender.update(digest);
        extender.update(b"extend");
        wide[32..].copy_from_slice(&extender.finalize());

        Scalar::from_le_bytes_mod_order(&wide)
    }
}
