//! Process-wide generator constants
//!
//! The base generators and their pairing appear in every prove and verify
//! call, so the pairing is computed once per process and reused.

use crate::{G1, G2, Gt};
use ark_bls12_381::{Bls12_381, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, Group};
use blake2::{Blake2b512, Digest};
use std::sync::OnceLock;

/// Base generator of G1
pub fn g1() -> G1 {
    G1::generator()
}

/// Base generator of G2
pub fn g2() -> G2 {
    G2::generator()
}

/// e(g1, g2), the pairing of the base generators
pub fn pairing_base() -> Gt {
    static PAIRING_BASE: OnceLock<Gt> = OnceLock::new();
    *PAIRING_BASE.get_or_init(|| Bls12_381::pairing(g1(), g2()))
}

/// Hashes a domain-separation tag to a point of G2.
///
/// Try-and-increment over a Blake2b digest stream: candidate encodings are
/// drawn until one lands on the curve, then the cofactor is cleared to reach
/// the prime-order subgroup. Deterministic in `domain`, and the result
/// carries no known discrete-log relation to the base generator.
pub fn hash_to_g2(domain: &[u8]) -> G2 {
    let mut counter = 0u64;
    loop {
        let mut candidate = Vec::with_capacity(128);
        for block in 0u8..2 {
            let mut hasher = Blake2b512::new();
            hasher.update(domain);
            hasher.update(counter.to_le_bytes());
            hasher.update([block]);
            candidate.extend_from_slice(&hasher.finalize());
        }
        if let Some(point) = G2Affine::from_random_bytes(&candidate) {
            return point.mul_by_cofactor_to_group();
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::Zero;

    #[test]
    fn test_pairing_base_matches_direct_pairing() {
        assert_eq!(pairing_base(), Bls12_381::pairing(g1(), g2()));
    }

    #[test]
    fn test_hash_to_g2_is_deterministic() {
        assert_eq!(hash_to_g2(b"domain"), hash_to_g2(b"domain"));
    }

    #[test]
    fn test_hash_to_g2_separates_domains() {
        assert_ne!(hash_to_g2(b"domain-a"), hash_to_g2(b"domain-b"));
    }

    #[test]
    fn test_hash_to_g2_avoids_degenerate_points() {
        let point = hash_to_g2(b"domain");
        assert!(!point.is_zero());
        assert_ne!(point, g2());
    }
}
