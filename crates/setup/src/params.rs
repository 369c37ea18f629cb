//! Public parameters and the setup secret
//!
//! Setup output is split in two: [`PublicParams`] is the long-lived, shared,
//! read-many material provers and verifiers use; [`SetupSecret`] is the
//! authority's private key and never travels with it.

use crate::keys::{DigitSignature, SigningKey, VerificationKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::Rng;
use zkrp_core::{hash_to_g2, ZkrpError, G2};

/// Domain tag for deriving the Pedersen generator H
const PEDERSEN_H_DOMAIN: &[u8] = b"zkrp-pedersen-generator-h-v1";

/// Public setup output shared by all provers and verifiers.
///
/// Immutable once created; the same base and digit count must back every
/// prove and verify call for a given proof.
#[derive(Debug, Clone, CanonicalSerialize, CanonicalDeserialize)]
pub struct PublicParams {
    /// One authority signature per digit value, indexed by the value
    pub digit_signatures: Vec<DigitSignature>,
    /// Pedersen blinding generator, derived by hashing a public seed to G2
    pub h: G2,
    /// Authority verification key
    pub verification_key: VerificationKey,
    /// Digit base u
    pub base: u64,
    /// Digit count l; the provable interval is [0, u^l)
    pub num_digits: usize,
}

/// Toxic-waste half of the setup output.
///
/// Holds the authority's signing key. Dropping it (or calling
/// [`destroy`](Self::destroy)) zeroes the scalar in place.
#[derive(Debug)]
pub struct SetupSecret {
    signing_key: SigningKey,
}

impl PublicParams {
    /// Signature on the given digit value, if it is an admissible digit
    pub fn signature_for(&self, digit: u64) -> Option<&DigitSignature> {
        usize::try_from(digit)
            .ok()
            .and_then(|index| self.digit_signatures.get(index))
    }
}

impl SetupSecret {
    /// The authority's signing key
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Zeroes the private scalar in place (best effort)
    pub fn destroy(&mut self) {
        self.signing_key.erase();
    }

    /// Whether the private scalar has been zeroed
    pub fn is_destroyed(&self) -> bool {
        self.signing_key.is_erased()
    }
}

impl Drop for SetupSecret {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Runs the trusted setup for the interval [0, base^num_digits).
///
/// Samples a fresh authority key pair, signs every digit value in
/// [0, base), and derives the Pedersen generator from a fixed public seed.
/// Public material and the private key come back as separate values.
pub fn setup<R: Rng>(
    base: u64,
    num_digits: usize,
    rng: &mut R,
) -> zkrp_core::Result<(PublicParams, SetupSecret)> {
    if base == 0 {
        return Err(ZkrpError::InvalidParameters(
            "digit base must be positive".into(),
        ));
    }
    if num_digits == 0 {
        return Err(ZkrpError::InvalidParameters(
            "digit count must be positive".into(),
        ));
    }

    let signing_key = SigningKey::generate(rng);
    let mut digit_signatures = Vec::with_capacity(base as usize);
    for value in 0..base {
        digit_signatures.push(signing_key.sign_digit(value)?);
    }

    let params = PublicParams {
        digit_signatures,
        h: hash_to_g2(PEDERSEN_H_DOMAIN),
        verification_key: signing_key.verification_key(),
        base,
        num_digits,
    };

    Ok((params, SetupSecret { signing_key }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;
    use zkrp_core::g2;

    #[test]
    fn test_setup_signs_every_digit() {
        let mut rng = thread_rng();
        let (params, _secret) = setup(4, 3, &mut rng).unwrap();

        assert_eq!(params.digit_signatures.len(), 4);
        for value in 0..4 {
            let signature = params.signature_for(value).unwrap();
            assert!(signature.verify(value, &params.verification_key));
        }
        assert!(params.signature_for(4).is_none());
    }

    #[test]
    fn test_setup_rejects_degenerate_dimensions() {
        let mut rng = thread_rng();
        assert!(matches!(
            setup(0, 3, &mut rng),
            Err(ZkrpError::InvalidParameters(_))
        ));
        assert!(matches!(
            setup(4, 0, &mut rng),
            Err(ZkrpError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_pedersen_generator_is_independent_of_base_point() {
        let mut rng = thread_rng();
        let (params, _secret) = setup(2, 4, &mut rng).unwrap();
        assert_ne!(params.h, g2());
    }

    #[test]
    fn test_pedersen_generator_is_reproducible() {
        let mut rng = thread_rng();
        let (first, _) = setup(2, 4, &mut rng).unwrap();
        let (second, _) = setup(3, 2, &mut rng).unwrap();
        assert_eq!(first.h, second.h);
    }

    #[test]
    fn test_secret_destroy_zeroes_key() {
        let mut rng = thread_rng();
        let (_params, mut secret) = setup(2, 4, &mut rng).unwrap();

        assert!(!secret.is_destroyed());
        secret.destroy();
        assert!(secret.is_destroyed());
    }

    #[test]
    fn test_params_serialization_roundtrip() {
        let mut rng = thread_rng();
        let (params, _secret) = setup(3, 2, &mut rng).unwrap();

        let mut bytes = Vec::new();
        params.serialize_compressed(&mut bytes).unwrap();
        let restored = PublicParams::deserialize_compressed(&bytes[..]).unwrap();

        assert_eq!(restored.base, params.base);
        assert_eq!(restored.num_digits, params.num_digits);
        assert_eq!(restored.h, params.h);
        assert_eq!(restored.verification_key, params.verification_key);
        assert_eq!(restored.digit_signatures, params.digit_signatures);
    }
}
