//! Authority key pair and per-digit signatures
//!
//! The authority signs each admissible digit with a Boneh-Boyen style short
//! signature A_v = g2^(1/(sk + v)). A signature verifies iff
//! e(y · g1^v, A_v) = e(g1, g2) for the verification key y = g1^sk.

use ark_bls12_381::Bls12_381;
use ark_ec::pairing::Pairing;
use ark_ff::{Field, UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::Rng;
use zkrp_core::{g1, g2, pairing_base, Scalar, ZkrpError, G1, G2};

/// Private signing scalar held by the parameter authority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningKey {
    sk: Scalar,
}

/// Public half of the authority key pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerificationKey(pub G1);

/// Authority signature on a single digit value
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct DigitSignature(pub G2);

impl SigningKey {
    /// Samples a fresh nonzero signing key
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut sk = Scalar::rand(rng);
        while sk.is_zero() {
            sk = Scalar::rand(rng);
        }
        Self { sk }
    }

    /// Derives the matching verification key y = g1^sk
    pub fn verification_key(&self) -> VerificationKey {
        VerificationKey(g1() * self.sk)
    }

    /// Signs a digit value: A_v = g2^(1/(sk + v))
    pub fn sign_digit(&self, value: u64) -> zkrp_core::Result<DigitSignature> {
        let exponent = self.sk + Scalar::from(value);
        let inverse = exponent.inverse().ok_or_else(|| {
            ZkrpError::InvalidParameters(format!("signing key collides with digit value {value}"))
        })?;
        Ok(DigitSignature(g2() * inverse))
    }

    /// Zeroes the private scalar in place
    pub(crate) fn erase(&mut self) {
        self.sk = Scalar::zero();
    }

    pub(crate) fn is_erased(&self) -> bool {
        self.sk.is_zero()
    }
}

impl DigitSignature {
    /// Checks the signature against a digit value and verification key
    pub fn verify(&self, value: u64, verification_key: &VerificationKey) -> bool {
        let statement = verification_key.0 + g1() * Scalar::from(value);
        Bls12_381::pairing(statement, self.0) == pairing_base()
    }
}
