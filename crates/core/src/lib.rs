//! # zkrp-core
//!
//! Shared building blocks for the signature-based range proof crates:
//! group aliases over BLS12-381, process-wide generator constants, the
//! Blake2-based Fiat-Shamir transcript, and the common error type.

#![forbid(unsafe_code)]

pub mod constants;
pub mod errors;
pub mod transcript;

pub use constants::{g1, g2, hash_to_g2, pairing_base};
pub use errors::{Result, ZkrpError};
pub use transcript::Transcript;

/// BLS12-381 scalar field, the exponent group for all protocol scalars
pub type Scalar = ark_bls12_381::Fr;

/// First pairing source group
pub type G1 = ark_bls12_381::G1Projective;

/// Second pairing source group, home of commitments and signatures
pub type G2 = ark_bls12_381::G2Projective;

/// Pairing target group
pub type Gt = ark_ec::pairing::PairingOutput<ark_bls12_381::Bls12_381>;
