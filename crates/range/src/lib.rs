//! # Signature-Based Range Proofs
//!
//! Non-interactive zero-knowledge proofs that a committed value lies in
//! `[0, u^l)`, following the signature-based approach of Camenisch,
//! Chaabouni, and shelat over a bilinear pairing group.
//!
//! ## Mathematical Background
//!
//! A value `x` is written in base `u` as `l` digits, `x = Σ(d_i * u^i)`.
//! The authority publishes a signature on every admissible digit value.
//! For each digit of `x` the prover randomizes the matching signature and
//! commits to the digit and randomizer in the pairing target group; a
//! Fiat-Shamir challenge then ties those commitments to a Pedersen
//! commitment of `x`, so the verifier learns that every digit carries an
//! authority signature without learning the digits.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ark_ff::UniformRand;
//! use rand::thread_rng;
//! use zkrp_core::Scalar;
//! use zkrp_range::{prove, verify};
//! use zkrp_setup::setup;
//!
//! let mut rng = thread_rng();
//! let (params, _secret) = setup(10, 4, &mut rng).unwrap();
//!
//! // Prove that 1234 lies in [0, 10^4)
//! let blinding = Scalar::rand(&mut rng);
//! let proof = prove(1234, blinding, &params, &mut rng).unwrap();
//! assert!(verify(&proof, &params, &params.verification_key));
//! ```

pub mod commitment;
pub mod decompose;
pub mod proof;
pub mod prover;
pub mod verifier;

#[cfg(test)]
mod property_tests;

pub use commitment::commit;
pub use decompose::{decompose, range_bound, recompose};
pub use proof::{derive_challenge, RangeProof};
pub use prover::prove;
pub use verifier::verify;
