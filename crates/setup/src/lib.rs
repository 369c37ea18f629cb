//! Trusted setup for signature-based range proofs
//!
//! The parameter authority signs every admissible digit value and fixes the
//! shared constants. Setup output is split into public material and the
//! private key so the latter never reaches provers or verifiers through the
//! API surface they use.

#![forbid(unsafe_code)]

pub mod keys;
pub mod params;

pub use keys::{DigitSignature, SigningKey, VerificationKey};
pub use params::{setup, PublicParams, SetupSecret};
