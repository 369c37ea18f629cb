//! Error types shared across the range proof crates

use thiserror::Error;

/// Main error type for range proof operations.
///
/// An invalid proof is never an error: the verifier reports it by returning
/// false. These variants cover fatal configuration problems and byte-level
/// decoding failures only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZkrpError {
    /// Invalid setup input: degenerate digit base, digit count, or key
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Secret value outside the provable interval
    #[error("Value {value} is not in range [0, {base}^{num_digits})")]
    OutOfRange {
        value: u64,
        base: u64,
        num_digits: usize,
    },

    /// Byte-level decoding failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for range proof operations
pub type Result<T> = std::result::Result<T, ZkrpError>;
