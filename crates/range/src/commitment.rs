//! Pedersen commitments over G2

use zkrp_core::{g2, Scalar, G2};
use zkrp_setup::PublicParams;

/// Pedersen commitment C = g2^value · h^blinding.
///
/// Pure function of its inputs; hiding relies on the caller drawing
/// `blinding` uniformly at random.
pub fn commit(value: Scalar, blinding: Scalar, params: &PublicParams) -> G2 {
    g2() * value + params.h * blinding
}
