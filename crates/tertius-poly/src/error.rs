//! Error types for polynomial arithmetic.

use tertius_nmod::ModulusError;
use thiserror::Error;

/// Errors that can occur in polynomial arithmetic over `Z/nZ`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A leading coefficient or scalar had no inverse.
    #[error(transparent)]
    Modulus(#[from] ModulusError),

    /// Division by the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// Two operands were defined over different moduli.
    #[error("modulus mismatch: {0} and {1}")]
    ModulusMismatch(u64, u64),
}
