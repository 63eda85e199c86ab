//! Error types shared by every factorization and solve routine
//!
//! All failures are reported through the single [`SolverError`] enum so
//! callers can match on the failure kind by value. The positive-definiteness
//! test in particular relies on distinguishing [`SolverError::SingularMatrix`]
//! from every other variant.

use thiserror::Error;

/// Errors that can occur during factorization or solving
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Operand shapes are incompatible with the requested operation.
    ///
    /// Also raised for malformed sign vectors passed to the QR routines.
    #[error("matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A free-form option string did not parse to a recognized variant.
    #[error("unrecognized {what}: {value:?}")]
    InvalidConfiguration { what: &'static str, value: String },

    /// A pivot or substitution diagonal entry is exactly zero.
    ///
    /// Fatal within the call: elimination or substitution cannot proceed
    /// meaningfully past a zero diagonal.
    #[error("matrix is singular: zero pivot at index {index}")]
    SingularMatrix { index: usize },

    /// Householder construction was given two identical vectors, so the
    /// reflection vector has zero length and cannot be normalized.
    #[error("degenerate reflection: input vectors coincide")]
    DegenerateReflection,

    /// The operation is declared but has no working algorithm.
    #[error("{0} is not implemented")]
    Unimplemented(&'static str),
}
