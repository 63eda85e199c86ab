//! Triangular substitution
//!
//! Forward and back substitution for triangular systems. Both LU and QR
//! solves finish here. Only the requested triangle of the coefficient
//! matrix is ever read.

use crate::error::SolverError;
use crate::traits::RealScalar;
use ndarray::{Array1, Array2};
use std::str::FromStr;

/// Which triangle of the coefficient matrix holds the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Triangle {
    /// Upper triangular system, solved by back-substitution from the last
    /// unknown
    Upper,
    /// Lower triangular system, solved by forward-substitution from the
    /// first unknown
    Lower,
}

impl FromStr for Triangle {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upper" => Ok(Triangle::Upper),
            "lower" => Ok(Triangle::Lower),
            _ => Err(SolverError::InvalidConfiguration {
                what: "triangle kind",
                value: s.to_string(),
            }),
        }
    }
}

/// Solve the triangular system `T·x = b`.
///
/// `t` must be square and conformant with `b`; entries outside the
/// requested triangle are never read, so a full matrix may be passed and
/// only its triangle is used.
///
/// # Errors
///
/// - [`SolverError::DimensionMismatch`] if `t` is not square or `b` does
///   not match its row count
/// - [`SolverError::SingularMatrix`] if a diagonal entry encountered
///   during substitution is exactly zero
pub fn trisolve<T: RealScalar>(
    t: &Array2<T>,
    b: &Array1<T>,
    triangle: Triangle,
) -> Result<Array1<T>, SolverError> {
    let (m, n) = t.dim();
    if m != n {
        return Err(SolverError::DimensionMismatch {
            expected: m,
            got: n,
        });
    }
    if b.len() != m {
        return Err(SolverError::DimensionMismatch {
            expected: m,
            got: b.len(),
        });
    }

    let mut x = Array1::zeros(n);
    match triangle {
        Triangle::Upper => {
            for i in (0..n).rev() {
                let mut sum = T::zero();
                for j in (i + 1)..n {
                    sum += t[[i, j]] * x[j];
                }
                let d = t[[i, i]];
                if d == T::zero() {
                    return Err(SolverError::SingularMatrix { index: i });
                }
                x[i] = (b[i] - sum) / d;
            }
        }
        Triangle::Lower => {
            for i in 0..n {
                let mut sum = T::zero();
                for j in 0..i {
                    sum += t[[i, j]] * x[j];
                }
                let d = t[[i, i]];
                if d == T::zero() {
                    return Err(SolverError::SingularMatrix { index: i });
                }
                x[i] = (b[i] - sum) / d;
            }
        }
    }
    Ok(x)
}
