//! Exact solve via LU factorization

use crate::error::SolverError;
use crate::factor::{lu, Pivoting};
use crate::solve::trisolve::{trisolve, Triangle};
use crate::traits::RealScalar;
use ndarray::{Array1, Array2};

/// Solve the square system `A·x = b` exactly.
///
/// Factors `A` with partial pivoting, permutes `b`, then forward-solves
/// the unit lower triangular factor and back-solves the upper one.
///
/// # Errors
///
/// - [`SolverError::DimensionMismatch`] if `A` is not square or `b` does
///   not match its row count
/// - [`SolverError::SingularMatrix`] if elimination hits a zero pivot
pub fn lusolve<T: RealScalar>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>, SolverError> {
    let (m, n) = a.dim();
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

    let factors = lu(a, Pivoting::Partial, false)?;
    let pb = factors.p1.dot(b);

    let y = trisolve(&factors.l, &pb, Triangle::Lower)?;
    trisolve(&factors.u, &y, Triangle::Upper)
}
