//! Householder reflections
//!
//! Given two vectors of equal Euclidean norm, builds the reflection that
//! maps one onto the other: either the unit normal `w = (x − y)/||x − y||`
//! of the reflecting hyperplane, or the full reflection matrix `I − 2wwᵀ`.
//! The QR routines only ever need the vector form and apply the reflection
//! implicitly.

use crate::error::SolverError;
use crate::traits::RealScalar;
use crate::util::norm::norm2;
use ndarray::{Array1, Array2, ArrayView1};

/// Compute the unit Householder vector `w = (x − y)/||x − y||`.
///
/// Precondition: `||x|| = ||y||` (the QR sweep guarantees this by
/// construction). Fails with [`SolverError::DegenerateReflection`] when
/// `x = y`, since the reflection vector then has zero length.
pub fn reflection_vector<T: RealScalar>(
    x: ArrayView1<'_, T>,
    y: ArrayView1<'_, T>,
) -> Result<Array1<T>, SolverError> {
    if x.len() != y.len() {
        return Err(SolverError::DimensionMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }

    let mut w = Array1::zeros(x.len());
    for (wi, (&xi, &yi)) in w.iter_mut().zip(x.iter().zip(y.iter())) {
        *wi = xi - yi;
    }

    let len = norm2(w.view());
    if len == T::zero() {
        return Err(SolverError::DegenerateReflection);
    }

    w.mapv_inplace(|wi| wi / len);
    Ok(w)
}

/// Compute the full reflection matrix `I − 2wwᵀ` mapping `x` onto `y`.
///
/// Same preconditions and failure modes as [`reflection_vector`].
pub fn reflection_matrix<T: RealScalar>(
    x: ArrayView1<'_, T>,
    y: ArrayView1<'_, T>,
) -> Result<Array2<T>, SolverError> {
    let w = reflection_vector(x, y)?;
    let m = w.len();

    let mut h = Array2::eye(m);
    for i in 0..m {
        for j in 0..m {
            h[[i, j]] = h[[i, j]] - T::two() * w[i] * w[j];
        }
    }
    Ok(h)
}
