//! Vector norms
//!
//! Provides the scalar p-norm used by the Householder construction and the
//! QR routines. The matrix norm is declared for API completeness but has no
//! working algorithm.

use crate::error::SolverError;
use crate::traits::RealScalar;
use ndarray::{ArrayView1, ArrayView2};

/// Compute the p-norm of a vector.
///
/// For `p = ∞` this is the maximum absolute component; otherwise
/// `(Σ|vᵢ|^p)^(1/p)`. Always defined for finite inputs.
pub fn norm<T: RealScalar>(v: ArrayView1<'_, T>, p: T) -> T {
    if p.is_infinite() {
        return v
            .iter()
            .fold(T::zero(), |acc, &vi| T::max(acc, vi.abs()));
    }

    let mut sum = T::zero();
    for &vi in v.iter() {
        sum += vi.abs().powf(p);
    }
    sum.powf(p.recip())
}

/// Compute the Euclidean norm: `||v||_2 = sqrt(Σ vᵢ²)`
#[inline]
pub fn norm2<T: RealScalar>(v: ArrayView1<'_, T>) -> T {
    let mut sum = T::zero();
    for &vi in v.iter() {
        sum += vi * vi;
    }
    sum.sqrt()
}

/// Matrix p-norm.
///
/// Declared for parity with [`norm`] but not implemented; always returns
/// [`SolverError::Unimplemented`].
pub fn matrix_norm<T: RealScalar>(_a: ArrayView2<'_, T>, _p: T) -> Result<T, SolverError> {
    Err(SolverError::Unimplemented("matrix norm"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_norm_one() {
        let v = array![1.0_f64, -2.0, 3.0];
        assert_relative_eq!(norm(v.view(), 1.0), 6.0);
    }

    #[test]
    fn test_norm_two() {
        let v = array![3.0_f64, 4.0];
        assert_relative_eq!(norm(v.view(), 2.0), 5.0);
        assert_relative_eq!(norm2(v.view()), 5.0);
    }

    #[test]
    fn test_norm_inf() {
        let v = array![1.0_f64, -7.0, 3.0];
        assert_relative_eq!(norm(v.view(), f64::INFINITY), 7.0);
    }

    #[test]
    fn test_norm_empty() {
        let v = ndarray::Array1::<f64>::zeros(0);
        assert_relative_eq!(norm(v.view(), 2.0), 0.0);
        assert_relative_eq!(norm(v.view(), f64::INFINITY), 0.0);
    }

    #[test]
    fn test_matrix_norm_unimplemented() {
        let a = array![[1.0_f64, 0.0], [0.0, 1.0]];
        let result = matrix_norm(a.view(), 2.0);
        assert!(matches!(result, Err(SolverError::Unimplemented(_))));
    }
}
