//! QR factorization
//!
//! Householder-based orthogonal triangularization. Reflections are applied
//! implicitly to the trailing block of the working matrix and accumulated
//! into Q by right-multiplication; no reflection matrix is ever formed.

use crate::error::SolverError;
use crate::traits::RealScalar;
use crate::util::{norm2, reflection_vector};
use ndarray::{s, Array1, Array2};

/// QR factorization result
///
/// Holds the factors satisfying `Q·R = A` with `Q` orthogonal and `R`
/// upper triangular.
#[derive(Debug, Clone)]
pub struct QrFactors<T: RealScalar> {
    /// Orthogonal factor (m×m)
    pub q: Array2<T>,
    /// Upper triangular factor (m×n)
    pub r: Array2<T>,
}

/// Compute the QR factorization of `a` via Householder reflections.
///
/// Works for m×n matrices with m ≥ n. The optional `signs` vector (length
/// n, default all +1) fixes the sign of each diagonal entry of `R`. The
/// input is copied; the caller's matrix is never mutated.
///
/// Columns that are already zero below the diagonal are skipped: no
/// reflection is needed there and building one would divide by zero.
///
/// With `verbose` set, the intermediate factors are traced through
/// `log::debug!` after each reflection; return values are unaffected.
///
/// # Errors
///
/// [`SolverError::DimensionMismatch`] if m < n or the sign vector does not
/// have length n.
pub fn qr<T: RealScalar>(
    a: &Array2<T>,
    signs: Option<&Array1<T>>,
    verbose: bool,
) -> Result<QrFactors<T>, SolverError> {
    let (m, n) = a.dim();
    if m < n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: m,
        });
    }
    if let Some(signs) = signs {
        if signs.len() != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: signs.len(),
            });
        }
    }

    let mut r = a.to_owned();
    let mut q = Array2::eye(m);

    for col in 0..n {
        if r.slice(s![col + 1.., col]).iter().all(|&v| v == T::zero()) {
            continue;
        }

        let sign = signs.map_or(T::one(), |signs| signs[col]);
        let w = column_reflector(&r, col, sign)?;
        let active = m - col;

        // R[col.., col..] ← (I − 2wwᵀ)·R[col.., col..]
        for j in col..n {
            let mut dot = T::zero();
            for k in 0..active {
                dot += w[k] * r[[col + k, j]];
            }
            let scale = T::two() * dot;
            for k in 0..active {
                r[[col + k, j]] -= scale * w[k];
            }
        }
        // The reflection zeroes the column below the pivot by construction;
        // store exact zeros rather than roundoff residue.
        for k in 1..active {
            r[[col + k, col]] = T::zero();
        }

        // Q[.., col..] ← Q[.., col..]·(I − 2wwᵀ)
        for row in 0..m {
            let mut dot = T::zero();
            for k in 0..active {
                dot += q[[row, col + k]] * w[k];
            }
            let scale = T::two() * dot;
            for k in 0..active {
                q[[row, col + k]] -= scale * w[k];
            }
        }

        if verbose {
            log::debug!("qr step {}: Q =\n{}\nR =\n{}", col, q, r);
        }
    }

    Ok(QrFactors { q, r })
}

/// Build the unit Householder vector sending column `col` of the working
/// matrix (restricted to rows `col..`) onto `sign·||x||·e₁`.
pub(crate) fn column_reflector<T: RealScalar>(
    r: &Array2<T>,
    col: usize,
    sign: T,
) -> Result<Array1<T>, SolverError> {
    let x = r.slice(s![col.., col]).to_owned();
    let mut y = Array1::zeros(x.len());
    y[0] = sign * norm2(x.view());
    reflection_vector(x.view(), y.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix(m: usize, n: usize, rng: &mut StdRng) -> Array2<f64> {
        Array2::from_shape_fn((m, n), |_| rng.random_range(-1.0..1.0))
    }

    fn assert_orthogonal(q: &Array2<f64>) {
        let m = q.nrows();
        let qtq = q.t().dot(q);
        for i in 0..m {
            for j in 0..m {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(qtq[[i, j]], expected, epsilon = 1e-10);
            }
        }
    }

    fn assert_reconstructs(a: &Array2<f64>, f: &QrFactors<f64>) {
        let qr = f.q.dot(&f.r);
        for (x, y) in qr.iter().zip(a.iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_qr_square() {
        let mut rng = StdRng::seed_from_u64(23);
        for n in [2, 3, 5] {
            let a = random_matrix(n, n, &mut rng);
            let f = qr(&a, None, false).expect("QR should succeed");

            assert_orthogonal(&f.q);
            assert_reconstructs(&a, &f);
            for i in 0..n {
                for j in 0..i {
                    assert_relative_eq!(f.r[[i, j]], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_qr_tall() {
        let mut rng = StdRng::seed_from_u64(29);
        let a = random_matrix(6, 3, &mut rng);
        let f = qr(&a, None, false).expect("QR should succeed");

        assert_eq!(f.q.dim(), (6, 6));
        assert_eq!(f.r.dim(), (6, 3));
        assert_orthogonal(&f.q);
        assert_reconstructs(&a, &f);
        // Rows past the n-th of R are zero.
        for i in 3..6 {
            for j in 0..3 {
                assert_relative_eq!(f.r[[i, j]], 0.0);
            }
        }
    }

    #[test]
    fn test_qr_default_signs_positive_diagonal() {
        // Tall so every column has entries below the diagonal and gets a
        // reflection; a square matrix always skips its last column.
        let mut rng = StdRng::seed_from_u64(31);
        let a = random_matrix(6, 4, &mut rng);
        let f = qr(&a, None, false).expect("QR should succeed");
        for i in 0..4 {
            assert!(f.r[[i, i]] > 0.0);
        }
    }

    #[test]
    fn test_qr_sign_vector() {
        let mut rng = StdRng::seed_from_u64(37);
        let a = random_matrix(5, 3, &mut rng);
        let signs = array![-1.0_f64, 1.0, -1.0];
        let f = qr(&a, Some(&signs), false).expect("QR should succeed");

        assert_reconstructs(&a, &f);
        assert!(f.r[[0, 0]] < 0.0);
        assert!(f.r[[1, 1]] > 0.0);
        assert!(f.r[[2, 2]] < 0.0);
    }

    #[test]
    fn test_qr_already_triangular_columns_skipped() {
        // Upper triangular input: every column is zero below the diagonal,
        // so Q stays the identity and R is the input itself.
        let a = array![[2.0_f64, 1.0], [0.0, 3.0]];
        let f = qr(&a, None, false).expect("QR should succeed");

        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(f.q[[i, j]], expected);
                assert_relative_eq!(f.r[[i, j]], a[[i, j]]);
            }
        }
    }

    #[test]
    fn test_qr_wide_matrix_rejected() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let result = qr(&a, None, false);
        assert!(matches!(result, Err(SolverError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_qr_bad_sign_vector_rejected() {
        let a = array![[1.0_f64, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let signs = array![1.0_f64, 1.0, 1.0];
        let result = qr(&a, Some(&signs), false);
        assert!(matches!(
            result,
            Err(SolverError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        ));
    }
}
