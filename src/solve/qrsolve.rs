//! Least-squares solve via QR
//!
//! Overdetermined systems are solved in a single fused Householder pass:
//! each reflection is applied to the trailing block of the working matrix
//! and to the right-hand side at the same time, accumulating `Qᵀb` without
//! ever materializing `Q`. The underdetermined path is declared but has no
//! working algorithm.

use crate::error::SolverError;
use crate::factor::column_reflector;
use crate::solve::trisolve::{trisolve, Triangle};
use crate::traits::RealScalar;
use ndarray::{s, Array1, Array2};

/// Shape of the least-squares system handed to [`qrsolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrSolveMode {
    /// m ≥ n: minimize `||A·x − b||₂`
    #[default]
    Overdetermined,
    /// m < n: minimum-norm solution; not implemented
    Underdetermined,
}

/// Solve `A·x = b` in the least-squares sense.
///
/// The overdetermined path runs the fused Householder pass described in
/// the module docs and finishes with a back-substitution on the top n×n
/// block of the triangularized matrix. For a square invertible `A` this
/// reproduces the exact solution.
///
/// # Errors
///
/// - [`SolverError::DimensionMismatch`] if `b` does not match the row
///   count of `A`, or m < n on the overdetermined path
/// - [`SolverError::SingularMatrix`] if the triangularized system has a
///   zero diagonal (rank-deficient `A`)
/// - [`SolverError::Unimplemented`] for the underdetermined path
pub fn qrsolve<T: RealScalar>(
    a: &Array2<T>,
    b: &Array1<T>,
    mode: QrSolveMode,
) -> Result<Array1<T>, SolverError> {
    match mode {
        QrSolveMode::Overdetermined => overdetermined_solve(a, b),
        QrSolveMode::Underdetermined => Err(SolverError::Unimplemented(
            "underdetermined least-squares solve",
        )),
    }
}

fn overdetermined_solve<T: RealScalar>(
    a: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, SolverError> {
    let (m, n) = a.dim();
    if b.len() != m {
        return Err(SolverError::DimensionMismatch {
            expected: m,
            got: b.len(),
        });
    }
    if m < n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: m,
        });
    }

    let mut r = a.to_owned();
    let mut c = b.to_owned();

    for col in 0..n {
        if r.slice(s![col + 1.., col]).iter().all(|&v| v == T::zero()) {
            continue;
        }

        let w = column_reflector(&r, col, T::one())?;
        let active = m - col;

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
        for k in 1..active {
            r[[col + k, col]] = T::zero();
        }

        // Same reflection applied to the right-hand side: c ← Qᵀb, built up
        // one reflection at a time.
        let mut dot = T::zero();
        for k in 0..active {
            dot += w[k] * c[col + k];
        }
        let scale = T::two() * dot;
        for k in 0..active {
            c[col + k] -= scale * w[k];
        }
    }

    let r_top = r.slice(s![..n, ..n]).to_owned();
    let c_top = c.slice(s![..n]).to_owned();
    trisolve(&r_top, &c_top, Triangle::Upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_qrsolve_square_exact() {
        let a = array![[4.0_f64, 1.0], [1.0, 3.0]];
        let b = array![1.0_f64, 2.0];
        let x = qrsolve(&a, &b, QrSolveMode::Overdetermined).expect("solve should succeed");

        let ax = a.dot(&x);
        for i in 0..2 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_qrsolve_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(47);
        for n in [2, 4, 6] {
            let mut a = Array2::from_shape_fn((n, n), |_| rng.random_range(-1.0..1.0));
            for i in 0..n {
                a[[i, i]] += n as f64;
            }
            let x_true = Array1::from_shape_fn(n, |_| rng.random_range(-1.0..1.0));
            let b = a.dot(&x_true);

            let x = qrsolve(&a, &b, QrSolveMode::Overdetermined).expect("solve should succeed");
            for i in 0..n {
                assert_relative_eq!(x[i], x_true[i], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_qrsolve_consistent_tall_system() {
        // b lies in the column space, so the least-squares solution is exact.
        let mut rng = StdRng::seed_from_u64(53);
        let a = Array2::from_shape_fn((6, 3), |_| rng.random_range(-1.0..1.0));
        let x_true = array![1.5_f64, -2.0, 0.5];
        let b = a.dot(&x_true);

        let x = qrsolve(&a, &b, QrSolveMode::Overdetermined).expect("solve should succeed");
        for i in 0..3 {
            assert_relative_eq!(x[i], x_true[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_qrsolve_least_squares_residual_orthogonal() {
        // The least-squares residual must be orthogonal to the column space.
        let a = array![
            [1.0_f64, 1.0],
            [1.0, 2.0],
            [1.0, 3.0],
            [1.0, 4.0]
        ];
        let b = array![6.0_f64, 5.0, 7.0, 10.0];

        let x = qrsolve(&a, &b, QrSolveMode::Overdetermined).expect("solve should succeed");

        let residual = &b - &a.dot(&x);
        let atr = a.t().dot(&residual);
        for i in 0..2 {
            assert_relative_eq!(atr[i], 0.0, epsilon = 1e-10);
        }

        // Known closed-form line fit for this data: intercept 3.5, slope 1.4.
        assert_relative_eq!(x[0], 3.5, epsilon = 1e-10);
        assert_relative_eq!(x[1], 1.4, epsilon = 1e-10);
    }

    #[test]
    fn test_qrsolve_underdetermined_unimplemented() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = array![1.0_f64, 2.0];
        let result = qrsolve(&a, &b, QrSolveMode::Underdetermined);
        assert!(matches!(result, Err(SolverError::Unimplemented(_))));
    }

    #[test]
    fn test_qrsolve_rejects_rhs_mismatch() {
        let a = array![[1.0_f64, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let b = array![1.0_f64, 2.0];
        let result = qrsolve(&a, &b, QrSolveMode::Overdetermined);
        assert!(matches!(
            result,
            Err(SolverError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn test_qrsolve_rejects_wide_overdetermined() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = array![1.0_f64, 2.0];
        let result = qrsolve(&a, &b, QrSolveMode::Overdetermined);
        assert!(matches!(result, Err(SolverError::DimensionMismatch { .. })));
    }
}
