//! LU factorization
//!
//! Gaussian elimination with configurable pivoting, plus the operations
//! derived from it: the LDU normalization, the determinant, and the
//! positive-definiteness test.

use crate::error::SolverError;
use crate::traits::RealScalar;
use ndarray::{Array1, Array2};
use std::str::FromStr;

/// Pivoting strategy for Gaussian elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivoting {
    /// No pivoting: pivots are taken from the diagonal as-is
    None,
    /// Partial pivoting: the largest entry in the pivot column is swapped
    /// into the pivot row
    #[default]
    Partial,
    /// Full pivoting: the largest entry in the trailing submatrix is
    /// swapped into the pivot position by a row and a column swap
    Full,
}

impl FromStr for Pivoting {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Pivoting::None),
            "partial" => Ok(Pivoting::Partial),
            "full" => Ok(Pivoting::Full),
            _ => Err(SolverError::InvalidConfiguration {
                what: "pivoting mode",
                value: s.to_string(),
            }),
        }
    }
}

/// LU factorization result
///
/// Holds the factors and permutations satisfying `L·U = P1·A·P2`.
#[derive(Debug, Clone)]
pub struct LuFactors<T: RealScalar> {
    /// Unit lower triangular factor (m×m, diagonal exactly 1)
    pub l: Array2<T>,
    /// Upper triangular factor (m×n)
    pub u: Array2<T>,
    /// Row permutation (m×m; identity unless row pivoting occurred)
    pub p1: Array2<T>,
    /// Column permutation (n×n; identity unless full pivoting swapped columns)
    pub p2: Array2<T>,
    /// Count of non-trivial row/column swaps; the determinant sign is (−1)^swaps
    pub swaps: usize,
}

/// LDU factorization result
///
/// Holds the factors satisfying `L·D·U = P1·A·P2`, with `U` unit upper
/// triangular and `D` diagonal.
#[derive(Debug, Clone)]
pub struct LduFactors<T: RealScalar> {
    /// Unit lower triangular factor (m×m)
    pub l: Array2<T>,
    /// Diagonal factor (m×m)
    pub d: Array2<T>,
    /// Unit upper triangular factor (m×n)
    pub u: Array2<T>,
    /// Row permutation (m×m)
    pub p1: Array2<T>,
    /// Column permutation (n×n)
    pub p2: Array2<T>,
    /// Count of non-trivial row/column swaps
    pub swaps: usize,
}

/// Compute the LU factorization of `a` with the requested pivoting.
///
/// Returns factors satisfying `L·U = P1·A·P2` for an m×n matrix with
/// m ≥ n. The input is copied; the caller's matrix is never mutated.
/// `swaps` counts the row and column swaps that actually moved data
/// (a pivot already in place does not count), so `(−1)^swaps` is the
/// permutation sign.
///
/// With `verbose` set, the intermediate factors are traced through
/// `log::debug!` after each elimination step; return values are
/// unaffected.
///
/// # Errors
///
/// - [`SolverError::DimensionMismatch`] if m < n
/// - [`SolverError::SingularMatrix`] if a pivot is exactly zero after
///   pivoting (elimination cannot proceed meaningfully)
pub fn lu<T: RealScalar>(
    a: &Array2<T>,
    pivoting: Pivoting,
    verbose: bool,
) -> Result<LuFactors<T>, SolverError> {
    let (m, n) = a.dim();
    if m < n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: m,
        });
    }

    let mut u = a.to_owned();
    let mut l = Array2::zeros((m, m));
    let mut p1 = Array2::eye(m);
    let mut p2 = Array2::eye(n);
    let mut swaps = 0usize;

    for i in 0..n {
        match pivoting {
            Pivoting::None => {}
            Pivoting::Partial => {
                let mut best = i;
                let mut best_val = u[[i, i]].abs();
                for k in (i + 1)..m {
                    let val = u[[k, i]].abs();
                    if val > best_val {
                        best_val = val;
                        best = k;
                    }
                }
                if best != i {
                    swap_rows(&mut u, i, best);
                    swap_rows(&mut p1, i, best);
                    swap_rows(&mut l, i, best);
                    swaps += 1;
                }
            }
            Pivoting::Full => {
                let mut best = (i, i);
                let mut best_val = u[[i, i]].abs();
                for k in i..m {
                    for j in i..n {
                        let val = u[[k, j]].abs();
                        if val > best_val {
                            best_val = val;
                            best = (k, j);
                        }
                    }
                }
                // Row and column swaps count toward the parity independently.
                if best.0 != i {
                    swap_rows(&mut u, i, best.0);
                    swap_rows(&mut p1, i, best.0);
                    swap_rows(&mut l, i, best.0);
                    swaps += 1;
                }
                if best.1 != i {
                    swap_cols(&mut u, i, best.1);
                    swap_cols(&mut p2, i, best.1);
                    swaps += 1;
                }
            }
        }

        let pivot = u[[i, i]];
        if pivot == T::zero() {
            return Err(SolverError::SingularMatrix { index: i });
        }

        for k in (i + 1)..m {
            let mult = u[[k, i]] / pivot;
            u[[k, i]] = T::zero();
            for j in (i + 1)..n {
                let update = mult * u[[i, j]];
                u[[k, j]] -= update;
            }
            l[[k, i]] = mult;
        }
        l[[i, i]] = T::one();

        if verbose {
            log::debug!("lu step {}: L =\n{}\nU =\n{}", i, l, u);
        }
    }

    // Trailing columns of L (tall matrices) carry only the unit diagonal.
    for i in n..m {
        l[[i, i]] = T::one();
    }

    Ok(LuFactors { l, u, p1, p2, swaps })
}

/// Compute the LDU factorization of `a`.
///
/// Runs [`lu`] and normalizes the upper factor: the diagonal of `U` moves
/// into `D` and each row of `U` is scaled so its diagonal entry is exactly
/// 1. Returns factors satisfying `L·D·U = P1·A·P2`.
///
/// # Errors
///
/// Same conditions as [`lu`]. The normalization itself cannot divide by
/// zero: a zero diagonal entry would already have failed elimination.
pub fn ldu<T: RealScalar>(
    a: &Array2<T>,
    pivoting: Pivoting,
    verbose: bool,
) -> Result<LduFactors<T>, SolverError> {
    let factors = lu(a, pivoting, verbose)?;
    let (m, n) = factors.u.dim();

    let mut u = factors.u;
    let mut diag = Array1::ones(m);
    for i in 0..n {
        let d_i = u[[i, i]];
        diag[i] = d_i;
        u[[i, i]] = T::one();
        for j in (i + 1)..n {
            u[[i, j]] /= d_i;
        }
    }
    // Rows past the n-th of U are zero, so the padding ones in D are inert.
    let d = Array2::from_diag(&diag);

    Ok(LduFactors {
        l: factors.l,
        d,
        u,
        p1: factors.p1,
        p2: factors.p2,
        swaps: factors.swaps,
    })
}

/// Compute the determinant of a square matrix via partially pivoted LU.
///
/// `det(A) = (∏ diag U)·(−1)^swaps`.
///
/// # Errors
///
/// - [`SolverError::DimensionMismatch`] if `a` is not square
/// - [`SolverError::SingularMatrix`] if elimination hits a zero pivot.
///   The determinant is mathematically zero in that case, but degeneracy
///   is surfaced as an error rather than silently returned as 0.
pub fn determinant<T: RealScalar>(a: &Array2<T>) -> Result<T, SolverError> {
    let (m, n) = a.dim();
    if m != n {
        return Err(SolverError::DimensionMismatch {
            expected: m,
            got: n,
        });
    }

    let factors = lu(a, Pivoting::Partial, false)?;
    let mut det = factors.u.diag().iter().fold(T::one(), |acc, &d| acc * d);
    if factors.swaps % 2 == 1 {
        det = -det;
    }
    Ok(det)
}

/// Test whether a square symmetric matrix is positive definite.
///
/// Runs unpivoted elimination; the matrix is positive definite iff the
/// elimination completes and every diagonal entry of `U` is strictly
/// positive.
///
/// # Errors
///
/// - [`SolverError::DimensionMismatch`] if `a` is not square
/// - [`SolverError::SingularMatrix`] propagates as-is: a singular matrix
///   is indeterminate, not "not positive definite". Any other internal
///   elimination failure is reported as `Ok(false)`.
pub fn is_positive_definite<T: RealScalar>(a: &Array2<T>) -> Result<bool, SolverError> {
    let (m, n) = a.dim();
    if m != n {
        return Err(SolverError::DimensionMismatch {
            expected: m,
            got: n,
        });
    }

    match lu(a, Pivoting::None, false) {
        Ok(factors) => Ok(factors.u.diag().iter().all(|&d| d > T::zero())),
        Err(e @ SolverError::SingularMatrix { .. }) => Err(e),
        Err(_) => Ok(false),
    }
}

fn swap_rows<T: RealScalar>(a: &mut Array2<T>, i: usize, j: usize) {
    if i == j {
        return;
    }
    for col in 0..a.ncols() {
        a.swap((i, col), (j, col));
    }
}

fn swap_cols<T: RealScalar>(a: &mut Array2<T>, i: usize, j: usize) {
    if i == j {
        return;
    }
    for row in 0..a.nrows() {
        a.swap((row, i), (row, j));
    }
}
