//! Dense direct solvers for linear systems
//!
//! This crate provides LU and QR factorization for small-to-medium dense
//! systems, along with the triangular substitution both factorizations
//! feed into and the operations derived from them. No external solver
//! stack is required; everything is pure Rust over `ndarray`.
//!
//! # Features
//!
//! - **LU factorization**: Gaussian elimination with none/partial/full
//!   pivoting, satisfying `L·U = P1·A·P2`
//! - **QR factorization**: Householder reflections, satisfying `Q·R = A`
//! - **Solvers**: exact square solve ([`lusolve`]), least-squares solve
//!   ([`qrsolve`]), triangular substitution ([`trisolve`])
//! - **Derived operations**: [`determinant`], [`is_positive_definite`],
//!   [`ldu`]
//! - **Generic scalar types**: works with `f64` and `f32`
//!
//! # Example
//!
//! ```
//! use math_direct_solvers::{lusolve, lu, Pivoting};
//! use ndarray::array;
//!
//! let a = array![[4.0_f64, 1.0], [1.0, 3.0]];
//! let b = array![1.0_f64, 2.0];
//!
//! let factors = lu(&a, Pivoting::Partial, false)?;
//! assert_eq!(factors.swaps, 0);
//!
//! let x = lusolve(&a, &b)?;
//! let residual = &b - &a.dot(&x);
//! assert!(residual.iter().all(|r| r.abs() < 1e-12));
//! # Ok::<(), math_direct_solvers::SolverError>(())
//! ```
//!
//! All routines copy their inputs at the API boundary; a caller's matrix
//! is never mutated. Verbose flags only emit `log::debug!` traces of the
//! intermediate factors and never change return values.

pub mod error;
pub mod factor;
pub mod solve;
pub mod traits;
pub mod util;

// Re-export the error type
pub use error::SolverError;

// Re-export factorizations and derived operations
pub use factor::{
    determinant, is_positive_definite, ldu, lu, qr, LduFactors, LuFactors, Pivoting, QrFactors,
};

// Re-export solvers
pub use solve::{lusolve, qrsolve, trisolve, QrSolveMode, Triangle};

// Re-export utilities
pub use traits::RealScalar;
pub use util::{matrix_norm, norm, norm2, reflection_matrix, reflection_vector};
