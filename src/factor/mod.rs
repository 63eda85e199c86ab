//! Dense matrix factorizations
//!
//! This module provides the factorization engines:
//! - [`lu`] / [`ldu`]: Gaussian elimination with none/partial/full pivoting
//! - [`qr`]: Householder orthogonal triangularization
//! - [`determinant`] and [`is_positive_definite`], derived from [`lu`]

mod lu;
mod qr;

pub use lu::{determinant, is_positive_definite, ldu, lu, LduFactors, LuFactors, Pivoting};
pub use qr::{qr, QrFactors};

pub(crate) use qr::column_reflector;
