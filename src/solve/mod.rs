//! Solvers for linear systems
//!
//! - [`trisolve`]: forward/back substitution for triangular systems
//! - [`lusolve`]: exact square solve via partially pivoted LU
//! - [`qrsolve`]: least-squares solve via a fused Householder pass

mod lusolve;
mod qrsolve;
mod trisolve;

pub use lusolve::lusolve;
pub use qrsolve::{qrsolve, QrSolveMode};
pub use trisolve::{trisolve, Triangle};
