//! Scalar abstraction for the direct solvers
//!
//! This module defines [`RealScalar`], the trait every factorization and
//! solve routine is generic over. It plays the same role `ComplexField`
//! plays in iterative-solver libraries, restricted to real arithmetic:
//! pivot selection and the positive-definiteness test compare entries with
//! `<`/`>`, which has no meaning for complex scalars.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for real scalar types usable in the dense direct solvers.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most applications)
/// - `f32` (for memory-constrained applications)
///
/// `Display` is required so verbose traces can format intermediate
/// matrices.
pub trait RealScalar:
    Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Display + Send + Sync + 'static
{
    /// The constant 2, used by Euclidean norms and reflections.
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl RealScalar for f64 {}

impl RealScalar for f32 {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two() {
        assert_relative_eq!(<f64 as RealScalar>::two(), 2.0);
        assert_relative_eq!(<f32 as RealScalar>::two(), 2.0_f32);
    }

    #[test]
    fn test_float_ops_available() {
        let x: f64 = -3.0;
        assert_relative_eq!(x.abs(), 3.0);
        assert!(f64::infinity().is_infinite());
    }
}
