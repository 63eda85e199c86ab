//! Shared numerical utilities
//!
//! - [`norm`]: scalar p-norm of a vector
//! - [`reflection_vector`] / [`reflection_matrix`]: Householder reflections

mod householder;
mod norm;

pub use householder::{reflection_matrix, reflection_vector};
pub use norm::{matrix_norm, norm, norm2};
