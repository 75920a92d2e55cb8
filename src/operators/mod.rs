//! Finite-difference derivative operators.
//!
//! Pure kernels over a sampled field and a uniform spacing. [`Mesh1D`]
//! wraps them with length checking.
//!
//! [`Mesh1D`]: crate::mesh::Mesh1D

mod finite_difference;

pub use finite_difference::{central_difference, second_central_difference};
