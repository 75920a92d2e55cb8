//! Mesh representation.
//!
//! Provides the uniform 1D grid used for finite-difference derivatives:
//! - [`Mesh1D`]: nodes on `[0, width]` with first/second derivative operators
//! - [`MeshConfig`]: request a mesh by node count or by target spacing

mod config;
mod error;
mod mesh1d;

pub use config::{MeshConfig, MeshResolution};
pub use error::MeshError;
pub use mesh1d::Mesh1D;
