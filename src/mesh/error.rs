//! Errors raised by mesh construction and derivative evaluation.

use thiserror::Error;

/// Error type for mesh construction and derivative evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Fewer than two nodes requested.
    #[error("mesh needs at least 2 nodes, got {node_count}")]
    DegenerateMesh {
        /// Requested node count
        node_count: usize,
    },

    /// Field length differs from the mesh node count.
    #[error("field has {actual} values but the mesh has {expected} nodes")]
    LengthMismatch {
        /// Mesh node count
        expected: usize,
        /// Field length
        actual: usize,
    },

    /// Width is not finite or not positive.
    #[error("mesh width must be finite and positive, got {0}")]
    InvalidWidth(f64),

    /// Target spacing is not finite or not positive.
    #[error("mesh spacing must be finite and positive, got {0}")]
    InvalidSpacing(f64),
}
