//! 1D uniform finite-difference mesh.
//!
//! A 1D mesh is `node_count` evenly spaced nodes covering `[0, width]`,
//! both ends included.

use std::fmt;

use tracing::debug;

use super::config::{MeshConfig, MeshResolution};
use super::MeshError;
use crate::operators::{central_difference, second_central_difference};
use crate::types::NodeIndex;

/// Uniform 1D mesh of `[0, width]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh1D {
    width: f64,
    node_count: usize,
    spacing: f64,
    /// positions[i] = i * spacing, with positions[n-1] == width exactly
    positions: Vec<f64>,
}

impl Mesh1D {
    /// Create a uniform mesh of `[0, width]` with `node_count` nodes.
    ///
    /// # Errors
    ///
    /// - [`MeshError::DegenerateMesh`] if `node_count < 2`
    /// - [`MeshError::InvalidWidth`] if `width` is not finite and positive
    ///
    /// # Example
    ///
    /// ```
    /// use rctmod::mesh::Mesh1D;
    ///
    /// let mesh = Mesh1D::new(10.0, 11).unwrap();
    /// assert_eq!(mesh.spacing(), 1.0);
    /// assert_eq!(mesh.positions()[3], 3.0);
    /// ```
    pub fn new(width: f64, node_count: usize) -> Result<Self, MeshError> {
        if node_count < 2 {
            return Err(MeshError::DegenerateMesh { node_count });
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(MeshError::InvalidWidth(width));
        }

        let spacing = width / (node_count - 1) as f64;
        let mut positions: Vec<f64> = (0..node_count).map(|i| i as f64 * spacing).collect();
        positions[node_count - 1] = width;

        debug!(width, node_count, spacing, "mesh built");

        Ok(Self {
            width,
            node_count,
            spacing,
            positions,
        })
    }

    /// Create a mesh whose spacing is as close as possible to `spacing`.
    ///
    /// The node count is `round(width / spacing) + 1`; the actual spacing is
    /// then recomputed so the last node lands on `width`.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidSpacing`] if `spacing` is not finite and positive,
    ///   or so small that the node count does not fit in a `usize`
    /// - [`MeshError::InvalidWidth`] if `width` is not finite and positive
    /// - [`MeshError::DegenerateMesh`] if `spacing` is coarser than `width`
    ///   and rounds to fewer than two nodes
    pub fn with_spacing(width: f64, spacing: f64) -> Result<Self, MeshError> {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(MeshError::InvalidSpacing(spacing));
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(MeshError::InvalidWidth(width));
        }

        let intervals = (width / spacing).round();
        if !(intervals < usize::MAX as f64) {
            return Err(MeshError::InvalidSpacing(spacing));
        }
        let node_count = (intervals as usize)
            .checked_add(1)
            .ok_or(MeshError::InvalidSpacing(spacing))?;
        Self::new(width, node_count)
    }

    /// Create a mesh from a [`MeshConfig`].
    pub fn from_config(config: &MeshConfig) -> Result<Self, MeshError> {
        match config.resolution {
            MeshResolution::NodeCount(n) => Self::new(config.width, n),
            MeshResolution::Spacing(h) => Self::with_spacing(config.width, h),
        }
    }

    /// Mesh extent.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Distance between adjacent nodes.
    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Node positions in ascending order.
    #[inline]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Position of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not below [`Mesh1D::node_count`].
    #[inline]
    pub fn position(&self, node: NodeIndex) -> f64 {
        self.positions[node]
    }

    /// Evaluate `f` at every node.
    pub fn sample<F: Fn(f64) -> f64>(&self, f: F) -> Vec<f64> {
        self.positions.iter().map(|&x| f(x)).collect()
    }

    /// First derivative by central differences.
    ///
    /// Interior: `(f[i+1] - f[i-1]) / (2h)`. The edge values copy the nearest
    /// interior value. Exact for linear fields at every node when the mesh
    /// has at least three nodes. A two-node mesh has no interior node and
    /// the result is all zeros.
    ///
    /// # Errors
    ///
    /// [`MeshError::LengthMismatch`] if `field.len() != node_count`.
    pub fn central_difference(&self, field: &[f64]) -> Result<Vec<f64>, MeshError> {
        self.check_len(field)?;
        Ok(central_difference(field, self.spacing))
    }

    /// Second derivative by central differences.
    ///
    /// Interior: `(f[i+1] - 2 f[i] + f[i-1]) / h^2`, edges copied from the
    /// nearest interior value. A two-node mesh has no interior node and the
    /// result is all zeros.
    ///
    /// # Errors
    ///
    /// [`MeshError::LengthMismatch`] if `field.len() != node_count`.
    pub fn second_central_difference(&self, field: &[f64]) -> Result<Vec<f64>, MeshError> {
        self.check_len(field)?;
        Ok(second_central_difference(field, self.spacing))
    }

    fn check_len(&self, field: &[f64]) -> Result<(), MeshError> {
        if field.len() != self.node_count {
            return Err(MeshError::LengthMismatch {
                expected: self.node_count,
                actual: field.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Mesh1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mesh1D: width = {} m, nx = {}, delx = {} m",
            self.width, self.node_count, self.spacing
        )
    }
}
