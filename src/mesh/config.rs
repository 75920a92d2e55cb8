//! Mesh configuration.

/// How the mesh resolution is specified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeshResolution {
    /// Fixed number of nodes, both ends included.
    NodeCount(usize),
    /// Target node spacing; the node count is `round(width / spacing) + 1`.
    Spacing(f64),
}

impl Default for MeshResolution {
    fn default() -> Self {
        MeshResolution::NodeCount(11)
    }
}

/// Configuration for [`Mesh1D::from_config`](super::Mesh1D::from_config).
///
/// # Example
///
/// ```
/// use rctmod::mesh::{Mesh1D, MeshConfig};
///
/// let config = MeshConfig::new(10e-2).with_spacing(1e-3);
/// let mesh = Mesh1D::from_config(&config).unwrap();
/// assert_eq!(mesh.node_count(), 101);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshConfig {
    /// Extent of the mesh, `[0, width]` (m)
    pub width: f64,
    /// Resolution specification
    pub resolution: MeshResolution,
}

impl MeshConfig {
    /// Configuration for the given width with the default 11 nodes.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            resolution: MeshResolution::default(),
        }
    }

    /// Use a fixed node count.
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.resolution = MeshResolution::NodeCount(node_count);
        self
    }

    /// Use a target spacing.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.resolution = MeshResolution::Spacing(spacing);
        self
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MeshConfig::default();
        assert_eq!(config.width, 1.0);
        assert_eq!(config.resolution, MeshResolution::NodeCount(11));
    }

    #[test]
    fn test_builder_last_call_wins() {
        let config = MeshConfig::new(2.0).with_spacing(0.1).with_node_count(5);
        assert_eq!(config.resolution, MeshResolution::NodeCount(5));
    }
}
