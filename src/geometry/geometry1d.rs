//! Immutable 1D material geometry and point classification.

use std::fmt;

use super::interval::{Domain, Segment, DOMAIN_LABEL};
use super::registry::LabelRegistry;
use crate::mesh::Mesh1D;
use crate::types::{Bounds1D, LabelIndex};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of classifying a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification<'a> {
    /// Material label at the position
    pub label: &'a str,
    /// Registry index of `label`
    pub index: LabelIndex,
}

/// 1D geometry: one domain with material segments layered over it.
///
/// Built with [`GeometryBuilder1D`](super::GeometryBuilder1D) and read-only
/// afterwards, so a shared reference can be classified against from many
/// threads.
#[derive(Clone, Debug)]
pub struct Geometry1D {
    name: String,
    is_cylindrical: bool,
    domain: Domain,
    segments: Vec<Segment>,
    /// segment_indices[k] is the registry index of segments[k]
    segment_indices: Vec<LabelIndex>,
    registry: LabelRegistry,
}

impl Geometry1D {
    pub(crate) fn from_parts(
        name: String,
        is_cylindrical: bool,
        domain: Domain,
        segments: Vec<Segment>,
        registry: LabelRegistry,
    ) -> Self {
        let segment_indices = segments
            .iter()
            .map(|s| {
                registry
                    .index_of(s.label())
                    .unwrap_or(LabelIndex::DOMAIN)
            })
            .collect();

        Self {
            name,
            is_cylindrical,
            domain,
            segments,
            segment_indices,
            registry,
        }
    }

    /// Classify a position.
    ///
    /// Positions outside every segment belong to the domain label (index 0).
    /// When several segments contain the position, the one added last wins,
    /// regardless of width. Segment ends are inclusive.
    ///
    /// # Example
    ///
    /// ```
    /// use rctmod::geometry::{Domain, GeometryBuilder1D, Segment};
    ///
    /// let mut builder = GeometryBuilder1D::new("overlap");
    /// builder
    ///     .add_domain(Domain::new(0.0, 10.0)?)?
    ///     .add_segment(Segment::new("Wide", 0.0, 10.0)?)?
    ///     .add_segment(Segment::new("Narrow", 4.0, 5.0)?)?;
    /// let geom = builder.build()?;
    ///
    /// assert_eq!(geom.classify(4.5).label, "Narrow");
    /// assert_eq!(geom.classify(8.0).label, "Wide");
    /// # Ok::<(), rctmod::geometry::GeometryError>(())
    /// ```
    pub fn classify(&self, x: f64) -> Classification<'_> {
        self.segments
            .iter()
            .zip(&self.segment_indices)
            .rev()
            .find(|(segment, _)| segment.contains(x))
            .map(|(segment, &index)| Classification {
                label: segment.label(),
                index,
            })
            .unwrap_or(Classification {
                label: DOMAIN_LABEL,
                index: LabelIndex::DOMAIN,
            })
    }

    /// Check whether the material at `x` carries `label`.
    pub fn label_matches(&self, x: f64, label: &str) -> bool {
        self.classify(x).label == label
    }

    /// Classify every position, returning registry indices.
    pub fn classify_all(&self, xs: &[f64]) -> Vec<LabelIndex> {
        xs.iter().map(|&x| self.classify(x).index).collect()
    }

    /// Parallel version of [`Geometry1D::classify_all`].
    ///
    /// Enable with the `parallel` feature.
    #[cfg(feature = "parallel")]
    pub fn classify_all_parallel(&self, xs: &[f64]) -> Vec<LabelIndex> {
        xs.par_iter().map(|&x| self.classify(x).index).collect()
    }

    /// Material index at every node of `mesh`.
    ///
    /// Mesh positions run over `[0, width]`; node `i` is placed at
    /// `bounds().lower + mesh.positions()[i]`.
    pub fn material_map(&self, mesh: &Mesh1D) -> Vec<LabelIndex> {
        let x0 = self.domain.bounds().lower;
        mesh.positions()
            .iter()
            .map(|&x| self.classify(x0 + x).index)
            .collect()
    }

    /// Geometry name, used by renderers as the output artifact name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the geometry is cylindrically symmetric (metadata only).
    pub fn is_cylindrical(&self) -> bool {
        self.is_cylindrical
    }

    /// Spatial dimension, always 1.
    pub fn dim(&self) -> usize {
        1
    }

    /// The domain.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Domain bounds.
    pub fn bounds(&self) -> Bounds1D {
        self.domain.bounds()
    }

    /// Domain width, the extent a matching mesh should cover.
    pub fn width(&self) -> f64 {
        self.domain.bounds().width()
    }

    /// Segments in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Label registry.
    pub fn registry(&self) -> &LabelRegistry {
        &self.registry
    }

    /// Number of distinct materials, domain included.
    pub fn material_count(&self) -> usize {
        self.registry.len()
    }

    /// Registry index of a label.
    pub fn index_of(&self, label: &str) -> Option<LabelIndex> {
        self.registry.index_of(label)
    }

    /// Label with a given registry index.
    pub fn label_of(&self, index: LabelIndex) -> Option<&str> {
        self.registry.label_of(index)
    }
}

impl fmt::Display for Geometry1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Geometry {} dimension {}D", self.name, self.dim())?;
        if self.is_cylindrical {
            write!(f, " cylindrical")?;
        }
        write!(f, "\n{}", self.domain)?;
        write!(f, "\nGeometry sequence:")?;
        for (segment, index) in self.segments.iter().zip(&self.segment_indices) {
            write!(f, "\n  {} ({})", segment, index)?;
        }
        Ok(())
    }
}
