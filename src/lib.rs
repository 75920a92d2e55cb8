//! # rctmod
//!
//! 1D geometry and mesh pre-processing for plasma reactor models.
//!
//! This crate provides:
//! - Labelled material geometry: a `"Plasma"` domain with material segments
//!   (metal, quartz, ...) and last-added-wins point classification
//! - A uniform 1D mesh over the domain width
//! - Central finite-difference first and second derivatives with boundary
//!   replication
//!
//! # Example
//!
//! ```
//! use rctmod::{Domain, GeometryBuilder1D, Mesh1D, Segment};
//!
//! let mut builder = GeometryBuilder1D::new("1D_Test");
//! builder
//!     .add_domain(Domain::new(-10.0, 10.0)?)?
//!     .add_segment(Segment::new("M", -10.0, -8.0)?)?
//!     .add_segment(Segment::new("M", 5.0, 10.0)?)?
//!     .add_segment(Segment::new("D", -6.0, 0.0)?)?;
//! let geom = builder.build()?;
//!
//! let c = geom.classify(-3.0);
//! assert_eq!((c.label, c.index.get()), ("D", 2));
//!
//! let mesh = Mesh1D::new(geom.width(), 21).expect("valid mesh");
//! let materials = geom.material_map(&mesh);
//! assert_eq!(materials.len(), 21);
//! # Ok::<(), rctmod::GeometryError>(())
//! ```

pub mod geometry;
pub mod mesh;
pub mod operators;
pub mod types;

// Re-export main types for convenience
pub use geometry::{
    Classification, Domain, Geometry1D, GeometryBuilder1D, GeometryError, Interval,
    LabelRegistry, Segment, DOMAIN_LABEL,
};
pub use mesh::{Mesh1D, MeshConfig, MeshError, MeshResolution};
pub use operators::{central_difference, second_central_difference};
pub use types::{Bounds1D, LabelIndex, NodeIndex};
