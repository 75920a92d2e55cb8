//! 1D material geometry.
//!
//! A geometry is one [`Domain`] (label `"Plasma"`, index 0) with labelled
//! [`Segment`]s layered over it:
//! - [`GeometryBuilder1D`]: add the domain, then segments, then `build()`
//! - [`Geometry1D`]: immutable; classifies positions to `(label, index)`
//! - [`LabelRegistry`]: label indices in first-seen order

mod builder;
mod error;
mod geometry1d;
mod interval;
mod registry;

pub use builder::GeometryBuilder1D;
pub use error::GeometryError;
pub use geometry1d::{Classification, Geometry1D};
pub use interval::{Domain, Interval, Segment, DOMAIN_LABEL};
pub use registry::LabelRegistry;
