//! Strongly-typed value types shared by the geometry and mesh modules.
//!
//! - [`Bounds1D`]: closed interval bounds with inclusive membership
//! - [`LabelIndex`] / [`NodeIndex`]: index newtypes that cannot be mixed up
//!
//! # Example
//!
//! ```
//! use rctmod::types::{Bounds1D, LabelIndex};
//!
//! let bounds = Bounds1D::new(0.0, 0.1);
//! assert!(bounds.contains(0.05));
//! assert_eq!(LabelIndex::DOMAIN.get(), 0);
//! ```

mod bounds;
mod indices;

pub use bounds::Bounds1D;
pub use indices::{LabelIndex, NodeIndex};
