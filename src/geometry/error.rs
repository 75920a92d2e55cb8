//! Errors raised while building a geometry.

use thiserror::Error;

/// Error type for geometry construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// A segment was added before the domain.
    #[error("domain is not initialized; call add_domain before add_segment")]
    DomainNotInitialized,

    /// The domain was added a second time.
    #[error("domain already added; a geometry has exactly one domain")]
    DomainAlreadyAdded,

    /// Bounds are not finite or are inverted.
    #[error("invalid bounds [{lower}, {upper}]: expected finite values with lower <= upper")]
    InvalidBounds {
        /// Requested lower bound
        lower: f64,
        /// Requested upper bound
        upper: f64,
    },

    /// A segment label was empty.
    #[error("segment label must not be empty")]
    EmptyLabel,
}
