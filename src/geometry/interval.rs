//! Labelled closed intervals: the domain and its material segments.

use std::fmt;

use super::GeometryError;
use crate::types::Bounds1D;

/// Label carried by the domain of every geometry.
pub const DOMAIN_LABEL: &str = "Plasma";

/// A labelled closed interval.
#[derive(Clone, Debug, PartialEq)]
pub struct Interval {
    label: String,
    bounds: Bounds1D,
}

impl Interval {
    /// Create a labelled interval `[lower, upper]`.
    pub fn new(label: impl Into<String>, lower: f64, upper: f64) -> Result<Self, GeometryError> {
        let label = label.into();
        if label.is_empty() {
            return Err(GeometryError::EmptyLabel);
        }
        let bounds = Bounds1D::try_new(lower, upper)?;
        Ok(Self { label, bounds })
    }

    /// Material label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Interval bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds1D {
        self.bounds
    }

    /// Check if a position lies in the interval, both ends included.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.bounds.contains(x)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.bounds)
    }
}

/// Outer extent of a geometry, always labelled [`DOMAIN_LABEL`].
#[derive(Clone, Debug, PartialEq)]
pub struct Domain(Interval);

impl Domain {
    /// Create the domain `[lower, upper]` (in m).
    pub fn new(lower: f64, upper: f64) -> Result<Self, GeometryError> {
        Interval::new(DOMAIN_LABEL, lower, upper).map(Self)
    }

    /// Domain label, always [`DOMAIN_LABEL`].
    #[inline]
    pub fn label(&self) -> &str {
        self.0.label()
    }

    /// Domain bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds1D {
        self.0.bounds()
    }

    /// Check if a position lies in the domain, both ends included.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.0.contains(x)
    }

    /// Underlying interval.
    pub fn interval(&self) -> &Interval {
        &self.0
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self(Interval {
            label: DOMAIN_LABEL.to_string(),
            bounds: Bounds1D::unit(),
        })
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Domain {}: {} m", self.label(), self.bounds())
    }
}

/// Material region layered over the domain.
///
/// Labels may repeat: two disjoint metal electrodes share one material.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment(Interval);

impl Segment {
    /// Create a segment `[lower, upper]` (in m) with the given material label.
    ///
    /// # Example
    ///
    /// ```
    /// use rctmod::geometry::Segment;
    ///
    /// let metal = Segment::new("Metal", -10.0, -8.0).unwrap();
    /// assert!(metal.contains(-8.0));
    /// assert!(!metal.contains(-7.9));
    /// ```
    pub fn new(label: impl Into<String>, lower: f64, upper: f64) -> Result<Self, GeometryError> {
        Interval::new(label, lower, upper).map(Self)
    }

    /// Material label.
    #[inline]
    pub fn label(&self) -> &str {
        self.0.label()
    }

    /// Segment bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds1D {
        self.0.bounds()
    }

    /// Check if a position lies in the segment, both ends included.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.0.contains(x)
    }

    /// Underlying interval.
    pub fn interval(&self) -> &Interval {
        &self.0
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment {}: {} m", self.label(), self.bounds())
    }
}
