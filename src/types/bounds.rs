//! 1D closed interval bounds.

use std::fmt;

use crate::geometry::GeometryError;

/// Closed bounds `[lower, upper]` on the real line.
///
/// Both ends are included in membership tests.
///
/// # Example
///
/// ```
/// use rctmod::types::Bounds1D;
///
/// let bounds = Bounds1D::new(-10.0, 10.0);
///
/// assert_eq!(bounds.width(), 20.0);
/// assert!(bounds.contains(-10.0));
/// assert!(bounds.contains(10.0));
/// assert!(!bounds.contains(10.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds1D {
    /// Left end (inclusive)
    pub lower: f64,
    /// Right end (inclusive)
    pub upper: f64,
}

impl Bounds1D {
    /// Create new bounds.
    ///
    /// # Panics
    ///
    /// Panics if either end is not finite or `lower > upper`.
    /// Use [`Bounds1D::try_new`] for untrusted input.
    pub fn new(lower: f64, upper: f64) -> Self {
        assert!(
            lower.is_finite() && upper.is_finite() && lower <= upper,
            "lower ({}) must not exceed upper ({})",
            lower,
            upper
        );

        Self { lower, upper }
    }

    /// Create new bounds, rejecting non-finite ends and `lower > upper`.
    ///
    /// Degenerate bounds (`lower == upper`) are accepted.
    pub fn try_new(lower: f64, upper: f64) -> Result<Self, GeometryError> {
        if !(lower.is_finite() && upper.is_finite() && lower <= upper) {
            return Err(GeometryError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Unit interval [0, 1].
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Width (upper - lower).
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the interval.
    #[inline]
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Check if a position lies inside the bounds (inclusive).
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Check if `other` lies entirely within these bounds.
    #[inline]
    pub fn encloses(&self, other: &Bounds1D) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Return bounds as tuple (lower, upper).
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl fmt::Display for Bounds1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

impl Default for Bounds1D {
    fn default() -> Self {
        Self::unit()
    }
}

impl From<Bounds1D> for (f64, f64) {
    fn from(b: Bounds1D) -> Self {
        b.as_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_creation() {
        let b = Bounds1D::new(-2.0, 3.0);
        assert_eq!(b.lower, -2.0);
        assert_eq!(b.upper, 3.0);
        assert_eq!(b.width(), 5.0);
        assert_eq!(b.center(), 0.5);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = Bounds1D::new(0.0, 1.0);
        assert!(b.contains(0.0));
        assert!(b.contains(0.5));
        assert!(b.contains(1.0));
        assert!(!b.contains(-1e-12));
        assert!(!b.contains(1.0 + 1e-12));
        assert!(!b.contains(f64::NAN));
    }

    #[test]
    fn test_degenerate_bounds_allowed() {
        let b = Bounds1D::try_new(2.0, 2.0).unwrap();
        assert_eq!(b.width(), 0.0);
        assert!(b.contains(2.0));
    }

    #[test]
    fn test_try_new_rejects_inverted() {
        let err = Bounds1D::try_new(1.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            GeometryError::InvalidBounds {
                lower: 1.0,
                upper: 0.0
            }
        );
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(Bounds1D::try_new(f64::NAN, 1.0).is_err());
        assert!(Bounds1D::try_new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_encloses() {
        let outer = Bounds1D::new(-10.0, 10.0);
        assert!(outer.encloses(&Bounds1D::new(-10.0, -8.0)));
        assert!(!outer.encloses(&Bounds1D::new(5.0, 12.0)));
    }

    #[test]
    #[should_panic(expected = "lower")]
    fn test_invalid_panics() {
        Bounds1D::new(1.0, 0.0);
    }
}
