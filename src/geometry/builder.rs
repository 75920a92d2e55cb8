//! Two-phase construction of a [`Geometry1D`].
//!
//! The builder accepts exactly one domain followed by any number of
//! segments; [`GeometryBuilder1D::build`] consumes it and yields an
//! immutable geometry.

use tracing::{debug, warn};

use super::geometry1d::Geometry1D;
use super::interval::{Domain, Segment};
use super::registry::LabelRegistry;
use super::GeometryError;

/// Builder for [`Geometry1D`].
///
/// # Example
///
/// ```
/// use rctmod::geometry::{Domain, GeometryBuilder1D, Segment};
///
/// let mut builder = GeometryBuilder1D::new("reactor");
/// builder
///     .add_domain(Domain::new(-10.0, 10.0)?)?
///     .add_segment(Segment::new("Metal", -10.0, -8.0)?)?
///     .add_segment(Segment::new("Quartz", -6.0, 0.0)?)?;
/// let geom = builder.build()?;
///
/// assert_eq!(geom.material_count(), 3);
/// # Ok::<(), rctmod::geometry::GeometryError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GeometryBuilder1D {
    name: String,
    is_cylindrical: bool,
    domain: Option<Domain>,
    segments: Vec<Segment>,
    registry: LabelRegistry,
}

impl GeometryBuilder1D {
    /// Start a geometry with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_cylindrical: false,
            domain: None,
            segments: Vec::new(),
            registry: LabelRegistry::with_domain(),
        }
    }

    /// Mark the geometry as cylindrically symmetric.
    ///
    /// Stored as metadata only; classification does not depend on it.
    pub fn cylindrical(mut self, is_cylindrical: bool) -> Self {
        self.is_cylindrical = is_cylindrical;
        self
    }

    /// Set the domain. Must come before any segment.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DomainAlreadyAdded`] on a second call.
    pub fn add_domain(&mut self, domain: Domain) -> Result<&mut Self, GeometryError> {
        if self.domain.is_some() {
            return Err(GeometryError::DomainAlreadyAdded);
        }
        debug!(geometry = %self.name, bounds = %domain.bounds(), "domain added");
        self.domain = Some(domain);
        Ok(self)
    }

    /// Append a segment. A label seen for the first time gets the next index.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DomainNotInitialized`] if no domain has been added.
    pub fn add_segment(&mut self, segment: Segment) -> Result<&mut Self, GeometryError> {
        let domain = self
            .domain
            .as_ref()
            .ok_or(GeometryError::DomainNotInitialized)?;

        if !domain.bounds().encloses(&segment.bounds()) {
            warn!(
                geometry = %self.name,
                label = segment.label(),
                segment = %segment.bounds(),
                domain = %domain.bounds(),
                "segment extends outside the domain"
            );
        }

        let (index, is_new) = self.registry.register(segment.label());
        debug!(
            geometry = %self.name,
            label = segment.label(),
            %index,
            new_label = is_new,
            "segment added"
        );
        self.segments.push(segment);
        Ok(self)
    }

    /// Whether a domain has been added.
    pub fn has_domain(&self) -> bool {
        self.domain.is_some()
    }

    /// Finalize into an immutable geometry.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DomainNotInitialized`] if no domain has been added.
    pub fn build(self) -> Result<Geometry1D, GeometryError> {
        let domain = self.domain.ok_or(GeometryError::DomainNotInitialized)?;
        Ok(Geometry1D::from_parts(
            self.name,
            self.is_cylindrical,
            domain,
            self.segments,
            self.registry,
        ))
    }
}
