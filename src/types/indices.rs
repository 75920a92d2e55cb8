//! Strongly-typed index newtypes.
//!
//! Keeps material label indices and mesh node indices apart.

use std::fmt;

macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);

            /// Create an iterator over [0, n) indices.
            pub fn iter(n: usize) -> impl ExactSizeIterator<Item = $name> {
                (0..n).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }

        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::Index<$name> for Vec<T> {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }
    };
}

define_index!(
    /// Material label index in a geometry's label registry.
    ///
    /// Index 0 always belongs to the domain label.
    ///
    /// # Example
    ///
    /// ```
    /// use rctmod::types::LabelIndex;
    ///
    /// let metal = LabelIndex::new(1);
    /// assert_eq!(metal.get(), 1);
    /// assert!(LabelIndex::DOMAIN.is_domain());
    /// ```
    LabelIndex,
    "#"
);

define_index!(
    /// Node index in a 1D mesh.
    NodeIndex,
    "N"
);

impl LabelIndex {
    /// Index reserved for the domain label.
    pub const DOMAIN: Self = Self::ZERO;

    /// True for the domain's own index.
    #[inline]
    pub fn is_domain(self) -> bool {
        self == Self::DOMAIN
    }
}
