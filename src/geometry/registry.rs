//! Ordered label -> index registry.

use std::collections::HashMap;

use super::interval::DOMAIN_LABEL;
use crate::types::LabelIndex;

/// Ordered mapping from material label to [`LabelIndex`].
///
/// Index 0 is the domain label; further labels get the next index in
/// first-seen order. An assigned index never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelRegistry {
    /// labels[i] is the label with index i
    labels: Vec<String>,
    lookup: HashMap<String, LabelIndex>,
}

impl LabelRegistry {
    /// Registry holding only the domain label at index 0.
    pub(crate) fn with_domain() -> Self {
        let mut registry = Self {
            labels: Vec::new(),
            lookup: HashMap::new(),
        };
        registry.register(DOMAIN_LABEL);
        registry
    }

    /// Register a label, returning its index and whether it was new.
    pub(crate) fn register(&mut self, label: &str) -> (LabelIndex, bool) {
        if let Some(&index) = self.lookup.get(label) {
            return (index, false);
        }
        let index = LabelIndex::new(self.labels.len());
        self.labels.push(label.to_string());
        self.lookup.insert(label.to_string(), index);
        (index, true)
    }

    /// Index of a label, if registered.
    #[inline]
    pub fn index_of(&self, label: &str) -> Option<LabelIndex> {
        self.lookup.get(label).copied()
    }

    /// Label at an index, if any.
    #[inline]
    pub fn label_of(&self, index: LabelIndex) -> Option<&str> {
        self.labels.get(index.get()).map(String::as_str)
    }

    /// Number of registered labels (domain included).
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false: the domain label is registered on creation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate `(label, index)` pairs in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, LabelIndex)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), LabelIndex::new(i)))
    }
}
