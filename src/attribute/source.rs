//! Attribute lookup seam used by the evaluator

use crate::attribute::{AttributeValue, Attributes};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only access to a user's attributes
///
/// The evaluator only ever looks attributes up by name, so any request-scoped
/// store can be evaluated against without copying into an [`Attributes`] map.
pub trait AttributeSource {
    fn get_attribute(&self, name: &str) -> Option<&AttributeValue>;
}

impl AttributeSource for Attributes {
    #[inline]
    fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.get(name)
    }
}

impl<S: BuildHasher> AttributeSource for HashMap<String, AttributeValue, S> {
    #[inline]
    fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.get(name)
    }
}

impl AttributeSource for BTreeMap<String, AttributeValue> {
    #[inline]
    fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.get(name)
    }
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    #[inline]
    fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        (**self).get_attribute(name)
    }
}
