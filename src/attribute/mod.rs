//! Runtime user attributes
//!
//! Attributes are supplied fresh for every evaluation and are only ever read.

mod source;
mod value;

pub use source::*;
pub use value::*;

/// Attribute map keyed by attribute name (fast hashing via ahash)
pub type Attributes = ahash::AHashMap<String, AttributeValue>;
