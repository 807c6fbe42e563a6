//! Audiences: a named condition tree plus the inclusion policy

use crate::attribute::AttributeSource;
use crate::condition::{Condition, TriBool};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A targeting audience
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Audience {
    pub id: String,
    pub name: String,
    pub conditions: Condition,
}

impl Audience {
    pub fn new(id: impl Into<String>, name: impl Into<String>, conditions: Condition) -> Self {
        Audience {
            id: id.into(),
            name: name.into(),
            conditions,
        }
    }

    /// Raw three-valued result of the audience's conditions
    #[inline]
    pub fn evaluate<A: AttributeSource + ?Sized>(&self, attributes: &A) -> TriBool {
        self.conditions.evaluate(attributes)
    }

    /// Whether the user is in the audience; `Unknown` counts as not matching
    pub fn is_match<A: AttributeSource + ?Sized>(&self, attributes: &A) -> bool {
        let result = self.evaluate(attributes);
        log::debug!("audience '{}' ({}) evaluated to {}", self.name, self.id, result);
        result.is_true()
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Audience{{id='{}', name='{}', conditions={}}}",
            self.id, self.name, self.conditions
        )
    }
}
