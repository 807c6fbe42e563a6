//! Construction-time checks for condition trees
//!
//! Evaluation never fails, but a leaf that can only ever be unknown (an
//! empty name, a number operator with a string value, a broken pattern) is a
//! bug in whatever built the tree. Rule builders call [`Condition::validate`]
//! to surface those before the tree is published.

use crate::attribute::AttributeValue;
use crate::condition::ast::{Condition, MatchType, UserAttribute};
use crate::condition::cache;
use crate::error::{AudienceError, Result};

impl Condition {
    /// Check every leaf in the tree, returning the first violation found
    pub fn validate(&self) -> Result<()> {
        match self {
            Condition::And(children) | Condition::Or(children) => {
                children.iter().try_for_each(Condition::validate)
            }
            Condition::Not(child) => child.validate(),
            Condition::Attribute(attribute) => attribute.validate(),
        }
    }
}

impl UserAttribute {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid(self, "attribute name is empty"));
        }

        match (self.match_type, &self.value) {
            (MatchType::Exists, _) => Ok(()),
            (_, AttributeValue::Null) => Err(invalid(self, "expected value is null")),
            (MatchType::Exact, AttributeValue::Number(n)) if !n.is_finite() => {
                Err(invalid(self, "expected number is not finite"))
            }
            (MatchType::Exact, _) => Ok(()),
            (m, AttributeValue::Number(n)) if m.is_numeric() => {
                if n.is_finite() {
                    Ok(())
                } else {
                    Err(invalid(self, "expected number is not finite"))
                }
            }
            (m, _) if m.is_numeric() => Err(invalid(self, "operator requires a number")),
            (MatchType::Substring, AttributeValue::String(_)) => Ok(()),
            (MatchType::Regex, AttributeValue::String(pattern)) => {
                cache::get_or_compile(pattern).map(|_| ())
            }
            _ => Err(invalid(self, "operator requires a string")),
        }
    }
}

fn invalid(attribute: &UserAttribute, reason: &str) -> AudienceError {
    AudienceError::InvalidCondition(format!("{}: {}", attribute, reason))
}
