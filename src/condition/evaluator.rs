//! Condition evaluator
//!
//! Evaluation is a pure function of (tree, attributes). Composites run their
//! children left to right and stop at the first child that decides the
//! result: `And` on the first false, `Or` on the first true.

use crate::attribute::{AttributeSource, AttributeValue};
use crate::condition::ast::{Condition, MatchType, UserAttribute};
use crate::condition::cache;
use crate::condition::tribool::TriBool;
use log::debug;
use std::cmp::Ordering;

/// Evaluate a condition tree against a set of attributes
pub fn evaluate<A: AttributeSource + ?Sized>(condition: &Condition, attributes: &A) -> TriBool {
    match condition {
        Condition::And(children) => evaluate_and(children, attributes),
        Condition::Or(children) => evaluate_or(children, attributes),
        Condition::Not(child) => !evaluate(child, attributes),
        Condition::Attribute(attribute) => evaluate_attribute(attribute, attributes),
    }
}

fn evaluate_and<A: AttributeSource + ?Sized>(children: &[Condition], attributes: &A) -> TriBool {
    let mut saw_unknown = false;
    for child in children {
        match evaluate(child, attributes) {
            TriBool::False => return TriBool::False,
            TriBool::Unknown => saw_unknown = true,
            TriBool::True => {}
        }
    }

    if saw_unknown {
        TriBool::Unknown
    } else {
        TriBool::True
    }
}

fn evaluate_or<A: AttributeSource + ?Sized>(children: &[Condition], attributes: &A) -> TriBool {
    let mut saw_unknown = false;
    for child in children {
        match evaluate(child, attributes) {
            TriBool::True => return TriBool::True,
            TriBool::Unknown => saw_unknown = true,
            TriBool::False => {}
        }
    }

    if saw_unknown {
        TriBool::Unknown
    } else {
        TriBool::False
    }
}

/// Evaluate a single leaf predicate
pub fn evaluate_attribute<A: AttributeSource + ?Sized>(
    attribute: &UserAttribute,
    attributes: &A,
) -> TriBool {
    let actual = attributes
        .get_attribute(&attribute.name)
        .filter(|value| !value.is_null());

    if attribute.match_type == MatchType::Exists {
        return actual.is_some().into();
    }

    let Some(actual) = actual else {
        debug!(
            "attribute '{}' missing, condition {} is unknown",
            attribute.name, attribute
        );
        return TriBool::Unknown;
    };

    match match_value(attribute, actual) {
        Some(result) => result.into(),
        None => {
            debug!(
                "attribute '{}' has {} value, condition {} is unknown",
                attribute.name,
                actual.type_name(),
                attribute
            );
            TriBool::Unknown
        }
    }
}

/// Apply the leaf's operator; `None` when the value types are incompatible
fn match_value(attribute: &UserAttribute, actual: &AttributeValue) -> Option<bool> {
    let expected = &attribute.value;

    match attribute.match_type {
        MatchType::Exists => Some(true),
        MatchType::Exact => match (actual, expected) {
            (AttributeValue::String(a), AttributeValue::String(e)) => Some(a == e),
            (AttributeValue::Bool(a), AttributeValue::Bool(e)) => Some(a == e),
            (AttributeValue::Number(_), AttributeValue::Number(_)) => {
                let a = actual.as_finite_number()?;
                let e = expected.as_finite_number()?;
                Some(a == e)
            }
            _ => None,
        },
        MatchType::Substring => {
            let a = actual.as_str()?;
            let e = expected.as_str()?;
            Some(a.contains(e))
        }
        MatchType::Gt | MatchType::Ge | MatchType::Lt | MatchType::Le => {
            let a = actual.as_finite_number()?;
            let e = expected.as_finite_number()?;
            let ordering = a.partial_cmp(&e)?;
            Some(match attribute.match_type {
                MatchType::Gt => ordering == Ordering::Greater,
                MatchType::Ge => ordering != Ordering::Less,
                MatchType::Lt => ordering == Ordering::Less,
                _ => ordering != Ordering::Greater,
            })
        }
        MatchType::Regex => {
            let a = actual.as_str()?;
            let pattern = expected.as_str()?;
            // compile failures are logged once by the cache
            cache::get_or_compile(pattern).ok().map(|regex| regex.is_match(a))
        }
    }
}

impl Condition {
    /// Evaluate this tree against a set of attributes
    #[inline]
    pub fn evaluate<A: AttributeSource + ?Sized>(&self, attributes: &A) -> TriBool {
        evaluate(self, attributes)
    }
}
