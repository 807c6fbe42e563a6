//! Condition tree for audience rules

use crate::attribute::AttributeValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Node of an audience condition tree
///
/// Trees are immutable once built and compare structurally: two `And` nodes
/// are equal only when their children are equal in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// True when every child is true. Empty `And` is true.
    And(Vec<Condition>),
    /// True when any child is true. Empty `Or` is false.
    Or(Vec<Condition>),
    /// Negation of a single child
    Not(Box<Condition>),
    /// Leaf predicate against one user attribute
    Attribute(UserAttribute),
}

/// Leaf predicate: attribute name, match operator and expected value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserAttribute {
    pub name: String,
    #[serde(rename = "match")]
    pub match_type: MatchType,
    #[serde(default)]
    pub value: AttributeValue,
}

/// Match operators for leaf predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Attribute equals value (same type)
    Exact,
    /// Attribute is present and not null
    Exists,
    /// String attribute contains value
    Substring,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Ge,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Le,
    /// String attribute matches a regular expression
    Regex,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Exists => "exists",
            MatchType::Substring => "substring",
            MatchType::Gt => "gt",
            MatchType::Ge => "ge",
            MatchType::Lt => "lt",
            MatchType::Le => "le",
            MatchType::Regex => "regex",
        }
    }

    /// Operators that compare numbers
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, MatchType::Gt | MatchType::Ge | MatchType::Lt | MatchType::Le)
    }
}

impl Condition {
    pub fn and(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::And(conditions.into_iter().collect())
    }

    pub fn or(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Or(conditions.into_iter().collect())
    }

    pub fn not(condition: Condition) -> Self {
        Condition::Not(Box::new(condition))
    }

    pub fn attribute(
        name: impl Into<String>,
        match_type: MatchType,
        value: impl Into<AttributeValue>,
    ) -> Self {
        Condition::Attribute(UserAttribute::new(name, match_type, value))
    }

    /// Shorthand for an `exact` leaf
    pub fn exact(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self::attribute(name, MatchType::Exact, value)
    }

    /// Shorthand for an `exists` leaf
    pub fn exists(name: impl Into<String>) -> Self {
        Self::attribute(name, MatchType::Exists, AttributeValue::Null)
    }

    /// Direct children of this node, in evaluation order
    pub fn children(&self) -> &[Condition] {
        match self {
            Condition::And(children) | Condition::Or(children) => children,
            Condition::Not(child) => std::slice::from_ref(child.as_ref()),
            Condition::Attribute(_) => &[],
        }
    }

    /// Number of nodes in the tree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Condition::node_count).sum::<usize>()
    }

    /// Depth of the tree; a single leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Condition::depth)
            .max()
            .unwrap_or(0)
    }
}

impl UserAttribute {
    pub fn new(
        name: impl Into<String>,
        match_type: MatchType,
        value: impl Into<AttributeValue>,
    ) -> Self {
        UserAttribute {
            name: name.into(),
            match_type,
            value: value.into(),
        }
    }
}

impl From<UserAttribute> for Condition {
    fn from(attribute: UserAttribute) -> Self {
        Condition::Attribute(attribute)
    }
}

fn write_composite(f: &mut fmt::Formatter<'_>, kind: &str, children: &[Condition]) -> fmt::Result {
    write!(f, "[{}", kind)?;
    for child in children {
        write!(f, ", {}", child)?;
    }
    f.write_str("]")
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::And(children) => write_composite(f, "and", children),
            Condition::Or(children) => write_composite(f, "or", children),
            Condition::Not(child) => write_composite(f, "not", std::slice::from_ref(child.as_ref())),
            Condition::Attribute(attribute) => fmt::Display::fmt(attribute, f),
        }
    }
}

impl fmt::Display for UserAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{name='{}', match='{}', value=", self.name, self.match_type.as_str())?;
        // quote strings so `18` and `"18"` render differently
        match &self.value {
            AttributeValue::String(s) => write!(f, "{:?}}}", s),
            other => write!(f, "{}}}", other),
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
