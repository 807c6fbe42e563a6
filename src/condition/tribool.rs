//! Three-valued (Kleene) truth values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;

/// Result of evaluating a condition: true, false, or unknown when the
/// attribute data needed to decide was missing or of the wrong type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriBool {
    True,
    False,
    Unknown,
}

impl TriBool {
    #[inline]
    pub fn is_true(self) -> bool {
        self == TriBool::True
    }

    #[inline]
    pub fn is_false(self) -> bool {
        self == TriBool::False
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        self == TriBool::Unknown
    }

    /// Kleene conjunction: false dominates, then unknown
    #[inline]
    pub fn and(self, other: TriBool) -> TriBool {
        match (self, other) {
            (TriBool::False, _) | (_, TriBool::False) => TriBool::False,
            (TriBool::True, TriBool::True) => TriBool::True,
            _ => TriBool::Unknown,
        }
    }

    /// Kleene disjunction: true dominates, then unknown
    #[inline]
    pub fn or(self, other: TriBool) -> TriBool {
        match (self, other) {
            (TriBool::True, _) | (_, TriBool::True) => TriBool::True,
            (TriBool::False, TriBool::False) => TriBool::False,
            _ => TriBool::Unknown,
        }
    }
}

impl Not for TriBool {
    type Output = TriBool;

    #[inline]
    fn not(self) -> TriBool {
        match self {
            TriBool::True => TriBool::False,
            TriBool::False => TriBool::True,
            TriBool::Unknown => TriBool::Unknown,
        }
    }
}

impl From<bool> for TriBool {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            TriBool::True
        } else {
            TriBool::False
        }
    }
}

impl From<TriBool> for Option<bool> {
    #[inline]
    fn from(value: TriBool) -> Self {
        match value {
            TriBool::True => Some(true),
            TriBool::False => Some(false),
            TriBool::Unknown => None,
        }
    }
}

impl fmt::Display for TriBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TriBool::True => "true",
            TriBool::False => "false",
            TriBool::Unknown => "unknown",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TriBool; 3] = [TriBool::True, TriBool::False, TriBool::Unknown];

    #[test]
    fn test_not() {
        assert_eq!(!TriBool::True, TriBool::False);
        assert_eq!(!TriBool::False, TriBool::True);
        assert_eq!(!TriBool::Unknown, TriBool::Unknown);
    }

    #[test]
    fn test_and_or_tables() {
        use TriBool::{False as F, True as T, Unknown as U};

        let and_table = [(T, T, T), (T, F, F), (T, U, U), (F, F, F), (F, U, F), (U, U, U)];
        let or_table = [(T, T, T), (T, F, T), (T, U, T), (F, F, F), (F, U, U), (U, U, U)];

        for (a, b, expected) in and_table {
            assert_eq!(a.and(b), expected, "{} and {}", a, b);
            assert_eq!(b.and(a), expected, "{} and {}", b, a);
        }
        for (a, b, expected) in or_table {
            assert_eq!(a.or(b), expected, "{} or {}", a, b);
            assert_eq!(b.or(a), expected, "{} or {}", b, a);
        }
    }

    #[test]
    fn test_de_morgan() {
        for a in ALL {
            for b in ALL {
                assert_eq!(!(a.and(b)), (!a).or(!b));
                assert_eq!(!(a.or(b)), (!a).and(!b));
            }
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(TriBool::from(true), TriBool::True);
        assert_eq!(Option::<bool>::from(TriBool::Unknown), None);
        assert_eq!(Option::<bool>::from(TriBool::False), Some(false));
        assert_eq!(TriBool::Unknown.to_string(), "unknown");
    }
}
