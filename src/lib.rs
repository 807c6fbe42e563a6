//! Audience Conditions - three-valued audience targeting evaluator
//!
//! Given a tree of AND/OR/NOT conditions over attribute-match leaves and a
//! user's attributes, decide whether the user belongs to the audience.
//! Missing or mistyped attributes resolve to [`TriBool::Unknown`] rather than
//! an error; composites combine results with Kleene logic and short-circuit
//! left to right.
//!
//! ```
//! use audience_conditions::{Attributes, Condition, TriBool};
//!
//! let rule = Condition::or([
//!     Condition::exact("browser", "chrome"),
//!     Condition::exact("browser", "firefox"),
//! ]);
//!
//! let mut attributes = Attributes::new();
//! attributes.insert("browser".to_string(), "firefox".into());
//! assert_eq!(rule.evaluate(&attributes), TriBool::True);
//! assert_eq!(rule.evaluate(&Attributes::new()), TriBool::Unknown);
//! ```
//!
//! # Logging
//!
//! Messages go through the [`log`] facade: `debug` when a leaf resolves to
//! unknown, `warn` when a stored pattern does not compile. No logger is
//! installed by this crate.

pub mod attribute;
pub mod audience;
pub mod condition;
pub mod error;

pub use attribute::{AttributeSource, AttributeValue, Attributes};
pub use audience::Audience;
pub use condition::{evaluate, Condition, MatchType, TriBool, UserAttribute};
pub use error::{AudienceError, Result};
