//! Process-wide caches: rule interning and compiled patterns

use crate::condition::ast::Condition;
use crate::error::{AudienceError, Result};
use ahash::AHashMap;
use log::{trace, warn};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;
use std::sync::Arc;

/// Interned rule trees, keyed by structure
static CONDITION_CACHE: Lazy<RwLock<AHashMap<Condition, Arc<Condition>>>> =
    Lazy::new(|| RwLock::new(AHashMap::with_capacity(256)));

/// Patterns for `regex` leaves: the shared compiled form, or the compile error
static PATTERN_CACHE: Lazy<RwLock<AHashMap<String, CompiledPattern>>> =
    Lazy::new(|| RwLock::new(AHashMap::with_capacity(64)));

type CompiledPattern = std::result::Result<Arc<Regex>, regex::Error>;

/// Return the shared copy of a condition tree
///
/// Structurally equal trees (same children, same order) resolve to the same
/// `Arc`, so rules repeated across audiences are stored once.
///
/// Entries are never evicted on their own. Intern rules loaded from
/// configuration, not trees built per request; drop stale rules with
/// [`forget`] or [`clear_cache`] when a configuration is replaced.
pub fn intern(condition: Condition) -> Arc<Condition> {
    // Fast path: check read lock first
    {
        let cache = CONDITION_CACHE.read();
        if let Some(shared) = cache.get(&condition) {
            return Arc::clone(shared);
        }
    }

    let mut cache = CONDITION_CACHE.write();
    // Another writer may have inserted it between the two locks
    Arc::clone(cache.entry(condition).or_insert_with_key(|condition| {
        trace!("interning condition {}", condition);
        Arc::new(condition.clone())
    }))
}

/// Remove an interned tree; existing `Arc`s stay valid
pub fn forget(condition: &Condition) -> Option<Arc<Condition>> {
    CONDITION_CACHE.write().remove(condition)
}

/// Get or compile a pattern, caching the compiled form
///
/// Every caller gets the same `Arc<Regex>`, so the regex's internal match
/// caches are reused across evaluations. A pattern that fails to compile is
/// cached too and only logged the first time.
#[inline]
pub fn get_or_compile(pattern: &str) -> Result<Arc<Regex>> {
    {
        let cache = PATTERN_CACHE.read();
        if let Some(compiled) = cache.get(pattern) {
            return to_result(pattern, compiled);
        }
    }

    let mut cache = PATTERN_CACHE.write();
    let compiled = cache
        .entry(pattern.to_string())
        .or_insert_with_key(|pattern| {
            trace!("compiling pattern '{}'", pattern);
            Regex::new(pattern).map(Arc::new).inspect_err(|err| {
                warn!("pattern '{}' does not compile: {}", pattern, err);
            })
        });
    to_result(pattern, compiled)
}

fn to_result(pattern: &str, compiled: &CompiledPattern) -> Result<Arc<Regex>> {
    match compiled {
        Ok(regex) => Ok(Arc::clone(regex)),
        Err(source) => Err(AudienceError::InvalidPattern {
            pattern: pattern.to_string(),
            source: source.clone(),
        }),
    }
}

/// Clear both caches (useful for testing)
pub fn clear_cache() {
    CONDITION_CACHE.write().clear();
    PATTERN_CACHE.write().clear();
}

/// Number of interned condition trees
pub fn cache_size() -> usize {
    CONDITION_CACHE.read().len()
}

/// Number of cached patterns, including ones that failed to compile
pub fn pattern_cache_size() -> usize {
    PATTERN_CACHE.read().len()
}
