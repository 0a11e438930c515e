//! Compiled-pattern cache.
//!
//! Entries are keyed by regex source and live as long as the cache. There is
//! no eviction: keys come from directives, which are static configuration.

use std::sync::Arc;

use dashmap::DashMap;
use fancy_regex::Regex;

use crate::error::MaskError;

/// Shared, thread-safe memo of compiled regexes.
///
/// Cloning is cheap and every clone sees the same entries. Concurrent first
/// use of the same source may compile it twice, but only one compiled
/// instance is ever published for a given source.
#[derive(Clone, Debug, Default)]
pub struct PatternCache {
    patterns: Arc<DashMap<String, Arc<Regex>>>,
}

impl PatternCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled form of `regex`, compiling it on first use.
    ///
    /// Fails with [`MaskError::Pattern`] naming `regex` when it does not compile.
    /// Failures are not cached.
    pub fn compile(&self, regex: &str) -> Result<Arc<Regex>, MaskError> {
        if let Some(pattern) = self.patterns.get(regex) {
            return Ok(Arc::clone(pattern.value()));
        }

        // Compile outside the shard lock; the entry API settles races.
        let compiled = Regex::new(regex).map_err(|err| MaskError::pattern(regex, err))?;
        let entry = self
            .patterns
            .entry(regex.to_string())
            .or_insert_with(|| Arc::new(compiled));
        Ok(Arc::clone(entry.value()))
    }

    /// Returns `true` if `regex` has already been compiled.
    pub fn contains(&self, regex: &str) -> bool {
        self.patterns.contains_key(regex)
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if nothing has been compiled yet.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::PatternCache;
    use crate::error::MaskError;

    #[test]
    fn compile_is_idempotent() {
        let cache = PatternCache::new();
        let first = cache.compile(r"\d+").unwrap();
        let second = cache.compile(r"\d+").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clones_share_entries() {
        let cache = PatternCache::new();
        let clone = cache.clone();
        clone.compile("a+").unwrap();
        assert!(cache.contains("a+"));
    }

    #[test]
    fn invalid_regex_names_source_and_is_not_cached() {
        let cache = PatternCache::new();
        let err = cache.compile("[a-").unwrap_err();
        match &err {
            MaskError::Pattern { regex, .. } => assert_eq!(regex, "[a-"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_first_use_publishes_one_instance() {
        let cache = PatternCache::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                thread::spawn(move || cache.compile("(?<=.).*(?=@)").unwrap())
            })
            .collect();
        let compiled: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let published = cache.compile("(?<=.).*(?=@)").unwrap();
        assert!(compiled.iter().all(|p| Arc::ptr_eq(p, &published)));
        assert_eq!(cache.len(), 1);
    }
}
