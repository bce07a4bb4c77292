//! LRU Cache for Compiled Scope Patterns
//!
//! Domain scoping builds one regex per `(registrable domain, subdomain flag)`.
//! A crawler asks for the same few scopes over and over, so compiled patterns
//! are kept in a bounded LRU behind a mutex and shared across threads.

use std::num::NonZeroUsize;
use std::sync::LazyLock;

use ::lru::LruCache;
use parking_lot::Mutex;
use regex::Regex;
use tracing::debug;

use crate::error::Result;

/// Capacity of the process-wide cache used by the free functions.
pub const DEFAULT_CAPACITY: usize = 64;

static SHARED: LazyLock<PatternCache> = LazyLock::new(|| PatternCache::new(DEFAULT_CAPACITY));

/// Process-wide pattern cache.
#[must_use]
pub fn shared() -> &'static PatternCache {
    &SHARED
}

type ScopeKey = (String, bool);

/// Thread-safe LRU of compiled scope patterns.
pub struct PatternCache {
    entries: Mutex<LruCache<ScopeKey, Regex>>,
}

impl PatternCache {
    /// Create a cache holding at most `capacity` patterns (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Return the cached pattern for the key, compiling it on a miss.
    ///
    /// Compile errors are returned and nothing is cached.
    pub fn get_or_compile<F>(
        &self,
        registrable: &str,
        include_subdomains: bool,
        compile: F,
    ) -> Result<Regex>
    where
        F: FnOnce() -> Result<Regex>,
    {
        let key = (registrable.to_string(), include_subdomains);
        let mut entries = self.entries.lock();
        if let Some(pattern) = entries.get(&key) {
            return Ok(pattern.clone());
        }

        debug!(registrable, include_subdomains, "compiling scope pattern");
        let pattern = compile()?;
        entries.put(key, pattern.clone());
        Ok(pattern)
    }

    /// Number of cached patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Maximum number of cached patterns.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }
}

impl std::fmt::Debug for PatternCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
