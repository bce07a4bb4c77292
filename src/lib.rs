//! # linkscope
//!
//! URL normalization and link filtering for a crawler's link-discovery stage.
//!
//! Raw hyperlinks extracted from a page go through four steps before they are
//! worth crawling:
//!
//! 1. **Normalize**: strip `#fragment` and `?query`, append `/` to
//!    directory-like URLs
//! 2. **Classify**: keep only absolute http(s) URLs
//! 3. **Scope**: keep links on the reference site's registrable domain
//! 4. **Filter**: drop image links
//!
//! [`prepare_links`] runs the whole pipeline; the individual steps live in
//! [`url_utils`], [`domain`] and [`collections`].
//!
//! ## Quick Start
//!
//! ```rust
//! use linkscope::{prepare_links, Options};
//!
//! let raw = [
//!     " https://example.com/docs#intro ",
//!     "https://www.example.com/about?ref=nav",
//!     "https://cdn.example.com/logo.png",
//!     "https://other.org/",
//!     "/relative/path",
//! ];
//!
//! let links = prepare_links("example.com", &raw, &Options::default())?;
//! assert_eq!(links, ["https://example.com/docs/", "https://www.example.com/about/"]);
//! # Ok::<(), linkscope::Error>(())
//! ```
//!
//! Crawl output can be stored with [`create_result_file`], which names files
//! after the crawled domain and the current time.

mod error;
mod options;
mod patterns;

/// Slice helpers: dedup, filter, trim, blank removal.
pub mod collections;

/// Domain scoping with subdomain policy.
pub mod domain;

/// Logging init for binaries.
pub mod logging;

/// LRU cache for compiled scope patterns.
pub mod lru;

/// Timestamped result files.
pub mod results;

/// Small string helpers.
pub mod text;

/// URL classification and normalization.
pub mod url_utils;

use std::collections::HashSet;

use tracing::debug;

// Public API - re-exports
pub use domain::{filter_links_by_domain, DomainScope};
pub use error::{Error, Result};
pub use options::Options;
pub use results::{create_result_file, ResultFile};
pub use url_utils::{exclude_image_links, is_file_resource, is_url};

use crate::lru::PatternCache;

/// Normalize, classify, scope and filter raw links using the shared cache.
///
/// Steps, in order: trim, drop blanks, strip fragment, strip query, keep
/// absolute URLs, ensure trailing slash, scope to the registrable domain of
/// `reference`, then drop image links and duplicates as `options` says.
/// Duplicates are removed keeping the first occurrence, so output order
/// follows input order.
///
/// # Errors
/// [`Error::InvalidDomain`] if `reference` has no registrable domain.
pub fn prepare_links<S: AsRef<str>>(
    reference: &str,
    raw_links: &[S],
    options: &Options,
) -> Result<Vec<String>> {
    let scope = DomainScope::cached(reference, options.include_subdomains, crate::lru::shared())?;
    Ok(run_pipeline(&scope, raw_links, options))
}

/// Link preparation with its own options and pattern cache.
///
/// Useful when several crawls with different settings run in one process.
#[derive(Debug)]
pub struct LinkFilter {
    options: Options,
    cache: PatternCache,
}

impl LinkFilter {
    #[must_use]
    pub fn new(options: Options) -> Self {
        let cache = PatternCache::new(options.pattern_cache_size);
        Self { options, cache }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Compiled patterns currently cached.
    #[must_use]
    pub fn cached_patterns(&self) -> usize {
        self.cache.len()
    }

    /// Same as [`prepare_links`], with this filter's options and cache.
    pub fn prepare<S: AsRef<str>>(&self, reference: &str, raw_links: &[S]) -> Result<Vec<String>> {
        let scope = DomainScope::cached(reference, self.options.include_subdomains, &self.cache)?;
        Ok(run_pipeline(&scope, raw_links, &self.options))
    }
}

fn run_pipeline<S: AsRef<str>>(
    scope: &DomainScope,
    raw_links: &[S],
    options: &Options,
) -> Vec<String> {
    let normalized: Vec<String> = collections::remove_blank(&collections::trim_all(raw_links))
        .iter()
        .map(|link| url_utils::strip_query(url_utils::strip_fragment(link)))
        .filter(|link| url_utils::is_url(link))
        .map(url_utils::ensure_trailing_slash)
        .collect();

    let mut links = scope.filter(&normalized);
    if options.exclude_images {
        links = exclude_image_links(&links);
    }
    if options.deduplicate {
        let mut seen = HashSet::new();
        links.retain(|link| seen.insert(link.clone()));
    }

    debug!(
        raw = raw_links.len(),
        normalized = normalized.len(),
        kept = links.len(),
        "prepared links"
    );
    links
}
