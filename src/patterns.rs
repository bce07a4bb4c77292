//! Compiled regex patterns and extension tables for link classification.
//!
//! Static patterns are compiled once using `LazyLock`. Domain scope patterns
//! depend on the reference domain and live in [`crate::domain`].

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Classification Patterns
// =============================================================================

/// Absolute http(s) URL with at least one dot after the scheme.
///
/// Deliberately loose: no TLD or path validation.
pub static ABSOLUTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://\S+\.\S+$").expect("ABSOLUTE_URL regex")
});

// =============================================================================
// Normalization Patterns
// =============================================================================

/// Everything before a `#`. Greedy: captures up to the last `#`.
pub static BEFORE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)[#].*$").expect("BEFORE_FRAGMENT regex")
});

/// Everything before a `?`. Greedy: captures up to the last `?`.
pub static BEFORE_QUERY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)[?].*$").expect("BEFORE_QUERY regex")
});

// =============================================================================
// Extension Tables (lowercase, compared against lowercased input)
// =============================================================================

/// Extensions marking a URL as a file resource rather than a directory.
pub const FILE_EXTENSIONS: &[&str] = &[
    ".htm", ".html", ".xml", ".jpeg", ".jpg", ".png", ".ico", ".php", ".gif",
];

/// Extensions marking a link as an image.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".ico"];

/// Character class for one subdomain label in scope patterns.
///
/// ASCII only; `\w` in the `regex` crate is Unicode-aware.
pub const SUBDOMAIN_LABEL: &str = r"[-A-Za-z0-9_]+";
