//! Domain scoping of discovered links.
//!
//! A reference domain is reduced to its registrable part (the last two
//! labels) and turned into an anchored pattern:
//!
//! - with subdomains: `^https?://(label\.)*example\.com/.*$`
//! - without: `^https?://(www\.)?example\.com/.*$`
//!
//! `www` is treated as the bare domain under both policies. Both patterns
//! require a `/` after the host, so links should go through
//! [`ensure_trailing_slash`](crate::url_utils::ensure_trailing_slash) first.

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::collections::filter_slice;
use crate::error::{Error, Result};
use crate::lru::{shared, PatternCache};
use crate::patterns::SUBDOMAIN_LABEL;

/// Reduce a reference domain to its registrable part (last two labels).
///
/// The reference may be a bare hostname (`blog.example.com`) or an absolute
/// http(s) URL, in which case its host is used. Both forms go through the
/// same host parsing, so the result is lowercase and internationalized names
/// come back in punycode (`bücher.de` gives `xn--bcher-kva.de`). A single
/// trailing dot is ignored.
///
/// # Errors
/// [`Error::InvalidDomain`] when fewer than two labels remain, a label is
/// empty, or a label contains anything besides alphanumerics, `-` and `_`.
///
/// # Examples
/// ```
/// use linkscope::domain::registrable_domain;
///
/// assert_eq!(registrable_domain("foo.bar.example.com")?, "example.com");
/// assert_eq!(registrable_domain("https://www.example.org/about")?, "example.org");
/// assert!(registrable_domain("localhost").is_err());
/// # Ok::<(), linkscope::Error>(())
/// ```
pub fn registrable_domain(reference: &str) -> Result<String> {
    let invalid = || Error::InvalidDomain(reference.to_string());

    let host = reference_host(reference).ok_or_else(invalid)?;
    let host = host.strip_suffix('.').unwrap_or(&host);
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_valid_label(label)) {
        return Err(invalid());
    }

    Ok(labels[labels.len() - 2..].join("."))
}

/// Host of a URL-form or bare-host reference, parsed the same way for both.
fn reference_host(reference: &str) -> Option<String> {
    let url = if reference.starts_with("http://") || reference.starts_with("https://") {
        Url::parse(reference).ok()?
    } else {
        // A bare host must not smuggle in a port, path, query or userinfo.
        if reference
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '\\' | ':' | '?' | '#' | '@'))
        {
            return None;
        }
        Url::parse(&format!("http://{reference}/")).ok()?
    };
    url.host_str().map(str::to_string)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Pattern source for a registrable domain under the given policy.
fn scope_pattern(registrable: &str, include_subdomains: bool) -> String {
    let escaped = regex::escape(registrable);
    if include_subdomains {
        format!(r"^https?://({SUBDOMAIN_LABEL}\.)*{escaped}/.*$")
    } else {
        format!(r"^https?://(www\.)?{escaped}/.*$")
    }
}

fn compile_scope(registrable: &str, include_subdomains: bool) -> Result<Regex> {
    Ok(Regex::new(&scope_pattern(registrable, include_subdomains))?)
}

/// A compiled domain scope, reusable across many link batches.
#[derive(Debug, Clone)]
pub struct DomainScope {
    registrable: String,
    include_subdomains: bool,
    pattern: Regex,
}

impl DomainScope {
    /// Compile a scope for `reference` without touching any cache.
    pub fn new(reference: &str, include_subdomains: bool) -> Result<Self> {
        let registrable = registrable_domain(reference)?;
        let pattern = compile_scope(&registrable, include_subdomains)?;
        Ok(Self {
            registrable,
            include_subdomains,
            pattern,
        })
    }

    /// Build a scope, reusing a compiled pattern from `cache` when present.
    pub fn cached(reference: &str, include_subdomains: bool, cache: &PatternCache) -> Result<Self> {
        let registrable = registrable_domain(reference)?;
        let pattern = cache.get_or_compile(&registrable, include_subdomains, || {
            compile_scope(&registrable, include_subdomains)
        })?;
        Ok(Self {
            registrable,
            include_subdomains,
            pattern,
        })
    }

    /// The registrable domain this scope was built for.
    #[must_use]
    pub fn registrable(&self) -> &str {
        &self.registrable
    }

    #[must_use]
    pub fn includes_subdomains(&self) -> bool {
        self.include_subdomains
    }

    /// Check whether a single link is in scope.
    #[must_use]
    pub fn matches(&self, link: &str) -> bool {
        self.pattern.is_match(link)
    }

    /// In-scope links, in input order.
    #[must_use]
    pub fn filter<S: AsRef<str>>(&self, links: &[S]) -> Vec<String> {
        let kept = filter_slice(links, |link| self.matches(link));
        debug!(
            domain = %self.registrable,
            include_subdomains = self.include_subdomains,
            total = links.len(),
            kept = kept.len(),
            "scoped links to domain"
        );
        kept
    }
}

/// Keep only links belonging to the registrable domain of `reference`.
///
/// Uses the process-wide pattern cache. Output order follows input order.
///
/// # Errors
/// [`Error::InvalidDomain`] if `reference` has no registrable domain.
///
/// # Examples
/// ```
/// use linkscope::filter_links_by_domain;
///
/// let links = [
///     "http://example.com/p",
///     "http://www.example.com/p",
///     "http://blog.example.com/p",
///     "http://other.com/p",
/// ];
///
/// let strict = filter_links_by_domain("blog.example.com", &links, false)?;
/// assert_eq!(strict, ["http://example.com/p", "http://www.example.com/p"]);
///
/// let loose = filter_links_by_domain("blog.example.com", &links, true)?;
/// assert_eq!(loose.len(), 3);
/// # Ok::<(), linkscope::Error>(())
/// ```
pub fn filter_links_by_domain<S: AsRef<str>>(
    reference: &str,
    links: &[S],
    include_subdomains: bool,
) -> Result<Vec<String>> {
    let scope = DomainScope::cached(reference, include_subdomains, shared())?;
    Ok(scope.filter(links))
}
