//! URL Utility Functions
//!
//! Classification and normalization of raw extracted links. Everything here
//! works on plain strings: no URL parsing, no failure modes. Malformed input
//! gives `false` or comes back unchanged.

use crate::collections::filter_slice;
use crate::patterns::{
    ABSOLUTE_URL, BEFORE_FRAGMENT, BEFORE_QUERY, FILE_EXTENSIONS, IMAGE_EXTENSIONS,
};
use crate::text::{add_trailing_slash, ends_with_any_ignore_case};

/// Check if a string looks like an absolute http(s) URL.
///
/// Requires the `http://` or `https://` prefix followed by non-whitespace
/// text containing at least one dot. Hosts, TLDs and paths are not validated.
///
/// # Examples
/// ```
/// use linkscope::url_utils::is_url;
///
/// assert!(is_url("https://example.com/page"));
/// assert!(!is_url("example.com/page"));
/// assert!(!is_url("http://localhost/"));
/// ```
#[must_use]
pub fn is_url(candidate: &str) -> bool {
    ABSOLUTE_URL.is_match(candidate)
}

/// Check if a URL points at a file rather than a directory-like page.
///
/// Case-insensitive match on `.htm .html .xml .jpeg .jpg .png .ico .php .gif`.
#[must_use]
pub fn is_file_resource(candidate: &str) -> bool {
    ends_with_any_ignore_case(candidate, FILE_EXTENSIONS)
}

/// Check if a link points at an image (`.png .jpg .jpeg .gif .ico`).
#[must_use]
pub fn is_image_link(link: &str) -> bool {
    ends_with_any_ignore_case(link, IMAGE_EXTENSIONS)
}

/// Remove the fragment from a URL.
///
/// The match is greedy: with several `#` the text up to the last one is kept.
///
/// # Examples
/// ```
/// use linkscope::url_utils::strip_fragment;
///
/// assert_eq!(strip_fragment("http://a.com/x#top"), "http://a.com/x");
/// assert_eq!(strip_fragment("http://a.com/x#y#z"), "http://a.com/x#y");
/// assert_eq!(strip_fragment("http://a.com/x"), "http://a.com/x");
/// ```
#[must_use]
pub fn strip_fragment(url: &str) -> &str {
    text_before(url, &BEFORE_FRAGMENT)
}

/// Remove the query string from a URL.
///
/// Same greedy rule as [`strip_fragment`], for `?`.
#[must_use]
pub fn strip_query(url: &str) -> &str {
    text_before(url, &BEFORE_QUERY)
}

fn text_before<'a>(url: &'a str, pattern: &regex::Regex) -> &'a str {
    pattern
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map_or(url, |m| m.as_str())
}

/// Append `/` to directory-like URLs.
///
/// File resources, URLs already ending in `/`, and the empty string are
/// returned unchanged.
///
/// # Examples
/// ```
/// use linkscope::url_utils::ensure_trailing_slash;
///
/// assert_eq!(ensure_trailing_slash("http://a.com/docs"), "http://a.com/docs/");
/// assert_eq!(ensure_trailing_slash("http://a.com/index.html"), "http://a.com/index.html");
/// assert_eq!(ensure_trailing_slash(""), "");
/// ```
#[must_use]
pub fn ensure_trailing_slash(url: &str) -> String {
    if url.is_empty() || is_file_resource(url) {
        return url.to_string();
    }
    add_trailing_slash(url)
}

/// Extract the domain segment from `scheme://DOMAIN/...`.
///
/// This is the third `/`-delimited segment, port included. No parsing is done.
///
/// # Returns
/// * `Some(domain)`, or `None` if the segment is missing or empty
#[must_use]
pub fn extract_domain(url: &str) -> Option<&str> {
    url.split('/').nth(2).filter(|segment| !segment.is_empty())
}

/// Drop links that point at images, preserving order.
#[must_use]
pub fn exclude_image_links<S: AsRef<str>>(links: &[S]) -> Vec<String> {
    filter_slice(links, |link| !is_image_link(link))
}
