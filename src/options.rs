//! Configuration options for link preparation and result files.
//!
//! The `Options` struct controls the subdomain policy, which post-filters run
//! in [`prepare_links`](crate::prepare_links), and where result files land.

use std::path::PathBuf;

/// Configuration options for link preparation.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use linkscope::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     include_subdomains: true,
///     results_dir: "crawl-output".to_string(),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Accept links on any subdomain of the registrable domain.
    ///
    /// When `false`, only the bare domain and its `www` alias are in scope.
    ///
    /// Default: `false`
    pub include_subdomains: bool,

    /// Drop links that point at images (`.png`, `.jpg`, `.jpeg`, `.gif`, `.ico`).
    ///
    /// Default: `true`
    pub exclude_images: bool,

    /// Remove duplicate links after filtering.
    ///
    /// Default: `true`
    pub deduplicate: bool,

    /// Name of the directory result files are written into.
    ///
    /// Default: `"RESULTS"`
    pub results_dir: String,

    /// Directory the results directory is created under.
    ///
    /// `None` means the process working directory.
    ///
    /// Default: `None`
    pub base_dir: Option<PathBuf>,

    /// Maximum number of compiled scope patterns a
    /// [`LinkFilter`](crate::LinkFilter) keeps cached.
    ///
    /// The free functions share one process-wide cache instead.
    ///
    /// Default: `64`
    pub pattern_cache_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_subdomains: false,
            exclude_images: true,
            deduplicate: true,
            results_dir: "RESULTS".to_string(),
            base_dir: None,
            pattern_cache_size: 64,
        }
    }
}
