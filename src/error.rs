//! Error types for linkscope.
//!
//! Classification and filtering never fail; errors come from domain scoping
//! with a malformed reference domain and from result file I/O.

use std::io;
use std::path::PathBuf;

/// Error type for scoping and result file operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reference domain has fewer than two labels or is otherwise malformed.
    #[error("invalid reference domain: {0:?}")]
    InvalidDomain(String),

    /// Scope pattern failed to compile.
    #[error("scope pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),

    /// URL has no `scheme://DOMAIN/` segment to name a result file after.
    #[error("no domain segment in url: {0:?}")]
    MissingDomain(String),

    /// Current working directory could not be determined.
    #[error("cannot determine working directory: {0}")]
    WorkingDirectory(#[source] io::Error),

    /// Result file could not be created.
    #[error("cannot create result file {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing result data failed.
    #[error("writing result file failed: {0}")]
    Write(#[source] io::Error),

    /// Syncing result data to disk failed.
    #[error("flushing result file failed: {0}")]
    Flush(#[source] io::Error),
}

/// Result type alias for linkscope operations.
pub type Result<T> = std::result::Result<T, Error>;
