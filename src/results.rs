//! Timestamped result files.
//!
//! Files are named `<domain>-<d-M-yyyy-HH-mm-ss><ext>` inside the configured
//! results directory, where `domain` is the `scheme://DOMAIN/` segment of the
//! crawled URL. Day and month are not zero-padded.

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::url_utils::extract_domain;

/// `chrono` format for the timestamp part of a result file name.
pub const TIMESTAMP_FORMAT: &str = "%-d-%-m-%Y-%H-%M-%S";

/// File name for a result of `domain` at `timestamp`.
///
/// `ext` is appended verbatim and should carry its leading dot.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use linkscope::results::result_file_name;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 3, 5)
///     .and_then(|d| d.and_hms_opt(7, 8, 9))
///     .unwrap_or_default();
/// assert_eq!(result_file_name("example.com", ".json", ts), "example.com-5-3-2024-07-08-09.json");
/// ```
#[must_use]
pub fn result_file_name(domain: &str, ext: &str, timestamp: NaiveDateTime) -> String {
    format!("{domain}-{}{ext}", timestamp.format(TIMESTAMP_FORMAT))
}

/// An open result file waiting for its data.
#[derive(Debug)]
pub struct ResultFile {
    path: PathBuf,
    file: File,
}

impl ResultFile {
    /// Absolute path of the created file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `data`, sync it to disk and close the file.
    ///
    /// Consumes the handle, so the file is closed on every exit path. Returns
    /// the path on success.
    pub fn write_and_close(mut self, data: &[u8]) -> Result<PathBuf> {
        self.file.write_all(data).map_err(Error::Write)?;
        self.file.sync_all().map_err(Error::Flush)?;
        drop(self.file);

        debug!(path = %self.path.display(), bytes = data.len(), "wrote result file");
        Ok(self.path)
    }
}

/// Create a result file for `url` stamped with the current local time.
///
/// See [`create_result_file_at`].
pub fn create_result_file(url: &str, ext: &str, options: &Options) -> Result<ResultFile> {
    create_result_file_at(url, ext, options, Local::now().naive_local())
}

/// Create a result file for `url` stamped with `timestamp`.
///
/// The results directory is created under `options.base_dir` (or the working
/// directory) when missing. Failure to create it is only logged; the file
/// creation that follows reports the real error.
///
/// # Errors
/// - [`Error::MissingDomain`] if `url` has no domain segment
/// - [`Error::WorkingDirectory`] if no base dir is set and the working
///   directory cannot be read
/// - [`Error::CreateFile`] if the file cannot be created
pub fn create_result_file_at(
    url: &str,
    ext: &str,
    options: &Options,
    timestamp: NaiveDateTime,
) -> Result<ResultFile> {
    let domain = extract_domain(url).ok_or_else(|| Error::MissingDomain(url.to_string()))?;

    let base = match &options.base_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().map_err(Error::WorkingDirectory)?,
    };
    let dir = base.join(&options.results_dir);
    if let Err(err) = fs::create_dir_all(&dir) {
        warn!(dir = %dir.display(), error = %err, "could not create results directory");
    }

    let path = dir.join(result_file_name(domain, ext, timestamp));
    let file = File::create(&path).map_err(|source| Error::CreateFile {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), "created result file");
    Ok(ResultFile { path, file })
}
