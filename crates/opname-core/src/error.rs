//! Typed failures of the two run stages.
//!
//! Both are fatal for a run; callers wrap them in `anyhow` with context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the remote document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL did not parse or is not http/https. Raised before any network activity.
    #[error("invalid source URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// Curl reported an error (resolution, connection refused, timeout, TLS...).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    /// Writing the downloaded bytes to the temporary file failed.
    #[error("spool document to temporary file: {0}")]
    Spool(#[source] io::Error),
}

/// Failure to scan a document.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// I/O error or invalid UTF-8 on the given 1-based line.
    #[error("read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("compile operator pattern: {0}")]
    Pattern(#[from] regex::Error),
}
