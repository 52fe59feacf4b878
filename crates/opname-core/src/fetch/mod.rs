//! Remote document fetch.
//!
//! One blocking GET via the curl crate (libcurl) reads the whole resource
//! into memory; the bytes are then spooled to a named temporary file that
//! lives exactly as long as the returned [`FetchedDocument`].

mod validate;

pub use validate::validate_source_url;

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tempfile::NamedTempFile;

use crate::checksum;
use crate::config::OpnameConfig;
use crate::error::FetchError;

/// Transport knobs for the single GET. Defaults mean "no timeout, follow up to 10 redirects".
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub max_redirections: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            timeout: None,
            max_redirections: 10,
        }
    }
}

impl From<&OpnameConfig> for FetchOptions {
    fn from(cfg: &OpnameConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
            max_redirections: cfg.max_redirections,
        }
    }
}

/// Downloaded document held in a temporary file.
///
/// The file is removed when this value is dropped, on success and error paths alike.
#[derive(Debug)]
pub struct FetchedDocument {
    file: NamedTempFile,
    len: u64,
    sha256: String,
}

impl FetchedDocument {
    /// Path of the spooled copy; valid until `self` is dropped.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Number of body bytes received.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowercase hex SHA-256 of the body.
    pub fn sha256(&self) -> &str {
        &self.sha256
    }
}

/// Performs a GET and returns the full response body.
///
/// Follows redirects. Runs in the current thread and blocks until the
/// transfer ends; with no timeout configured that wait is unbounded.
pub fn fetch_body(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let url = validate_source_url(url)?;
    let url = url.as_str();
    let transport = |source: curl::Error| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(opts.max_redirections).map_err(transport)?;
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t).map_err(transport)?;
    }
    if let Some(t) = opts.timeout {
        easy.timeout(t).map_err(transport)?;
    }

    tracing::debug!("GET {}", url);
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let code = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&code) {
        tracing::warn!("GET {} returned HTTP {}", url, code);
        return Err(FetchError::Http {
            url: url.to_string(),
            code,
        });
    }

    tracing::info!("GET {} -> HTTP {}, {} bytes", url, code, body.len());
    Ok(body)
}

/// Fetches `url` and spools the body into a fresh temporary file.
pub fn fetch_to_tempfile(url: &str, opts: &FetchOptions) -> Result<FetchedDocument, FetchError> {
    let body = fetch_body(url, opts)?;

    let mut file = tempfile::Builder::new()
        .prefix("opname-")
        .suffix(".md")
        .tempfile()
        .map_err(FetchError::Spool)?;
    file.write_all(&body).map_err(FetchError::Spool)?;
    file.flush().map_err(FetchError::Spool)?;

    let sha256 = checksum::sha256_bytes(&body);
    tracing::debug!(
        "spooled {} bytes to {} (sha256 {})",
        body.len(),
        file.path().display(),
        sha256
    );

    Ok(FetchedDocument {
        file,
        len: body.len() as u64,
        sha256,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_from_default_config_have_no_timeouts() {
        let opts = FetchOptions::from(&OpnameConfig::default());
        assert!(opts.connect_timeout.is_none());
        assert!(opts.timeout.is_none());
        assert_eq!(opts.max_redirections, 10);
    }

    #[test]
    fn options_from_config_timeouts() {
        let cfg = OpnameConfig {
            connect_timeout_secs: Some(3),
            timeout_secs: Some(20),
            max_redirections: 2,
            ..OpnameConfig::default()
        };
        let opts = FetchOptions::from(&cfg);
        assert_eq!(opts.connect_timeout, Some(Duration::from_secs(3)));
        assert_eq!(opts.timeout, Some(Duration::from_secs(20)));
        assert_eq!(opts.max_redirections, 2);
    }

    #[test]
    fn invalid_url_fails_before_network() {
        let err = fetch_body("ftp://example.com/x", &FetchOptions::default()).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }
}
