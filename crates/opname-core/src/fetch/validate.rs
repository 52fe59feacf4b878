//! Source URL validation (http/https only).

use url::Url;

use crate::error::FetchError;

/// Parses `raw` and checks that it names an HTTP(S) resource.
pub fn validate_source_url(raw: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(invalid(format!("unsupported scheme {:?}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SOURCE_URL;

    #[test]
    fn accepts_default_source() {
        let url = validate_source_url(DEFAULT_SOURCE_URL).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("raw.githubusercontent.com"));
    }

    #[test]
    fn accepts_plain_http_with_port() {
        let url = validate_source_url("http://127.0.0.1:8080/doc.md").unwrap();
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn rejects_other_schemes() {
        for raw in ["ftp://example.com/doc.md", "file:///tmp/doc.md"] {
            match validate_source_url(raw) {
                Err(FetchError::InvalidUrl { url, reason }) => {
                    assert_eq!(url, raw);
                    assert!(reason.contains("unsupported scheme"), "{}", reason);
                }
                other => panic!("expected InvalidUrl for {}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            validate_source_url("not a url"),
            Err(FetchError::InvalidUrl { .. })
        ));
    }
}
