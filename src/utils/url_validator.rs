//! URL scheme validation.

use crate::error::AppError;

/// Validates that a URL begins with an accepted scheme.
///
/// Only `http://` and `https://` are accepted, matched case-sensitively as a
/// plain prefix. No further parsing happens here: deduplication is an exact
/// match on the caller-supplied string, so the service deliberately does not
/// normalize or canonicalize URLs.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrlFormat`] for any other input.
pub fn validate_url_scheme(url: &str) -> Result<(), AppError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(AppError::InvalidUrlFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http() {
        assert!(validate_url_scheme("http://x.com").is_ok());
    }

    #[test]
    fn test_accepts_https() {
        assert!(validate_url_scheme("https://x.com").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        for url in ["ftp://x.com", "file:///etc/passwd", "mailto:a@b.c"] {
            assert!(matches!(
                validate_url_scheme(url),
                Err(AppError::InvalidUrlFormat)
            ));
        }
    }

    #[test]
    fn test_rejects_uppercase_scheme() {
        assert!(validate_url_scheme("HTTP://x.com").is_err());
    }

    #[test]
    fn test_rejects_empty_and_bare_host() {
        assert!(validate_url_scheme("").is_err());
        assert!(validate_url_scheme("x.com").is_err());
    }
}
