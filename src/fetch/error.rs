//! Error types for the fetch module.
//!
//! Every failure in the pipeline is fatal to the current invocation: there
//! are no retries. Variants carry the context (URL or path) needed for a
//! clear message at the top level.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving a URL or streaming its body.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The input carried an explicit scheme other than http/https.
    #[error("unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The rejected scheme.
        scheme: String,
    },

    /// The input could not be parsed as a URL.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// A connect or read deadline was exceeded during resolution.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Network-level failure (DNS resolution, connection refused, TLS).
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// A redirect status arrived without a Location header.
    #[error("redirect from {url} has no Location header")]
    MissingRedirectTarget {
        /// The URL whose response omitted the header.
        url: String,
    },

    /// The server answered 404.
    #[error("URL not found: {url}")]
    NotFound {
        /// The URL that was not found.
        url: String,
    },

    /// Any other non-200, non-redirect status.
    #[error("unexpected HTTP status {status} {reason} for {url}")]
    UnexpectedStatus {
        /// The URL that returned the status.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The reason phrase.
        reason: String,
    },

    /// The redirect hop count reached the configured limit.
    #[error("too many redirects (limit {limit}) starting from {url}")]
    TooManyRedirects {
        /// The URL resolution started from.
        url: String,
        /// The configured hop limit.
        limit: usize,
    },

    /// I/O failure while reading the body or writing the destination file.
    /// The partially written file is left in place.
    #[error("transfer failed for {path}: {source}")]
    TransferFailed {
        /// The destination path being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Creates an unsupported-scheme error.
    pub fn unsupported_scheme(scheme: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.into(),
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a missing-redirect-target error.
    pub fn missing_redirect_target(url: impl Into<String>) -> Self {
        Self::MissingRedirectTarget { url: url.into() }
    }

    /// Creates a not-found error.
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::NotFound { url: url.into() }
    }

    /// Creates an unexpected-status error.
    pub fn unexpected_status(url: impl Into<String>, status: u16, reason: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            url: url.into(),
            status,
            reason: reason.into(),
        }
    }

    /// Creates a too-many-redirects error.
    pub fn too_many_redirects(url: impl Into<String>, limit: usize) -> Self {
        Self::TooManyRedirects {
            url: url.into(),
            limit,
        }
    }

    /// Creates a transfer-failed error.
    pub fn transfer_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TransferFailed {
            path: path.into(),
            source,
        }
    }
}

// Note on From trait implementations:
// We intentionally do NOT implement `From<reqwest::Error>` or
// `From<std::io::Error>` because the variants require context (url, path)
// that the source errors don't provide. The helper constructors are the
// pattern used instead.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_scheme_display_names_the_scheme() {
        let error = FetchError::unsupported_scheme("ftp");
        let msg = error.to_string();
        assert!(msg.contains("ftp"), "Expected scheme in: {msg}");
        assert!(msg.contains("unsupported"), "Expected kind in: {msg}");
    }

    #[test]
    fn test_timeout_display_contains_url() {
        let error = FetchError::timeout("https://example.com/file.pdf");
        let msg = error.to_string();
        assert!(msg.contains("timeout"), "Expected 'timeout' in: {msg}");
        assert!(
            msg.contains("https://example.com/file.pdf"),
            "Expected URL in: {msg}"
        );
    }

    #[test]
    fn test_unexpected_status_display_contains_code_and_reason() {
        let error =
            FetchError::unexpected_status("https://example.com/x", 503, "Service Unavailable");
        let msg = error.to_string();
        assert!(msg.contains("503"), "Expected code in: {msg}");
        assert!(
            msg.contains("Service Unavailable"),
            "Expected reason in: {msg}"
        );
    }

    #[test]
    fn test_too_many_redirects_display_contains_limit() {
        let error = FetchError::too_many_redirects("https://example.com", 5);
        let msg = error.to_string();
        assert!(msg.contains('5'), "Expected limit in: {msg}");
    }

    #[test]
    fn test_missing_redirect_target_display() {
        let error = FetchError::missing_redirect_target("https://example.com/moved");
        let msg = error.to_string();
        assert!(msg.contains("Location"), "Expected header name in: {msg}");
        assert!(msg.contains("/moved"), "Expected URL in: {msg}");
    }

    #[test]
    fn test_transfer_failed_display_contains_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error = FetchError::transfer_failed(PathBuf::from("/tmp/out.bin"), io_error);
        let msg = error.to_string();
        assert!(msg.contains("/tmp/out.bin"), "Expected path in: {msg}");
    }
}
