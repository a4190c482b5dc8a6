//! Error types for URL normalization.

use thiserror::Error;

/// Errors surfaced by [`normalize_url`](crate::normalize_url).
///
/// These are the only two failure kinds of the URL layer. Domain extraction and
/// relative resolution never fail; they report degraded results through
/// [`UrlOutcome`](crate::UrlOutcome) instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlError {
    /// The input is a bare `/` with no host in front of it.
    #[error("Please enter a complete URL (e.g., example.com)")]
    MissingUrl,

    /// The input does not form a well-formed absolute URL after scheme normalization.
    #[error("Invalid URL format. Please enter a valid URL.")]
    MalformedUrl,
}

impl From<url::ParseError> for UrlError {
    fn from(err: url::ParseError) -> Self {
        tracing::debug!(error = %err, "url parser rejected input");
        UrlError::MalformedUrl
    }
}
