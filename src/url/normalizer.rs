//! URL validation and normalization for user-entered addresses.

use url::{Host, Url};

use crate::error::UrlError;

/// Scheme prepended to input that carries none.
pub const DEFAULT_SCHEME: &str = "https";

/// Check whether `input` plausibly identifies a web resource.
///
/// Never fails: anything [`normalize_url`] would reject is simply `false`.
///
/// # Examples
///
/// ```
/// use ogscore::is_valid_url;
///
/// assert!(is_valid_url("example.com"));
/// assert!(is_valid_url(" https://example.com/path?query=value "));
/// assert!(!is_valid_url("example"));
/// assert!(!is_valid_url("http:///example.com"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    normalize_url(input).is_ok()
}

/// Canonicalize user input into an absolute URL string.
///
/// Whitespace is trimmed and `https://` is prepended when no `scheme://` prefix is
/// present. The returned string is the (prefixed) input itself, not the parser's
/// serialization, so `example.com` becomes `https://example.com` without a
/// trailing slash.
///
/// # Errors
///
/// - [`UrlError::MissingUrl`] for a bare `/`
/// - [`UrlError::MalformedUrl`] when the result is not a well-formed absolute URL,
///   which includes empty input
///
/// # Examples
///
/// ```
/// use ogscore::{normalize_url, UrlError};
///
/// assert_eq!(normalize_url("example.com").unwrap(), "https://example.com");
/// assert_eq!(normalize_url("ftp://example.com").unwrap(), "ftp://example.com");
/// assert_eq!(normalize_url("/"), Err(UrlError::MissingUrl));
/// assert_eq!(normalize_url(""), Err(UrlError::MalformedUrl));
/// assert_eq!(normalize_url("http://"), Err(UrlError::MalformedUrl));
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlError> {
    let trimmed = input.trim();

    if trimmed == "/" {
        return Err(UrlError::MissingUrl);
    }

    if has_scheme(trimmed) {
        validate_explicit(trimmed)?;
        Ok(trimmed.to_string())
    } else {
        let candidate = format!("{}://{}", DEFAULT_SCHEME, trimmed);
        validate_synthesized(&candidate)?;
        Ok(candidate)
    }
}

/// Whether `input` starts with an alphabetic `scheme://` prefix.
pub fn has_scheme(input: &str) -> bool {
    match input.find("://") {
        Some(end) => end > 0 && input[..end].bytes().all(|b| b.is_ascii_alphabetic()),
        None => false,
    }
}

/// Prefix `https://` when `input` has no scheme. No validation is performed.
pub(crate) fn with_default_scheme(input: &str) -> String {
    if has_scheme(input) {
        input.to_string()
    } else {
        format!("{}://{}", DEFAULT_SCHEME, input)
    }
}

/// Schemes whose URLs cannot exist without a host.
const HOST_SCHEMES: &[&str] = &["http", "https", "ws", "wss", "ftp"];

/// Input typed with a host-bearing scheme must name an authority right after `://`.
fn validate_explicit(candidate: &str) -> Result<Url, UrlError> {
    // The WHATWG parser silently skips extra slashes, so `http:///host` parses.
    if let Some((scheme, after_scheme)) = candidate.split_once("://") {
        let needs_host = HOST_SCHEMES
            .iter()
            .any(|known| known.eq_ignore_ascii_case(scheme));

        if needs_host && (after_scheme.is_empty() || after_scheme.starts_with('/')) {
            tracing::debug!(input = candidate, "empty authority after scheme");
            return Err(UrlError::MalformedUrl);
        }
    }

    Ok(Url::parse(candidate)?)
}

/// Input typed without a scheme must carry a host that looks like a real one.
fn validate_synthesized(candidate: &str) -> Result<Url, UrlError> {
    let url = validate_explicit(candidate)?;

    let qualified = match url.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        Some(Host::Domain(domain)) => is_qualified_domain(domain),
        None => false,
    };

    if !qualified {
        tracing::debug!(input = candidate, "host is not dot-qualified");
        return Err(UrlError::MalformedUrl);
    }

    Ok(url)
}

fn is_qualified_domain(domain: &str) -> bool {
    if domain.eq_ignore_ascii_case("localhost") {
        return true;
    }

    domain.split('.').filter(|label| !label.is_empty()).count() >= 2
        && !domain.starts_with('.')
}
