//! Best-effort URL helpers for display labels and relative link resolution.
//!
//! Neither function fails. When the input cannot be interpreted the caller's
//! string comes back as [`UrlOutcome::Fallback`].

use url::Url;

use crate::types::UrlOutcome;
use crate::url::normalizer::{has_scheme, with_default_scheme};

/// Extract the hostname of a URL for display.
///
/// Input without a scheme is read as `https://`. Port, path, query and fragment
/// are dropped. Unparseable input is returned trimmed but otherwise unchanged.
///
/// # Examples
///
/// ```
/// use ogscore::extract_domain;
///
/// assert_eq!(extract_domain("https://example.com:8080/path"), "example.com");
/// assert_eq!(extract_domain(" www.example.com "), "www.example.com");
///
/// let label = extract_domain("/");
/// assert!(label.is_fallback());
/// assert_eq!(label, "/");
/// ```
pub fn extract_domain(input: &str) -> UrlOutcome {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return UrlOutcome::Fallback(String::new());
    }

    match Url::parse(&with_default_scheme(trimmed)) {
        Ok(url) => match url.host_str() {
            Some(host) => UrlOutcome::Resolved(host.to_string()),
            None => {
                tracing::debug!(input = trimmed, "url has no host");
                UrlOutcome::Fallback(trimmed.to_string())
            }
        },
        Err(err) => {
            tracing::debug!(input = trimmed, error = %err, "domain extraction fell back");
            UrlOutcome::Fallback(trimmed.to_string())
        }
    }
}

/// Resolve `relative` against `base`.
///
/// Checked in order:
/// 1. `//host/...` takes the scheme of `base`
/// 2. `/path` is appended to the origin of `base`
/// 3. `scheme://...` is already absolute and returned as is
/// 4. anything else follows RFC 3986 reference resolution, with an empty
///    `relative` treated as `.`
///
/// Whenever `base` cannot be parsed (including an empty `base`), `relative` is
/// returned unchanged as a fallback.
///
/// # Examples
///
/// ```
/// use ogscore::resolve_url;
///
/// assert_eq!(resolve_url("/path", "https://example.com"), "https://example.com/path");
/// assert_eq!(
///     resolve_url("//cdn.example.com/x.jpg", "http://example.com"),
///     "http://cdn.example.com/x.jpg"
/// );
/// assert_eq!(
///     resolve_url("../image.jpg", "https://example.com/path/to/"),
///     "https://example.com/path/image.jpg"
/// );
/// assert!(resolve_url("image.jpg", "").is_fallback());
/// ```
pub fn resolve_url(relative: &str, base: &str) -> UrlOutcome {
    if relative.starts_with("//") {
        return match Url::parse(base) {
            Ok(base_url) => UrlOutcome::Resolved(format!("{}:{}", base_url.scheme(), relative)),
            Err(err) => fallback(relative, base, &err.to_string()),
        };
    }

    if relative.starts_with('/') {
        return match Url::parse(base) {
            Ok(base_url) => {
                let origin = base_url.origin();
                if origin.is_tuple() {
                    UrlOutcome::Resolved(format!("{}{}", origin.ascii_serialization(), relative))
                } else {
                    fallback(relative, base, "base has an opaque origin")
                }
            }
            Err(err) => fallback(relative, base, &err.to_string()),
        };
    }

    if has_scheme(relative) {
        return UrlOutcome::Resolved(relative.to_string());
    }

    // An empty reference resolves like "." so the result is always a directory.
    let reference = if relative.is_empty() { "." } else { relative };

    match Url::parse(base).and_then(|base_url| base_url.join(reference)) {
        Ok(resolved) => UrlOutcome::Resolved(resolved.to_string()),
        Err(err) => fallback(relative, base, &err.to_string()),
    }
}

fn fallback(relative: &str, base: &str, reason: &str) -> UrlOutcome {
    tracing::debug!(relative, base, reason, "url resolution fell back");
    UrlOutcome::Fallback(relative.to_string())
}
